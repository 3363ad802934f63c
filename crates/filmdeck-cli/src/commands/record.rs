use clap::{Args, ValueEnum};
use color_eyre::Result;
use watch_store_core::{RecentlyViewedStore, WatchHistoryStore};
use watch_store_models::{MediaKind, ViewableItem};

use crate::output::Output;

#[derive(Args)]
pub struct ItemArgs {
    /// Display title
    #[arg(long)]
    pub title: String,

    /// Slug uniquely identifying the title in the catalog
    #[arg(long)]
    pub slug: String,

    /// Thumbnail URL
    #[arg(long, default_value = "")]
    pub thumbnail: String,

    /// Rating as the catalog serves it (e.g. "7.8")
    #[arg(long, default_value = "")]
    pub rating: String,

    /// Release year
    #[arg(long, default_value = "")]
    pub year: String,

    /// Kind of title
    #[arg(long, value_enum, default_value = "movie")]
    pub kind: KindArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Movie,
    Series,
}

impl From<KindArg> for MediaKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Movie => MediaKind::Movie,
            KindArg::Series => MediaKind::Series,
        }
    }
}

impl ItemArgs {
    fn into_item(self) -> ViewableItem {
        ViewableItem {
            title: self.title,
            slug: self.slug,
            thumbnail: self.thumbnail,
            rating: self.rating,
            year: self.year,
            kind: self.kind.into(),
        }
    }
}

pub fn run_view(args: ItemArgs, output: &Output) -> Result<()> {
    let backend = super::open_backend()?;
    let mut store = RecentlyViewedStore::new(backend);

    let item = args.into_item();
    let title = item.title.clone();
    let updated = store.record(item);

    output.success(format!(
        "Recorded view: {} ({} recently viewed)",
        title,
        updated.len()
    ));
    Ok(())
}

pub fn run_watch(args: ItemArgs, output: &Output) -> Result<()> {
    let backend = super::open_backend()?;
    let mut store = WatchHistoryStore::new(backend);

    let item = args.into_item();
    let title = item.title.clone();
    let updated = store.record(item);

    output.success(format!(
        "Recorded watch: {} ({} in history)",
        title,
        updated.len()
    ));
    Ok(())
}
