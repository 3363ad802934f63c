use chrono::Local;
use clap::Args;
use color_eyre::Result;
use comfy_table::Table;
use watch_store_core::{CatalogFilter, RecentlyViewedStore, WatchHistoryStore};
use watch_store_models::{HistoryEntry, ViewableItem};

use crate::output::{Output, OutputFormat};

#[derive(Args)]
pub struct FilterArgs {
    /// Only show titles from this exact year
    #[arg(long)]
    pub year: Option<String>,

    /// Only show titles rated at or above this value
    #[arg(long, value_name = "RATING")]
    pub min_rating: Option<f64>,
}

impl FilterArgs {
    fn into_filter(self) -> CatalogFilter {
        CatalogFilter {
            year: self.year,
            min_rating: self.min_rating,
        }
    }
}

pub fn run_recent(args: FilterArgs, output: &Output) -> Result<()> {
    let backend = super::open_backend()?;
    let store = RecentlyViewedStore::new(backend);

    let filter = args.into_filter();
    let items: Vec<ViewableItem> = store
        .list()
        .into_iter()
        .filter(|item| filter.matches(item))
        .collect();

    match output.format() {
        OutputFormat::Human => {
            if items.is_empty() {
                output.info(empty_message("recently viewed titles", &filter));
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(vec!["Title", "Year", "Rating", "Kind", "Slug"]);
            for item in &items {
                table.add_row(item_row(item));
            }
            output.println(table.to_string());
        }
        _ => output.json(&serde_json::to_value(&items)?),
    }
    Ok(())
}

pub fn run_history(args: FilterArgs, output: &Output) -> Result<()> {
    let backend = super::open_backend()?;
    let store = WatchHistoryStore::new(backend);

    let filter = args.into_filter();
    let entries: Vec<HistoryEntry> = store
        .list()
        .into_iter()
        .filter(|entry| filter.matches(&entry.item))
        .collect();

    match output.format() {
        OutputFormat::Human => {
            if entries.is_empty() {
                output.info(empty_message("watch history", &filter));
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(vec!["Title", "Year", "Rating", "Kind", "Watched at", "Slug"]);
            for entry in &entries {
                let mut row = item_row(&entry.item);
                // Watched-at shown in local time, like the history page did
                let watched = entry
                    .watched_at
                    .with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M")
                    .to_string();
                row.insert(4, watched);
                table.add_row(row);
            }
            output.println(table.to_string());
        }
        _ => output.json(&serde_json::to_value(&entries)?),
    }
    Ok(())
}

fn item_row(item: &ViewableItem) -> Vec<String> {
    vec![
        item.title.clone(),
        item.year.clone(),
        item.rating.clone(),
        item.kind.to_string(),
        item.slug.clone(),
    ]
}

fn empty_message(what: &str, filter: &CatalogFilter) -> String {
    if filter.is_active() {
        format!("No {} match the selected filters.", what)
    } else {
        format!("No {} yet.", what)
    }
}
