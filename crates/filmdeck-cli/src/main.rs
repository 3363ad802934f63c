use clap::{ArgAction, Parser, Subcommand};
use commands::{clear, list, record};

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "filmdeck")]
#[command(about = "Filmdeck - keep track of what you've viewed and watched")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a title into the recently-viewed list
    #[command(long_about = "Record a viewed title. The title moves to the front of the recently-viewed list; the list keeps the ten most recent distinct titles.")]
    View {
        #[command(flatten)]
        item: record::ItemArgs,
    },
    /// Record a title into the watch history
    #[command(long_about = "Record a watched title with the current timestamp. A rewatched title moves to the front with a fresh timestamp; the history keeps the fifty most recent distinct titles.")]
    Watch {
        #[command(flatten)]
        item: record::ItemArgs,
    },
    /// List recently viewed titles, newest first
    Recent {
        #[command(flatten)]
        filter: list::FilterArgs,
    },
    /// List watch history, newest first
    History {
        #[command(flatten)]
        filter: list::FilterArgs,
    },
    /// Clear the watch history
    #[command(long_about = "Remove the entire watch history. Running it again on an empty history is a no-op. The recently-viewed list is not touched.")]
    Clear,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::View { item } => record::run_view(item, &output),
        Commands::Watch { item } => record::run_watch(item, &output),
        Commands::Recent { filter } => list::run_recent(filter, &output),
        Commands::History { filter } => list::run_history(filter, &output),
        Commands::Clear => clear::run_clear(&output),
    }
}
