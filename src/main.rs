mod commands;
mod error;
mod report;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{filter, fmt};

/// Convert a distance between miles and kilometers.
#[derive(clap::Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
struct Opts {
    /// A level of verbosity, and can be used multiple times
    #[clap(short, long, parse(from_occurrences))]
    verbose: i32,
    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Parser)]
enum Command {
    ToKilometers(commands::to_kilometers::Opts),
    ToMiles(commands::to_miles::Opts),
}

fn main() {
    let opts: Opts = Opts::parse();
    let max_level = match opts.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(filter::filter_fn(move |m| {
            m.target().starts_with("conversions") && m.level() <= &max_level
        }))
        .with(fmt::layer())
        .init();

    let result = match opts.command {
        Command::ToKilometers(opts) => commands::to_kilometers::execute(opts),
        Command::ToMiles(opts) => commands::to_miles::execute(opts),
    };

    if let Err(err) = result {
        tracing::error!(%err, "command failed");
        std::process::exit(1);
    }
}
