//! update-graphql-schema - embed a GraphQL schema into bundle files
//!
//! Reads a schema document and stores it under the `graphql` key of one or more bundle
//! documents, rewriting each bundle in place in the format it was read in.

use clap::Parser;
use tracing::info;

mod cli;
mod document;
mod error;
mod format;
mod logging;
mod merger;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet);

    match merger::run(&cli.schema, &cli.bundles, &cli.merge_options()) {
        Ok(summary) => {
            info!(
                updated = summary.updated.len(),
                unchanged = summary.unchanged.len(),
                "done"
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
