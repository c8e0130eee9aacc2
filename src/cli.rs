//! CLI definitions using clap derive API

use clap::builder::{NonEmptyStringValueParser, Styles, styling::AnsiColor};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::document::WriteMode;
use crate::merger::{DEFAULT_KEY, MergeOptions};

/// update-graphql-schema - embed a GraphQL schema into bundle files
#[derive(Parser, Debug)]
#[command(
    name = "update-graphql-schema",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Embed a GraphQL schema document into bundle files",
    long_about = "Reads SCHEMA once and stores it under the `graphql` key of every BUNDLE, \
                  rewriting each bundle in place in the format it was read in \
                  (JSON, YAML or TOML, detected from the extension or the content).",
    after_help = "Examples:\n    \
                  update-graphql-schema schema.json bundle.json\n    \
                  update-graphql-schema schema.yml bundles/*.yml --atomic\n    \
                  update-graphql-schema schema.json bundle.json --check\n"
)]
pub struct Cli {
    /// Schema document to embed
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Bundle files to update in place, processed in order
    #[arg(value_name = "BUNDLE")]
    pub bundles: Vec<PathBuf>,

    /// Top-level bundle key to store the schema under
    #[arg(
        long,
        value_name = "KEY",
        default_value = DEFAULT_KEY,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub key: String,

    /// Write each bundle through a temporary file and rename it into place
    #[arg(long, conflicts_with = "check")]
    pub atomic: bool,

    /// Fail if any bundle is out of date, without writing anything
    #[arg(long)]
    pub check: bool,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl Cli {
    pub fn merge_options(&self) -> MergeOptions {
        MergeOptions {
            key: self.key.clone(),
            write_mode: if self.atomic {
                WriteMode::Atomic
            } else {
                WriteMode::InPlace
            },
            check: self.check,
        }
    }
}
