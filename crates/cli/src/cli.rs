use std::path::PathBuf;

use crate::config::OutputFormat;

#[derive(clap::Parser, Debug)]
#[clap(name = "quire", version, about = "Convert HTML fragments into document trees")]
pub struct Cli {
    /// Config file to use instead of the one in the platform config directory
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Convert an HTML file and print the resulting document
    Convert {
        /// HTML file, or `-` to read standard input
        input: String,
        /// Container the markup is inserted into
        #[clap(long, value_enum, default_value_t = InsertInto::Section)]
        into: InsertInto,
        /// Output format (overrides the config file)
        #[clap(long, value_enum)]
        format: Option<OutputFormat>,
        /// Maximum markup nesting depth (overrides the config file)
        #[clap(long)]
        max_depth: Option<usize>,
    },
    /// List the tags the converter has handlers for
    Tags,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertInto {
    /// A fresh section
    Section,
    /// A fresh paragraph inside a fresh section
    Paragraph,
}
