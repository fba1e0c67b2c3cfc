//! Command-line arguments.

use clap::{ArgAction, Parser, ValueEnum};
use snipmd::{ConvertOptions, TableScope};

/// Fetch a web page and print the element matching a CSS selector as Markdown.
#[derive(Debug, Parser)]
#[command(name = "snipmd")]
#[command(version, about)]
pub struct Args {
    /// URL of the page to fetch
    #[arg(required_unless_present = "list_tags")]
    pub url: Option<String>,

    /// CSS selector of the element to convert (first match wins)
    #[arg(required_unless_present = "list_tags")]
    pub selector: Option<String>,

    /// How table rows and cells are found
    #[arg(long, value_enum, default_value_t = TableScopeArg::Descendants)]
    pub table_scope: TableScopeArg,

    /// User-Agent header sent with the request
    #[arg(long, default_value = concat!("snipmd/", env!("CARGO_PKG_VERSION")))]
    pub user_agent: String,

    /// More diagnostics on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the tags that have a Markdown rule and exit
    #[arg(long)]
    pub list_tags: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableScopeArg {
    /// Every row and cell below the table, nested tables included
    Descendants,
    /// Only the table's own rows and the row's own cells
    Direct,
}

impl Args {
    /// Log filter directive for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn convert_options(&self) -> ConvertOptions {
        let table_scope = match self.table_scope {
            TableScopeArg::Descendants => TableScope::Descendants,
            TableScopeArg::Direct => TableScope::Direct,
        };
        ConvertOptions { table_scope }
    }
}
