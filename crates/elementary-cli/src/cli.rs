use clap::{Args, Parser, Subcommand};
use elementary::core::units::TemperatureUnit;
use elementary::view::color::ColorKey;
use elementary::view::list::{SortDirection, SortField};
use elementary::view::subtext::SubtextField;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Elementary Developers",
    version,
    about = "Elementary CLI - Browse the periodic table, element properties and isotopes from the terminal.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    /// Defaults to `config.toml` in the platform config directory, if present.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Temperature unit for melting and boiling points (K, C or F).
    #[arg(short, long, global = true, value_name = "UNIT")]
    pub temperature_unit: Option<TemperatureUnit>,

    /// Colour elements by category (cat) or by block (block).
    #[arg(long, global = true, value_name = "KEY")]
    pub colors: Option<ColorKey>,

    /// Set a configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S display.temperature-unit=C
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", global = true)]
    pub set_values: Vec<String>,

    /// Disable coloured output. Colour is also off when stdout is not a terminal.
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the details of one element, looked up by atomic number, symbol or name.
    Show(ShowArgs),
    /// List elements, optionally filtered by a symbol or name prefix.
    List(ListArgs),
    /// Print the periodic table.
    Table(TableArgs),
    /// Load every element record and check the dataset's integrity.
    Verify,
}

/// Arguments for the `show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Atomic number, symbol or name of the element (e.g. 16, S, sulfur).
    #[arg(required = true, value_name = "QUERY")]
    pub query: String,
}

/// Arguments for the `list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Keep only elements whose symbol or name starts with this text.
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    pub filter: String,

    /// Sort column, overriding the configured one.
    #[arg(long, value_name = "FIELD")]
    pub sort: Option<SortField>,

    /// Sort in descending order.
    #[arg(long, conflicts_with = "asc")]
    pub desc: bool,

    /// Sort in ascending order, overriding a configured descending direction.
    #[arg(long)]
    pub asc: bool,
}

impl ListArgs {
    /// The direction requested on the command line, if any.
    pub fn direction(&self) -> Option<SortDirection> {
        match (self.asc, self.desc) {
            (true, _) => Some(SortDirection::Ascending),
            (_, true) => Some(SortDirection::Descending),
            _ => None,
        }
    }
}

/// Arguments for the `table` subcommand.
#[derive(Args, Debug)]
pub struct TableArgs {
    /// Value shown under each symbol (Weight, Density, Melt, Boil, Heat, Negativity, Abundance).
    #[arg(long, value_name = "FIELD")]
    pub subtext: Option<SubtextField>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_args(args: &[&str]) -> ListArgs {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::List(list) => list,
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn list_direction_flags() {
        assert_eq!(list_args(&["elementary", "list"]).direction(), None);
        assert_eq!(
            list_args(&["elementary", "list", "--desc"]).direction(),
            Some(SortDirection::Descending)
        );
        assert_eq!(
            list_args(&["elementary", "list", "--asc"]).direction(),
            Some(SortDirection::Ascending)
        );
        assert!(Cli::try_parse_from(["elementary", "list", "--asc", "--desc"]).is_err());
    }
}
