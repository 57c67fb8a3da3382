//! CLI command definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "oof")]
#[command(about = "Time-off tracker: hours off per workday for one year", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new tracker
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Year to track (1970-2100, default 2026)
        #[arg(short, long)]
        year: Option<String>,
    },

    /// Show the calendar grid with entered hours
    Show {
        /// Only show this month (1-12)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },

    /// Enter hours off for a workday (blank value clears it)
    Set {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Hours off; clamped to 1-8
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Remove the entry for a date
    Clear {
        /// Date (YYYY-MM-DD)
        date: String,
    },

    /// Show total hours and days off
    Totals,

    /// List the holidays of the tracked year
    Holidays,

    /// Export entries as JSON
    Export {
        /// Output file (default: oof-tracker-<year>.json)
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Print the document instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Replace entries with the contents of an exported JSON file
    Import {
        /// File to import
        file: PathBuf,

        /// Replace without asking for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Show or set the theme mode (auto, light, dark)
    Theme {
        /// New theme mode
        mode: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_set_accepts_negative_value() {
        let cli = Cli::try_parse_from(["oof", "set", "2026-01-02", "-4"]).unwrap();
        match cli.command {
            Some(Commands::Set { value, .. }) => assert_eq!(value, "-4"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_show_month_range() {
        assert!(Cli::try_parse_from(["oof", "show", "--month", "12"]).is_ok());
        assert!(Cli::try_parse_from(["oof", "show", "--month", "13"]).is_err());
    }

    #[test]
    fn test_export_output_conflicts_with_stdout() {
        assert!(Cli::try_parse_from(["oof", "export", "--stdout", "-o", "x.json"]).is_err());
    }
}
