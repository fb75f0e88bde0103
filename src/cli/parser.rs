use crate::models::edition::QuizEdition;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTrivia
/// CLI trivia quiz with an append-only CSV result log
#[derive(Parser)]
#[command(
    name = "rtrivia",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small trivia quiz CLI: age-gated attempts, CSV result log and comparison charts",
    long_about = None
)]
pub struct Cli {
    /// Override the result store path (useful for tests or shared files)
    #[arg(global = true, long = "results", value_name = "FILE")]
    pub results: Option<String>,

    /// Quiz edition (defaults to the one in the configuration file)
    #[arg(global = true, long = "edition", value_enum)]
    pub edition: Option<QuizEdition>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the result store
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Take the quiz
    Play {
        /// Participant name (skips the name prompt when valid)
        #[arg(long)]
        name: Option<String>,

        /// Participant age (skips the age prompt when it is a number)
        #[arg(long)]
        age: Option<String>,

        /// Number of questions (mixed edition only)
        #[arg(long, short = 'q')]
        questions: Option<usize>,

        /// Seed for the question shuffle, for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Load the question bank from a CSV file
        #[arg(long, value_name = "FILE")]
        bank: Option<String>,

        /// Do not print the comparison chart at the end
        #[arg(long = "no-chart")]
        no_chart: bool,

        /// Also write the comparison chart to a PDF file
        #[arg(long, value_name = "FILE")]
        chart: Option<String>,
    },

    /// List stored attempts
    History {
        /// Only attempts by this participant (case-insensitive)
        #[arg(long)]
        name: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Render the comparison chart from the result store
    Report {
        /// Participant to highlight
        #[arg(long, requires = "percentage")]
        name: Option<String>,

        /// Percentage of the attempt to highlight
        #[arg(long, requires = "name")]
        percentage: Option<f64>,

        /// Write the chart to a PDF file instead of the terminal
        #[arg(long, value_name = "FILE")]
        pdf: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing PDF without asking")]
        force: bool,
    },

    /// Print the question bank of the selected edition
    Bank {
        /// Show the answers as well
        #[arg(long)]
        answers: bool,

        /// Inspect a CSV bank file instead of the built-in one
        #[arg(long, value_name = "FILE")]
        file: Option<String>,
    },

    /// Print the internal activity log
    Log {
        #[arg(long = "print", help = "Print the activity log")]
        print: bool,
    },

    /// Create a backup copy of the result store
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
