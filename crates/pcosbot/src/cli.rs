use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pcosbot")]
#[command(author, version, about = "Telegram bot for a short PCOS risk assessment", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot
    Run {
        /// Use webhook mode instead of long polling
        #[arg(long)]
        webhook: bool,
    },

    /// Score a set of answers without starting the bot
    Score {
        /// Cycle regularity: Regular, Irregular or None
        #[arg(short, long)]
        cycle: String,

        /// Cycle length in days
        #[arg(short, long, default_value = "28")]
        length: String,

        /// Comma-separated symptoms
        #[arg(short, long, default_value = "")]
        symptoms: String,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
