use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Message used by `run` when none is given.
pub const DEFAULT_MESSAGE: &str = "It's such a beautiful day today!";

/// `toneflow` - classify a message's tone, then answer in kind.
#[derive(Parser, Debug)]
#[command(name = "toneflow")]
#[command(version)]
#[command(about = "Tone-routed prompt workflow on AWS Bedrock.", long_about = None)]
pub struct Cli {
    /// Path to config.toml (default: ~/.toneflow/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the tone workflow for one message
    Run {
        /// User message to classify and answer
        #[arg(short, long, default_value = DEFAULT_MESSAGE)]
        message: String,

        /// Print the whole run (classification, branch, response) as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the request body a prompt would send, without sending it
    Request {
        /// Prompt to compile
        #[arg(short, long, value_enum, default_value_t = PromptName::DetectTone)]
        prompt: PromptName,

        /// Value for the `message` input
        #[arg(short, long, default_value = DEFAULT_MESSAGE)]
        message: String,
    },

    /// Show which branch the router selects for a classifier answer
    Route {
        /// Classifier output, matched exactly
        text: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PromptName {
    DetectTone,
    BeHappy,
    CheerUp,
    SettleDown,
}

impl PromptName {
    /// Name of the workflow node built from this prompt.
    pub fn node_name(self) -> &'static str {
        match self {
            Self::DetectTone => "detect_tone",
            Self::BeHappy => "be_happy",
            Self::CheerUp => "cheer_up",
            Self::SettleDown => "settle_down",
        }
    }
}
