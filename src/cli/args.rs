//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Train a Gini decision tree on labeled 28x28 images and count correct test predictions
#[derive(Parser, Debug)]
#[command(name = "dectree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Training data file
    #[arg(value_hint = ValueHint::FilePath)]
    pub training_data: PathBuf,

    /// Testing data file
    #[arg(value_hint = ValueHint::FilePath)]
    pub testing_data: PathBuf,

    /// Increase log verbosity on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(long, env = "DECTREE_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Majority purity at which tree growth stops, in (0, 1]
    #[arg(long)]
    pub termination_ratio: Option<f64>,

    /// Render the trained tree to stderr
    #[arg(long)]
    pub print_tree: bool,

    /// Print the effective configuration to stderr
    #[arg(long)]
    pub show_config: bool,
}
