// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Two subcommands: `diagnose` (train, answer one query, exit)
// and `shell` (train once, then answer queries from stdin).
//
// clap's derive macros generate help text, error messages for
// missing args, and type conversion automatically.

use clap::{Args, Subcommand};

use crate::application::init_use_case::TrainConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train the classifier and diagnose a single complaint
    Diagnose(DiagnoseArgs),

    /// Train the classifier once, then answer queries interactively
    Shell(ShellArgs),
}

/// Hyperparameters shared by both subcommands. The defaults
/// match the upstream pipeline: 200 epochs, batches of 8,
/// Adam's standard learning rate.
#[derive(Args, Debug, Clone)]
pub struct PipelineArgs {
    /// Path to the dataset JSON (array of complaint/diagnosis/treatment objects)
    #[arg(long, default_value = "data/dataset.json")]
    pub dataset: String,

    /// Number of full passes through the training data
    #[arg(long, default_value_t = 200)]
    pub epochs: usize,

    /// Number of samples per mini-batch
    #[arg(long, default_value_t = 8)]
    pub batch_size: usize,

    /// Adam learning rate
    #[arg(long, default_value_t = 1e-3)]
    pub lr: f64,
}

/// Convert CLI args into the application-layer TrainConfig.
/// This is the boundary between Layer 1 and Layer 2 — the
/// application layer never sees clap types.
impl From<PipelineArgs> for TrainConfig {
    fn from(a: PipelineArgs) -> Self {
        TrainConfig {
            dataset_path: a.dataset,
            epochs: a.epochs,
            batch_size: a.batch_size,
            lr: a.lr,
        }
    }
}

#[derive(Args, Debug)]
pub struct DiagnoseArgs {
    /// The symptom description to classify
    #[arg(long)]
    pub query: String,

    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

#[derive(Args, Debug)]
pub struct ShellArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,
}
