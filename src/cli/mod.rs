// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, parsed with clap.
// All business logic is delegated to Layer 2 (application);
// this layer only routes and renders.
//
// Two commands are supported:
//   1. `diagnose` — train at startup, answer one query
//   2. `shell`    — train at startup, answer stdin queries
//
// There is no trained-model cache: training runs on every
// startup, matching the upstream design.

pub mod commands;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use commands::{Commands, DiagnoseArgs, ShellArgs};

use crate::application::context::AppContext;
use crate::application::diagnose_use_case::DiagnoseUseCase;
use crate::application::init_use_case::{InitUseCase, TrainConfig};
use crate::domain::errors::DiagnosisError;
use crate::infra::presenter::ConsolePresenter;

#[derive(Parser, Debug)]
#[command(
    name = "symptom-diagnosis",
    version = "0.1.0",
    about = "Train a symptom classifier on a small labelled dataset, then diagnose complaints."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Diagnose(args) => run_diagnose(args),
            Commands::Shell(args) => run_shell(args),
        }
    }
}

/// Startup pipeline shared by both commands: load, train,
/// return a ready context. Fatal pipeline errors bubble up.
fn init_context(cfg: TrainConfig, presenter: &ConsolePresenter) -> Result<AppContext> {
    tracing::info!("Starting training on dataset: {}", cfg.dataset_path);
    let context = InitUseCase::new(cfg).execute(presenter)?;
    Ok(context)
}

fn run_diagnose(args: DiagnoseArgs) -> Result<()> {
    let presenter = ConsolePresenter::new();
    let context = init_context(args.pipeline.into(), &presenter)?;

    // User-level errors are already rendered by the presenter;
    // only the exit code distinguishes them here.
    match DiagnoseUseCase::new(&context).diagnose(&args.query, &presenter) {
        Ok(_) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

fn run_shell(args: ShellArgs) -> Result<()> {
    let presenter = ConsolePresenter::new();
    let context = init_context(args.pipeline.into(), &presenter)?;
    let use_case = DiagnoseUseCase::new(&context);

    let stdin = io::stdin();
    loop {
        print!("\nsymptom> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let query = line.trim();
        if query.eq_ignore_ascii_case("exit") || query.eq_ignore_ascii_case("quit") {
            break;
        }

        // Per-query errors (empty query, prediction failure) are
        // recovered: report and keep the shell running.
        if let Err(e) = use_case.diagnose(query, &presenter) {
            match e {
                DiagnosisError::EmptyQuery | DiagnosisError::Prediction(_) => continue,
                fatal => return Err(fatal.into()),
            }
        }
    }

    Ok(())
}
