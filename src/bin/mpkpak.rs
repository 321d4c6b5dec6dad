use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use mpk_rs::{pack, JobSource, MpkError, PackJob};

#[derive(Parser)]
#[command(
    name = "mpkpak",
    about = "Pack files into an MPK archive",
    version,
    long_about = "Packs an ordered list of files into a single MPK container with a \
                  fixed directory table and 2048-byte-aligned payloads."
)]
struct Cli {
    /// Files to pack, in archive order
    inputs: Vec<PathBuf>,

    /// Archive file to create (".mpk" is appended when no extension is given)
    #[arg(short, long)]
    output: PathBuf,
}

/// Command-line stand-in for the host's file-selection dialogs
struct CliSelection {
    inputs: Vec<PathBuf>,
    output: PathBuf,
}

impl JobSource for CliSelection {
    fn acquire(&self) -> mpk_rs::Result<PackJob> {
        if self.output.as_os_str().is_empty() {
            return Err(MpkError::Host("no output file selected".to_string()));
        }

        let mut destination = self.output.clone();
        if destination.extension().is_none() {
            destination.set_extension("mpk");
        }

        Ok(PackJob {
            sources: self.inputs.clone(),
            destination,
        })
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let selection = CliSelection {
        inputs: cli.inputs,
        output: cli.output,
    };

    let job = selection.acquire().context("file selection failed")?;
    pack(&job.destination, &job.sources)
        .with_context(|| format!("packing {}", job.destination.display()))?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
