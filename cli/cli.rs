use decomment_core::{
    CliArgs, Command as CoreCommand, DecommentArgs, ProcessSummary, find_files, process_files,
};
mod interaction;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use console::style;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn print_completions_cli(shell: clap_complete::Shell) {
    let mut cmd = CliArgs::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn completion_message(args: &DecommentArgs) -> String {
    format!("All {} comments have been removed!", args.suffix())
}

/// Strips every matching file, writing one `Processing:` line before each
/// rewrite and the completion line only once every file has been written.
fn run<W: Write>(args: &DecommentArgs, out: &mut W) -> Result<ExitCode> {
    let files = find_files(args)?;

    if args.confirm && !interaction::confirm_rewrite(&files, &args.suffix())? {
        return Ok(ExitCode::SUCCESS);
    }

    let ProcessSummary { processed, changed } = process_files(&files, args.strategy, |path| {
        if let Err(e) = writeln!(out, "Processing: {}", path.display()) {
            tracing::warn!(error = %e, "could not report progress");
        }
    })?;

    tracing::info!(processed, changed, "run finished");
    writeln!(out, "{}", style(completion_message(args)).green())?;
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli: CliArgs = CliArgs::parse();

    if let Some(command_enum_val) = cli.command {
        match command_enum_val {
            CoreCommand::Completion(args) => {
                print_completions_cli(args.shell);
                return Ok(ExitCode::SUCCESS);
            }
        }
    }

    match run(&cli.main_opts, &mut io::stdout().lock()) {
        Ok(code) => Ok(code),
        Err(e) => {
            eprintln!("{}", style(format!("Error: {:#}", e)).red());
            Ok(ExitCode::FAILURE)
        }
    }
}
