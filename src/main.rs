//! gomod-bump - Go dependency bumper CLI tool
//!
//! Bumps one Go module dependency across every project under a directory,
//! verifying each project before committing and pushing.

use clap::Parser;
use colored::Colorize;
use env_logger::Env;
use gomod_bump::cli::CliArgs;
use gomod_bump::config::UpdaterConfig;
use gomod_bump::interaction::{AutoApprove, DecisionSource, InteractivePrompt};
use gomod_bump::orchestrator::Orchestrator;
use gomod_bump::output::{create_formatter, OutputConfig};
use gomod_bump::reporter::LogReporter;
use gomod_bump::runner::SystemCommandRunner;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    env_logger::Builder::new()
        .parse_env(Env::default().default_filter_or(args.log_filter()))
        .format_target(false)
        .format_timestamp(None)
        .init();

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let config = UpdaterConfig::from_cli(&args);

    log::debug!("gomod-bump v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Root: {}", config.root.display());
    if config.dry_run {
        log::debug!("Mode: dry-run");
    }

    // stdout carries only the JSON document in --json mode
    let mut decisions: Box<dyn DecisionSource> = match (config.confirm_each, args.json) {
        (true, true) => Box::new(InteractivePrompt::new(io::stdin().lock(), io::stderr())),
        (true, false) => Box::new(InteractivePrompt::stdio()),
        (false, _) => Box::new(AutoApprove),
    };

    let runner = SystemCommandRunner::new();
    let reporter = LogReporter::new();
    let orchestrator = Orchestrator::new(config, &runner, &reporter);
    let result = orchestrator.run(decisions.as_mut());

    let mut output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet);
    output_config.color = io::stdout().is_terminal();
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&result.summary, &mut stdout)?;
    stdout.flush()?;

    match result.fatal {
        Some(err) => Err(err.into()),
        None => Ok(ExitCode::SUCCESS),
    }
}
