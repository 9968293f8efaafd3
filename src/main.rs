use anyhow::Context;
use clap::CommandFactory;
use rodeps::adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
use rodeps::adapters::outbound::filesystem::FileSystemManifestReader;
use rodeps::adapters::outbound::process::ProcessCommandRunner;
use rodeps::application::dto::{AnalysisRequest, OutputFormat};
use rodeps::application::factories::FormatterFactory;
use rodeps::application::read_models::RotReadModelBuilder;
use rodeps::application::use_cases::AnalyzeRotUseCase;
use rodeps::cli::Args;
use rodeps::config::{discover_config, CONFIG_FILENAME};
use rodeps::ports::outbound::{OutputPresenter, ProgressReporter};
use rodeps::rot_analysis::domain::default_npm_command;
use rodeps::shared::error::ExitCode;
use rodeps::shared::Result;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => exit_on_usage_error(e),
    };

    if let Err(e) = run(args).await {
        let mut message = format!("\n❌ An error occurred:\n\n{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            message.push_str(&format!("\n\nCaused by: {}", err));
            source = err.source();
        }

        StderrProgressReporter::default().report_error(&message);
        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Only `--long`, `--verbose` and `--json` are recognized. Any parse failure,
/// `--help` included, prints the error followed by the full help text.
fn exit_on_usage_error(err: clap::Error) -> ! {
    let _ = err.print();
    eprintln!();
    eprintln!("{}", Args::command().render_help());
    process::exit(ExitCode::InvalidArguments.as_i32());
}

async fn run(args: Args) -> Result<()> {
    let project_path =
        std::env::current_dir().context("Failed to determine the current directory")?;

    // Config flags can only switch behaviors on
    let discovered = discover_config(&project_path)?;
    let config_found = discovered.is_some();
    let config = discovered.unwrap_or_default();
    let flags = args.flag_set().union(config.flags());

    init_tracing(flags.verbose);
    if config_found && flags.verbose {
        eprintln!("📄 Auto-discovered config file: {}", CONFIG_FILENAME);
    }
    tracing::debug!(?flags, project = %project_path.display(), "starting analysis");

    let npm_command = config
        .npm_command()
        .unwrap_or(default_npm_command())
        .to_string();
    let request = AnalysisRequest::new(project_path, npm_command, config.query_timeout());

    // Create adapters (Dependency Injection)
    let manifest_reader = FileSystemManifestReader::new();
    let command_runner = ProcessCommandRunner::new();
    let progress_reporter = StderrProgressReporter::new(flags.verbose);

    let use_case = AnalyzeRotUseCase::new(manifest_reader, command_runner, progress_reporter);
    let response = use_case.execute(request).await?;

    let format = OutputFormat::from_flags(&flags);
    if flags.verbose {
        eprintln!("{}", FormatterFactory::progress_message(format));
    }

    let model = RotReadModelBuilder::build(&response, flags.long);
    let formatter = FormatterFactory::create(format);
    let formatted_output = formatter.format(&model)?;

    let presenter = StdoutPresenter::new();
    presenter.present(&formatted_output)?;

    Ok(())
}

/// `RUST_LOG` wins; otherwise debug output follows `--verbose`.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "rodeps=debug" } else { "rodeps=warn" };

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
