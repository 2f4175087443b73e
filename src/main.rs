use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use postview::cli::Cli;
use postview::config::Config;
use postview::headless;
use postview::logging::{init_tracing, LogTarget};
use postview::resource::HttpResource;
use postview::ui;
use postview::ui::fetch::FetchController;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config);
    config.validate()?;

    init_tracing(
        &config.logging.level,
        LogTarget::resolve(&config.logging, cli.once),
    )?;

    let resource = HttpResource::from_config(&config.resource)?;
    tracing::debug!(url = %resource.url(), mode = ?config.ui.launch_mode, "starting");
    let mut controller = FetchController::new(Arc::new(resource));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    if cli.once {
        let mut stdout = io::stdout().lock();
        let succeeded = runtime.block_on(headless::run_once(&mut controller, &mut stdout))?;
        return Ok(if succeeded {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        });
    }

    ui::run(&config, controller, runtime.handle().clone())?;
    Ok(ExitCode::SUCCESS)
}
