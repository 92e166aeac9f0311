use std::io::IsTerminal;

use clap::Parser;
use prettyps::ui::{resolve_color_enabled, MessageBlock, PlainRenderer, Renderer};
use prettyps::{
    run_report, Cli, EngineSource, ListingSource, PrettyPsError, ReportConfig, TextSource,
};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "PRETTYPS_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let output_mode = cli.output_mode();
    let options = cli.report_options();
    let config = match ReportConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            let mut renderer = PlainRenderer::stderr(output_mode);
            let _ = renderer.error_block(
                &MessageBlock::new("Invalid configuration", err.to_string())
                    .with_hint("Fix the file or unset PRETTYPS_CONFIG to use the defaults"),
            );
            std::process::exit(1);
        }
    };

    let source: Box<dyn ListingSource> = match cli.input.as_deref() {
        Some(raw) => Box::new(TextSource::from_arg(raw)),
        None => Box::new(EngineSource::new(&config.engine)),
    };
    let color_enabled = resolve_color_enabled(output_mode, std::io::stdout().is_terminal());

    match run_report(&options, &config, source.as_ref(), color_enabled) {
        Ok(output) => {
            println!("{}", output.trim_end());
        }
        Err(PrettyPsError::SourceUnavailable { message }) => {
            let mut renderer = PlainRenderer::stderr(output_mode);
            let line = format!("Docker does not appear to be running. {message}");
            let _ = renderer.error_line(&line);
            std::process::exit(1);
        }
        Err(err) => {
            let mut renderer = PlainRenderer::stderr(output_mode);
            let _ = renderer.error_block(&MessageBlock::new("Report failed", err.to_string()));
            std::process::exit(1);
        }
    }
}
