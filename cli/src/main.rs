//! CLI entrypoint for ragask
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use ragask_application::{AnswerService, QueryController, QueryParams};
use ragask_infrastructure::{ConfigLoader, FileConfig, HttpAnswerService};
use ragask_presentation::{
    AskRepl, Cli, ConsoleView, ThinkingIndicator, health_interruptible, submit_interruptible,
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; stdout is reserved for answers
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting ragask");

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        if let Some(path) = &cli.config
            && !path.exists()
        {
            bail!("Config file not found: {}", path.display());
        }
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_overrides(&mut config, &cli);
    config.validate().context("Invalid configuration")?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        println!();
        println!("Effective configuration:");
        println!("{}", config.to_toml_string()?);
        return Ok(ExitCode::SUCCESS);
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let service = Arc::new(HttpAnswerService::from_config(&config.service)?);
    info!("Answer service: {}", service.base_url());

    if cli.health {
        return check_health(service.as_ref()).await;
    }

    let indicator = if cli.quiet {
        ThinkingIndicator::disabled()
    } else {
        ThinkingIndicator::new()
    };
    let view = Arc::new(
        ConsoleView::new(config.output.format.unwrap_or_default()).with_indicator(indicator),
    );
    let params = QueryParams::default().with_timeout(config.service.timeout());
    let controller =
        Arc::new(QueryController::new(service.clone(), view.clone()).with_params(params));

    // Interactive mode
    if cli.interactive {
        let base_url = service.base_url().to_string();
        let repl = AskRepl::new(controller, view, service, base_url);
        repl.run().await?;
        return Ok(ExitCode::SUCCESS);
    }

    // Single question mode - question is required
    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. Use --interactive for interactive mode."),
    };

    view.set_question(&question);
    let outcome = submit_interruptible(&controller).await;

    Ok(if outcome.is_answered() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Command-line flags take precedence over every config source.
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(url) = &cli.url {
        config.service.base_url = url.clone();
    }
    if let Some(secs) = cli.timeout {
        config.service.timeout_seconds = secs;
    }
    if let Some(format) = cli.output {
        config.output.format = Some(format.into());
    }
}

async fn check_health(service: &dyn AnswerService) -> Result<ExitCode> {
    match health_interruptible(service).await {
        Ok(health) if health.is_ok() => {
            println!("ok");
            Ok(ExitCode::SUCCESS)
        }
        Ok(health) => {
            println!("unhealthy: {}", health.status);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            println!("unreachable: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ragask_domain::OutputFormat;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "ragask",
            "--url",
            "http://answers:9000",
            "--timeout",
            "0",
            "-o",
            "json",
            "q",
        ]);
        let mut config = FileConfig::default();

        apply_overrides(&mut config, &cli);

        assert_eq!(config.service.base_url, "http://answers:9000");
        assert_eq!(config.service.timeout(), None);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_no_flags_keeps_config() {
        let cli = Cli::parse_from(["ragask", "q"]);
        let mut config = FileConfig::default();

        apply_overrides(&mut config, &cli);

        assert_eq!(config, FileConfig::default());
    }
}
