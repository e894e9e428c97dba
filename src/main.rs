use anyhow::Context;
use clap::Parser;
use notion_utils::app::execute;
use notion_utils::domain::ports::ProcessEnv;
use notion_utils::utils::{logger, validation::Validate};
use notion_utils::{CliConfig, NotionError, TomlConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let config = match TomlConfig::load(cli.config.as_deref()).and_then(|c| {
        c.validate()?;
        Ok(c)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            if let Some(notion_err) = e.downcast_ref::<NotionError>() {
                eprintln!("💡 {}", notion_err.recovery_suggestion());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &CliConfig, config: &TomlConfig) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir().context("Cannot determine working directory")?;
    let output = execute(&cli.command, config, cli.json, &ProcessEnv, &cwd)?;

    for line in &output.stdout {
        println!("{}", line);
    }
    for line in &output.stderr {
        eprintln!("{}", line);
    }

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
