use anyhow::Context;
use clap::Parser;
use powerball_pool::utils::{logger, validation::Validate};
use powerball_pool::{CliConfig, OutputFormat, PoolSession, RngSource};
use std::io;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting powerball-pool");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let rules = config
        .load_rules()
        .with_context(|| format!("failed to load rules from {:?}", config.rules))?;

    let format = if config.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    if config.is_demo() && config.rules.is_some() {
        tracing::warn!("--rules is ignored in demo mode; the fixture uses the standard ranges");
    }
    let mut session = PoolSession::new(rules, RngSource::from_seed(config.seed))?.with_format(format);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = if config.is_demo() {
        session.run_demo(&mut out)
    } else {
        session.run_interactive(io::stdin().lock(), &mut out)
    };

    match result {
        Ok(draw) => {
            tracing::info!(
                "✅ Draw complete: {} participants, Powerball {}",
                draw.participants.len(),
                draw.powerball
            );
        }
        Err(e) => {
            tracing::error!("❌ Session failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }

    Ok(())
}
