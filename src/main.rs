use anyhow::Context;
use volo_advisor::{
    arguments::{get_enabled_debug_modes, is_help_requested, print_help},
    config::AdvisorConfig,
    logger::{self, LogTag},
    webserver,
};

/// Entry point: resolve configuration, then serve until Ctrl-C
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init();

    if is_help_requested() {
        print_help();
        return Ok(());
    }

    logger::info(LogTag::System, "Volo advisor starting up...");

    let debug_modes = get_enabled_debug_modes();
    if !debug_modes.is_empty() {
        logger::info(
            LogTag::System,
            &format!("Debug modes enabled: {}", debug_modes.join(", ")),
        );
    }

    let config = AdvisorConfig::load()
        .map_err(|e| {
            logger::error(LogTag::Config, &e.to_string());
            e
        })
        .context("failed to load configuration")?;

    logger::info(
        LogTag::Config,
        &format!(
            "Pools API: {} | Rewards API: {} | timeout {}s",
            config.pools_api_url, config.rewards_api_url, config.request_timeout_secs
        ),
    );

    let result = webserver::start_server(config).await;
    if let Err(e) = &result {
        logger::error(LogTag::System, &format!("Server startup failed: {}", e));
    }
    logger::flush();

    result.context("webserver terminated with an error")
}
