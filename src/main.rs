use anyhow::Context;
use clap::Parser;
use greeter::utils::{logger, validation::Validate};
use greeter::{sample_request, CliConfig, Greeter, GreetingRequest, SystemClock, TomlConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting greeter");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let clock = SystemClock;

    let request = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading greeting from: {}", path.display());
            match load_request(path, &clock) {
                Ok(request) => request,
                Err(e) => {
                    tracing::error!("❌ Configuration failed: {}", e);
                    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                    eprintln!("❌ {}", e.user_friendly_message());
                    std::process::exit(1);
                }
            }
        }
        None => sample_request(&clock).context("building the sample greeting")?,
    };

    Greeter::stdout()
        .greet(&request)
        .context("writing the greeting to stdout")?;

    tracing::info!("✅ Greeting written");
    Ok(())
}

fn load_request(path: &std::path::Path, clock: &SystemClock) -> greeter::Result<GreetingRequest> {
    let toml_config = TomlConfig::from_file(path)?;
    toml_config.validate()?;
    toml_config.to_request(clock)
}
