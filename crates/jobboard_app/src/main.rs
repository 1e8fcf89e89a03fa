mod platform;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = platform::config::Cli::parse();
    let config = cli.resolve()?;
    platform::logging::initialize(&platform::logging::LogPlan::from_config(&config));
    platform::run_app(config)
}
