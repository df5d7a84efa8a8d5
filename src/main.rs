use clap::Parser;
use solid_demos::utils::{logger, validation::Validate};
use solid_demos::{CliConfig, DemoConfig, DemoRunner};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let mut config = match &cli.config {
        Some(path) => {
            solid_demos::utils::validation::validate_path("config", path)?;
            tracing::info!("Loading configuration from: {}", path);
            DemoConfig::from_file(path)?
        }
        None => DemoConfig::default(),
    };

    config.apply_cli(&cli);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let runner = DemoRunner::from_config(&cli.selected_demos(), &config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match runner.run(&mut out) {
        Ok(count) => {
            tracing::info!("Completed {} demo(s)", count);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Demo run failed: {}", e);
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            Err(e.into())
        }
    }
}
