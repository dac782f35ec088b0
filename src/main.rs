use clap::Parser;
use buyer_aop::utils::{logger, validation::Validate};
use buyer_aop::{AopError, ApplicationContext, CliConfig, DemoDriver};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌 (stderr)
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting buyer-aop");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli) {
        tracing::error!(
            "❌ Startup failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code().max(1));
    }

    Ok(())
}

fn run(cli: &CliConfig) -> Result<(), AopError> {
    let config = cli.load_app_config()?;
    config.validate()?;
    tracing::info!("✅ Configuration loaded and validated");

    let context = ApplicationContext::from_config(&config)?;
    let driver = DemoDriver::new(context, config.demo.inputs());

    let stdout = std::io::stdout();
    driver.run_to(&mut stdout.lock())
}
