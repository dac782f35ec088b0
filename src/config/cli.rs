use crate::config::AppConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "buyer-aop")]
#[command(about = "Wire the buyer beans behind logging proxies and print what they bought")]
pub struct CliConfig {
    /// Path to a TOML configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override [demo].boy_price
    #[arg(long, allow_negative_numbers = true)]
    pub boy_price: Option<f64>,

    /// Override [demo].girl_price
    #[arg(long, allow_negative_numbers = true)]
    pub girl_price: Option<f64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    pub json_logs: bool,
}

impl CliConfig {
    /// Load the file (or defaults) and apply command-line overrides.
    pub fn load_app_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(price) = self.boy_price {
            config.demo.boy_price = price;
        }
        if let Some(price) = self.girl_price {
            config.demo.girl_price = price;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_means_defaults() {
        let cli = CliConfig::parse_from(["buyer-aop"]);
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
        assert_eq!(cli.load_app_config().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_price_overrides() {
        let cli = CliConfig::parse_from(["buyer-aop", "--boy-price", "-3", "--girl-price", "0.5"]);
        let config = cli.load_app_config().unwrap();
        assert_eq!(config.demo.boy_price, -3.0);
        assert_eq!(config.demo.girl_price, 0.5);
    }
}
