use crate::app::driver::DemoInputs;
use crate::core::advice::{Advisor, LogLevel, LoggingAdvice, Pointcut};
use crate::utils::error::{AopError, Result};
use crate::utils::validation::{
    validate_bean_name, validate_one_of, validate_unique, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Advice kinds that can be named in `[[aspect.advisors]]`.
pub const ADVICE_KINDS: [&str; 1] = ["logging"];

/// The application configuration object.
///
/// Every section is optional; the defaults wire the two buyers behind a
/// logging proxy and feed them the sample amounts 35 and 99.8.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub context: ContextConfig,
    pub aspect: AspectConfig,
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Components to register, by catalog name.
    pub scan: Vec<String>,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            scan: vec!["boy".to_string(), "girl".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AspectConfig {
    pub enabled: bool,
    /// Proxies expose the concrete bean type to typed lookups.
    pub proxy_target_class: bool,
    pub log_level: String,
    pub advisors: Vec<AdvisorConfig>,
}

impl Default for AspectConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            proxy_target_class: true,
            log_level: "info".to_string(),
            advisors: vec![AdvisorConfig::default()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    pub advice: String,
    pub bean: String,
    pub method: String,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            advice: "logging".to_string(),
            bean: "*".to_string(),
            method: "*".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub boy_price: f64,
    pub girl_price: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        let inputs = DemoInputs::default();
        Self {
            boy_price: inputs.boy_price,
            girl_price: inputs.girl_price,
        }
    }
}

impl DemoConfig {
    pub fn inputs(&self) -> DemoInputs {
        DemoInputs {
            boy_price: self.boy_price,
            girl_price: self.girl_price,
        }
    }
}

impl AspectConfig {
    pub fn level(&self) -> Result<LogLevel> {
        LogLevel::parse(&self.log_level).ok_or_else(|| AopError::InvalidConfigValueError {
            field: "aspect.log_level".to_string(),
            value: self.log_level.clone(),
            reason: format!("Expected one of: {}", LogLevel::NAMES.join(", ")),
        })
    }

    pub fn build_advisors(&self) -> Result<Vec<Advisor>> {
        let level = self.level()?;
        self.advisors
            .iter()
            .map(|a| {
                let pointcut = Pointcut::parse(&a.bean, &a.method)?;
                match a.advice.as_str() {
                    "logging" => Ok(Advisor::new(pointcut, LoggingAdvice::new(level))),
                    other => Err(AopError::InvalidConfigValueError {
                        field: "aspect.advisors.advice".to_string(),
                        value: other.to_string(),
                        reason: format!("Expected one of: {}", ADVICE_KINDS.join(", ")),
                    }),
                }
            })
            .collect()
    }
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AopError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AopError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BOY_PRICE})；未定義的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AopError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if self.context.scan.is_empty() {
            return Err(AopError::ConfigValidationError {
                field: "context.scan".to_string(),
                message: "At least one component must be scanned".to_string(),
            });
        }
        for name in &self.context.scan {
            validate_bean_name("context.scan", name)?;
        }
        validate_unique("context.scan", &self.context.scan)?;

        if !self.aspect.enabled {
            return Ok(());
        }

        self.aspect.level()?;
        for advisor in &self.aspect.advisors {
            validate_one_of("aspect.advisors.advice", &advisor.advice, &ADVICE_KINDS)?;
            if advisor.bean != "*" {
                validate_bean_name("aspect.advisors.bean", &advisor.bean)?;
            }
            validate_one_of(
                "aspect.advisors.method",
                &advisor.method,
                &["*", "buy", "buy_price"],
            )?;
        }

        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
