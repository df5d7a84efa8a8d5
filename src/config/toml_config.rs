use crate::config::cli::CliConfig;
use crate::config::sample::{
    sample_deposit, sample_discount_rate, sample_orders, sample_withdrawal, SAMPLE_ACCOUNT_NUMBER,
};
use crate::domain::model::{Order, ReportFormat};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{validate_distinct_non_empty, validate_range, Validate};
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for the demos. Every section is optional; anything left out
/// falls back to the built-in sample data, so `DemoConfig::default()` is
/// exactly what the standalone binaries run with.
///
/// Decimal values are best written as strings (`amount = "480.50"`) so the
/// scale survives parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub report: ReportConfig,
    pub account: AccountConfig,
    pub orders: Vec<Order>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub formats: Vec<ReportFormat>,
    pub discount_rate: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    pub number: u64,
    pub deposit: Decimal,
    pub withdraw: Decimal,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            report: ReportConfig::default(),
            account: AccountConfig::default(),
            orders: sample_orders(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            formats: ReportFormat::ALL.to_vec(),
            discount_rate: sample_discount_rate(),
        }
    }
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            number: SAMPLE_ACCOUNT_NUMBER,
            deposit: sample_deposit(),
            withdraw: sample_withdrawal(),
        }
    }
}

impl DemoConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Loaded config from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Command-line flags win over the file. Flags left unset keep the
    /// file's value.
    pub fn apply_cli(&mut self, cli: &CliConfig) {
        if !cli.format.is_empty() {
            self.report.formats = cli.format.clone();
            tracing::info!("Report formats overridden to: {:?}", self.report.formats);
        }
        if let Some(rate) = cli.discount_rate {
            self.report.discount_rate = rate;
            tracing::info!("Discount rate overridden to: {}", rate);
        }
    }

    /// Replaces `${VAR}` with the value of the environment variable. Unset
    /// variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DemoError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

impl ConfigProvider for DemoConfig {
    fn orders(&self) -> &[Order] {
        &self.orders
    }

    fn report_formats(&self) -> &[ReportFormat] {
        &self.report.formats
    }

    fn discount_rate(&self) -> Decimal {
        self.report.discount_rate
    }

    fn account_number(&self) -> u64 {
        self.account.number
    }

    fn deposit_amount(&self) -> Decimal {
        self.account.deposit
    }

    fn withdraw_amount(&self) -> Decimal {
        self.account.withdraw
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        validate_distinct_non_empty("report.formats", &self.report.formats)?;
        validate_range(
            "report.discount_rate",
            self.report.discount_rate,
            Decimal::ZERO,
            Decimal::ONE,
        )?;
        Ok(())
    }
}
