use crate::domain::model::{DemoKind, ReportFormat};
use clap::Parser;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Parser)]
#[command(name = "solid-demos")]
#[command(about = "Console walkthroughs of the five SOLID design principles")]
pub struct CliConfig {
    /// Demos to run, in order. Runs all of them when omitted.
    #[arg(value_enum)]
    pub demos: Vec<DemoKind>,

    /// TOML file overriding the built-in sample data
    #[arg(short, long)]
    pub config: Option<String>,

    /// Report formats for the open-closed demo
    #[arg(long, value_enum, value_delimiter = ',')]
    pub format: Vec<ReportFormat>,

    /// Discount rate for the open-closed demo, e.g. 0.10
    #[arg(long)]
    pub discount_rate: Option<Decimal>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn selected_demos(&self) -> Vec<DemoKind> {
        if self.demos.is_empty() {
            DemoKind::ALL.to_vec()
        } else {
            self.demos.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DemoConfig;
    use crate::domain::ports::ConfigProvider;
    use crate::utils::validation::Validate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_to_every_demo() {
        let cli = CliConfig::try_parse_from(["solid-demos"]).unwrap();
        assert_eq!(cli.selected_demos(), DemoKind::ALL);
        assert!(cli.format.is_empty());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_demo_selection_and_overrides() {
        let cli = CliConfig::try_parse_from([
            "solid-demos",
            "ocp",
            "lsp",
            "--format",
            "json,xml",
            "--discount-rate",
            "0.2",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.selected_demos(), [DemoKind::Ocp, DemoKind::Lsp]);
        assert_eq!(cli.format, [ReportFormat::Json, ReportFormat::Xml]);
        assert_eq!(cli.discount_rate, Some(dec!(0.2)));
        assert!(cli.verbose);
    }

    #[test]
    fn test_rejects_unknown_demo() {
        assert!(CliConfig::try_parse_from(["solid-demos", "kiss"]).is_err());
    }

    #[test]
    fn test_apply_cli_overrides_report_settings() {
        let cli = CliConfig::try_parse_from([
            "solid-demos",
            "--format",
            "xml",
            "--discount-rate",
            "0.5",
        ])
        .unwrap();

        let mut config = DemoConfig::from_toml_str("[report]\nformats = [\"csv\", \"json\"]\ndiscount_rate = \"0.2\"\n").unwrap();
        config.apply_cli(&cli);

        assert_eq!(config.report_formats(), [ReportFormat::Xml]);
        assert_eq!(config.discount_rate(), dec!(0.5));
        assert_eq!(config.orders().len(), 4);
    }

    #[test]
    fn test_apply_cli_without_flags_keeps_file_values() {
        let cli = CliConfig::try_parse_from(["solid-demos", "srp"]).unwrap();

        let mut config = DemoConfig::from_toml_str("[report]\nformats = [\"json\"]\ndiscount_rate = \"0.3\"\n").unwrap();
        let before = config.clone();
        config.apply_cli(&cli);

        assert_eq!(config, before);
    }

    #[test]
    fn test_out_of_range_discount_override_fails_validation() {
        let cli = CliConfig::try_parse_from(["solid-demos", "--discount-rate", "2"]).unwrap();

        let mut config = DemoConfig::default();
        config.apply_cli(&cli);

        assert!(config.validate().is_err());
    }
}
