pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::{CodeRules, ConfigProvider};
#[cfg(feature = "cli")]
use crate::domain::model::{DEFAULT_OUTPUT_FILE, DEFAULT_PROGRESS_INTERVAL, DEFAULT_SOURCE_FILES};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, validate_run_settings, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "coupon-etl")]
#[command(about = "Keeps the coupon codes found in at least two of three gzip sources")]
pub struct CliConfig {
    #[arg(long, default_value = ".", help = "Directory holding the sources and the output")]
    pub work_dir: String,

    #[arg(long, value_delimiter = ',', default_values = DEFAULT_SOURCE_FILES)]
    pub inputs: Vec<String>,

    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: String,

    #[arg(long, default_value_t = 8)]
    pub min_length: usize,

    #[arg(long, default_value_t = 10)]
    pub max_length: usize,

    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL, help = "Log progress every N lines")]
    pub progress_interval: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage after each phase")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn source_files(&self) -> &[String] {
        &self.inputs
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn code_rules(&self) -> CodeRules {
        CodeRules::new(self.min_length, self.max_length)
    }

    fn progress_interval(&self) -> u64 {
        self.progress_interval
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("work_dir", &self.work_dir)?;
        validate_run_settings(
            &self.inputs,
            &self.output,
            &self.code_rules(),
            self.progress_interval,
        )
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_layout() {
        let config = CliConfig::parse_from(["coupon-etl"]);

        assert_eq!(config.work_dir, ".");
        assert_eq!(
            config.inputs,
            vec!["couponbase1.gz", "couponbase2.gz", "couponbase3.gz"]
        );
        assert_eq!(config.output, "valid_coupons.txt");
        assert_eq!(config.code_rules(), CodeRules::new(8, 10));
        assert_eq!(config.progress_interval, 5_000_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::parse_from([
            "coupon-etl",
            "--inputs",
            "x.gz,y.gz,z.gz",
            "--output",
            "out.txt",
            "--min-length",
            "6",
            "--verbose",
        ]);

        assert_eq!(config.inputs, vec!["x.gz", "y.gz", "z.gz"]);
        assert_eq!(config.output, "out.txt");
        assert_eq!(config.code_rules(), CodeRules::new(6, 10));
        assert!(config.verbose);
    }

    #[test]
    fn test_two_inputs_fail_validation() {
        let config = CliConfig::parse_from(["coupon-etl", "--inputs", "x.gz,y.gz"]);
        assert!(config.validate().is_err());
    }
}
