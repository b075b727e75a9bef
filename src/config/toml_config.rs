use crate::core::{CodeRules, ConfigProvider};
use crate::domain::model::{DEFAULT_OUTPUT_FILE, DEFAULT_PROGRESS_INTERVAL, DEFAULT_SOURCE_FILES};
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{validate_path, validate_run_settings, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub sources: SourceConfig,
    #[serde(default)]
    pub codes: CodesConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_directory")]
    pub directory: String,
    #[serde(default = "default_source_files")]
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodesConfig {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_format: Option<String>,
    pub progress_interval: Option<u64>,
}

fn default_directory() -> String {
    ".".to_string()
}

fn default_source_files() -> Vec<String> {
    DEFAULT_SOURCE_FILES.iter().map(|f| f.to_string()).collect()
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            files: default_source_files(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

impl TomlConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses the configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Expands `${VAR}` from the environment; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("sources.directory", &self.sources.directory)?;
        validate_run_settings(
            &self.sources.files,
            &self.output.path,
            &self.code_rules(),
            self.progress_interval(),
        )?;

        if let Some(format) = self.log_format() {
            let valid_formats = ["compact", "json"];
            if !valid_formats.contains(&format) {
                return Err(EtlError::InvalidConfigValueError {
                    field: "monitoring.log_format".to_string(),
                    value: format.to_string(),
                    reason: format!(
                        "Unsupported format. Valid formats: {}",
                        valid_formats.join(", ")
                    ),
                });
            }
        }

        Ok(())
    }

    pub fn work_dir(&self) -> &str {
        &self.sources.directory
    }

    pub fn code_rules(&self) -> CodeRules {
        let defaults = CodeRules::default();
        CodeRules::new(
            self.codes.min_length.unwrap_or(defaults.min_length),
            self.codes.max_length.unwrap_or(defaults.max_length),
        )
    }

    pub fn progress_interval(&self) -> u64 {
        self.monitoring
            .as_ref()
            .and_then(|m| m.progress_interval)
            .unwrap_or(DEFAULT_PROGRESS_INTERVAL)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn log_format(&self) -> Option<&str> {
        self.monitoring.as_ref().and_then(|m| m.log_format.as_deref())
    }
}

impl ConfigProvider for TomlConfig {
    fn source_files(&self) -> &[String] {
        &self.sources.files
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn code_rules(&self) -> CodeRules {
        TomlConfig::code_rules(self)
    }

    fn progress_interval(&self) -> u64 {
        TomlConfig::progress_interval(self)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
