use crate::domain::model::{CodeRules, SOURCE_COUNT};
use crate::utils::error::{EtlError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_file_extensions(
    field_name: &str,
    files: &[String],
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    for file in files {
        if let Some(extension) = std::path::Path::new(file)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            if !allowed_set.contains(extension) {
                return Err(EtlError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.clone(),
                    reason: format!(
                        "Unsupported file extension: {}. Allowed extensions: {}",
                        extension,
                        allowed_extensions.join(", ")
                    ),
                });
            }
        } else {
            return Err(EtlError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: file.clone(),
                reason: "File has no extension or invalid filename".to_string(),
            });
        }
    }

    Ok(())
}

pub fn validate_source_count(field_name: &str, files: &[String]) -> Result<()> {
    if files.len() != SOURCE_COUNT {
        return Err(EtlError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!(
                "Expected exactly {} coupon sources, got {}",
                SOURCE_COUNT,
                files.len()
            ),
        });
    }
    Ok(())
}

pub fn validate_code_rules(field_prefix: &str, rules: &CodeRules) -> Result<()> {
    validate_positive_number(&format!("{}.min_length", field_prefix), rules.min_length, 1)?;
    if rules.max_length < rules.min_length {
        return Err(EtlError::InvalidConfigValueError {
            field: format!("{}.max_length", field_prefix),
            value: rules.max_length.to_string(),
            reason: format!("Value must be at least min_length ({})", rules.min_length),
        });
    }
    Ok(())
}

/// Checks shared by every configuration source.
pub fn validate_run_settings(
    files: &[String],
    output_path: &str,
    rules: &CodeRules,
    progress_interval: u64,
) -> Result<()> {
    validate_source_count("sources.files", files)?;
    for file in files {
        validate_path("sources.files", file)?;
    }
    validate_file_extensions("sources.files", files, &["gz"])?;
    validate_path("output.path", output_path)?;
    validate_code_rules("codes", rules)?;
    if progress_interval == 0 {
        return Err(EtlError::InvalidConfigValueError {
            field: "monitoring.progress_interval".to_string(),
            value: progress_interval.to_string(),
            reason: "Value must be at least 1".to_string(),
        });
    }
    Ok(())
}
