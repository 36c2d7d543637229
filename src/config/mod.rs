mod schema;

pub use schema::{AuditConfig, DistanceLimits};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/fuel-audit/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("fuel-audit")
}

/// Get the default config file path (~/.config/fuel-audit/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file.
///
/// An explicitly given path must exist. When no path is given and the default
/// file is absent, the built-in defaults are used; the tracker has to work on
/// a machine that never created a config.
pub fn load_config(path: Option<PathBuf>) -> Result<AuditConfig> {
    let (config_path, explicit) = match path {
        Some(p) => (p, true),
        None => (get_config_path(), false),
    };

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        return Ok(AuditConfig::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: AuditConfig = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    Ok(config)
}

/// Validate the configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &AuditConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.currency.trim().is_empty() {
        errors.push("currency: must not be empty".to_string());
    }

    if config.max_drivers == 0 {
        errors.push("max_drivers: must be at least 1".to_string());
    }

    if !config.distance.min_km.is_finite() || !config.distance.max_km.is_finite() {
        errors.push("distance: bounds must be finite numbers".to_string());
    } else {
        if config.distance.min_km < 0.0 {
            errors.push(format!(
                "distance.min_km: must be non-negative, got {}",
                config.distance.min_km
            ));
        }
        if config.distance.min_km > config.distance.max_km {
            errors.push(format!(
                "distance: min_km {} exceeds max_km {}",
                config.distance.min_km, config.distance.max_km
            ));
        }
    }

    if !config.thresholds.high.is_finite() || !config.thresholds.standard.is_finite() {
        errors.push("thresholds: boundaries must be finite numbers".to_string());
    } else {
        if config.thresholds.standard < 0.0 {
            errors.push(format!(
                "thresholds.standard: must be non-negative, got {}",
                config.thresholds.standard
            ));
        }
        if config.thresholds.standard > config.thresholds.high {
            errors.push(format!(
                "thresholds: standard {} exceeds high {}",
                config.thresholds.standard, config.thresholds.high
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
