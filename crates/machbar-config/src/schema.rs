use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration — maps to `machbar.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MachbarConfig {
    pub catalog: CatalogConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

// ── Catalog ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// TOML file replacing the built-in skill catalog. None = built-in.
    pub file: Option<PathBuf>,
}

// ── UI ─────────────────────────────────────────────────────────

pub const OUTPUT_FORMATS: &[&str] = &["pretty", "json"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Pause before showing a result, in milliseconds. 0 disables it.
    pub analysis_delay_ms: u64,
    /// Default output format of `machbar analyze`: "pretty" or "json".
    pub format: String,
    /// Name used in the greeting of draft replies.
    pub reply_recipient: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            analysis_delay_ms: 700,
            format: "pretty".into(),
            reply_recipient: "[Name]".into(),
        }
    }
}

// ── Logging ────────────────────────────────────────────────────

pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
pub const LOG_FORMATS: &[&str] = &["pretty", "compact", "json"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub level: String,
    /// Output format: "pretty", "json", "compact".
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}

// ── Validation ─────────────────────────────────────────────────

/// Delays above this only slow the tool down.
const MAX_SENSIBLE_DELAY_MS: u64 = 10_000;

/// A single config validation issue.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub field: String,
    pub message: String,
    pub severity: WarningSeverity,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let icon = match self.severity {
            WarningSeverity::Error => "❌",
            WarningSeverity::Warning => "⚠️ ",
            WarningSeverity::Info => "💡",
        };
        write!(f, "{} {}: {}", icon, self.field, self.message)?;
        if let Some(ref h) = self.hint {
            write!(f, "\n   ↳ {}", h)?;
        }
        Ok(())
    }
}

impl MachbarConfig {
    /// Validate the config and return a list of warnings/errors.
    /// Returns `Err` with all error messages joined if any severity is Error.
    pub fn validate(&self) -> Result<Vec<ConfigWarning>, String> {
        let mut warnings = Vec::new();

        // ── Logging ───
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.level".into(),
                message: format!("unknown log level '{}'", self.logging.level),
                severity: WarningSeverity::Error,
                hint: Some(format!("Use one of: {}", LOG_LEVELS.join(", "))),
            });
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.format".into(),
                message: format!("unknown log format '{}'", self.logging.format),
                severity: WarningSeverity::Error,
                hint: Some(format!("Use one of: {}", LOG_FORMATS.join(", "))),
            });
        }

        // ── UI ───
        if !OUTPUT_FORMATS.contains(&self.ui.format.as_str()) {
            warnings.push(ConfigWarning {
                field: "ui.format".into(),
                message: format!("unknown output format '{}'", self.ui.format),
                severity: WarningSeverity::Error,
                hint: Some(format!("Use one of: {}", OUTPUT_FORMATS.join(", "))),
            });
        }
        if self.ui.analysis_delay_ms > MAX_SENSIBLE_DELAY_MS {
            warnings.push(ConfigWarning {
                field: "ui.analysis_delay_ms".into(),
                message: format!(
                    "delay of {}ms makes every analysis wait noticeably",
                    self.ui.analysis_delay_ms
                ),
                severity: WarningSeverity::Warning,
                hint: Some("Set to 0 to disable the delay, 700 is the default".into()),
            });
        }
        if self.ui.reply_recipient.trim().is_empty() {
            warnings.push(ConfigWarning {
                field: "ui.reply_recipient".into(),
                message: "recipient is empty, replies will start with 'Hi ,'".into(),
                severity: WarningSeverity::Info,
                hint: Some("Leave unset to keep the '[Name]' placeholder".into()),
            });
        }

        // ── Catalog ───
        if let Some(ref file) = self.catalog.file {
            if !file.exists() {
                warnings.push(ConfigWarning {
                    field: "catalog.file".into(),
                    message: format!("catalog file {} does not exist", file.display()),
                    severity: WarningSeverity::Error,
                    hint: Some(
                        "Export the built-in catalog with 'machbar catalog --export > catalog.toml'"
                            .into(),
                    ),
                });
            }
        }

        // Check for hard errors
        let errors: Vec<String> = warnings
            .iter()
            .filter(|w| w.severity == WarningSeverity::Error)
            .map(|w| format!("{}: {}", w.field, w.message))
            .collect();

        if !errors.is_empty() {
            return Err(format!("Configuration errors:\n  • {}", errors.join("\n  • ")));
        }

        Ok(warnings)
    }
}
