use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

use machbar_core::{MachbarError, Result};

use crate::schema::{ConfigWarning, MachbarConfig, WarningSeverity};

/// Loads the machbar configuration once at startup.
///
/// Loading happens before logging is set up, so non-fatal issues are kept
/// and handed out through [`ConfigLoader::warnings`] instead of being logged.
pub struct ConfigLoader {
    config: Arc<RwLock<MachbarConfig>>,
    config_path: PathBuf,
    env_warnings: Vec<ConfigWarning>,
}

impl ConfigLoader {
    /// Resolve the config path: explicit path > MACHBAR_CONFIG env > ~/.machbar/machbar.toml
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(p) = explicit {
            return p.to_path_buf();
        }
        if let Ok(p) = std::env::var("MACHBAR_CONFIG") {
            return PathBuf::from(p);
        }
        Self::default_path()
    }

    /// `~/.machbar/machbar.toml`, or `./.machbar/machbar.toml` without a home directory.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".machbar")
            .join("machbar.toml")
    }

    /// Load the config from disk, falling back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = Self::resolve_path(path);
        let config = if config_path.exists() {
            info!(?config_path, "loading configuration");
            let raw = std::fs::read_to_string(&config_path)?;
            Self::parse(&raw, &config_path)?
        } else {
            // An explicitly requested file must exist.
            if path.is_some() {
                return Err(MachbarError::Config(format!(
                    "config file not found: {}",
                    config_path.display()
                )));
            }
            debug!(?config_path, "config file not found, using defaults");
            MachbarConfig::default()
        };

        let (config, env_warnings) = Self::apply_env_overrides(config);
        Self::check(&config)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_path,
            env_warnings,
        })
    }

    /// Parse TOML config text; `origin` only shows up in error messages.
    pub fn parse(raw: &str, origin: &Path) -> Result<MachbarConfig> {
        toml::from_str::<MachbarConfig>(raw).map_err(|e| {
            MachbarError::Config(format!("failed to parse {}: {}", origin.display(), e))
        })
    }

    /// Fail on validation errors; warnings are reported by [`ConfigLoader::warnings`].
    fn check(config: &MachbarConfig) -> Result<Vec<ConfigWarning>> {
        config.validate().map_err(MachbarError::Config)
    }

    /// Non-fatal issues of the current config, including ignored env overrides.
    pub fn warnings(&self) -> Vec<ConfigWarning> {
        let mut warnings = self.env_warnings.clone();
        if let Ok(found) = self.config.read().validate() {
            warnings.extend(found);
        }
        warnings
    }

    /// Log [`ConfigLoader::warnings`]; call once a subscriber is installed.
    pub fn log_warnings(&self) {
        for w in self.warnings() {
            match w.severity {
                WarningSeverity::Info => info!("{}", w),
                _ => warn!("{}", w),
            }
        }
    }

    /// Get a read snapshot of the current config.
    pub fn get(&self) -> MachbarConfig {
        self.config.read().clone()
    }

    /// Get a shared reference to the live config.
    pub fn shared(&self) -> Arc<RwLock<MachbarConfig>> {
        Arc::clone(&self.config)
    }

    /// Path the config was (or would have been) read from.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Apply CLI overrides on top of file and environment, re-validating the result.
    pub fn update(&self, apply: impl FnOnce(&mut MachbarConfig)) -> Result<()> {
        let mut next = self.get();
        apply(&mut next);
        Self::check(&next)?;
        *self.config.write() = next;
        Ok(())
    }

    /// Apply env var overrides (MACHBAR_LOG_LEVEL, MACHBAR_ANALYSIS_DELAY_MS, etc.)
    pub fn apply_env_overrides(config: MachbarConfig) -> (MachbarConfig, Vec<ConfigWarning>) {
        Self::apply_overrides_from(config, |key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`, which maps a variable name to its value.
    pub fn apply_overrides_from(
        mut config: MachbarConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> (MachbarConfig, Vec<ConfigWarning>) {
        let mut warnings = Vec::new();
        if let Some(v) = lookup("MACHBAR_LOG_LEVEL") {
            config.logging.level = v;
        }
        if let Some(v) = lookup("MACHBAR_ANALYSIS_DELAY_MS") {
            match v.parse::<u64>() {
                Ok(ms) => config.ui.analysis_delay_ms = ms,
                Err(_) => warnings.push(ConfigWarning {
                    field: "MACHBAR_ANALYSIS_DELAY_MS".into(),
                    message: format!("ignoring non-numeric value '{v}'"),
                    severity: WarningSeverity::Warning,
                    hint: Some("Use a whole number of milliseconds, e.g. 0 or 700".into()),
                }),
            }
        }
        if let Some(v) = lookup("MACHBAR_CATALOG") {
            config.catalog.file = Some(PathBuf::from(v));
        }
        if let Some(v) = lookup("MACHBAR_OUTPUT_FORMAT") {
            config.ui.format = v;
        }
        (config, warnings)
    }
}
