use std::io::IsTerminal;
use std::path::{Path, PathBuf};

const MINIMAL_CONFIG: &str = r#"# ✅ machbar configuration

[catalog]
# Own skill catalog; the built-in agency catalog is used when unset.
# Run 'machbar catalog --export > catalog.toml' for a starting point.
# file = "catalog.toml"

[ui]
analysis_delay_ms = 700  # spinner before the result, 0 to disable
format = "pretty"        # pretty | json
reply_recipient = "[Name]"

[logging]
level = "warn"
# format = "pretty"      # pretty | compact | json
"#;

pub(super) fn cmd_init(local: bool, force: bool) -> machbar_core::Result<()> {
    let dir = if local {
        std::env::current_dir()?
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".machbar")
    };
    write_config(&dir, force).map(|_| ())
}

/// Write the minimal config into `dir`; returns the path when a file was written.
fn write_config(dir: &Path, force: bool) -> machbar_core::Result<Option<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let config_path = dir.join("machbar.toml");

    if config_path.exists() && !force && !confirm_overwrite(&config_path) {
        println!("⚠️  {} already exists", config_path.display());
        println!("   Use --force to overwrite it.");
        return Ok(None);
    }

    std::fs::write(&config_path, MINIMAL_CONFIG)?;
    println!("✅ Created {}", config_path.display());
    println!("   Edit it, then run: machbar analyze --example 1");
    Ok(Some(config_path))
}

fn confirm_overwrite(path: &Path) -> bool {
    if !std::io::stdin().is_terminal() {
        return false;
    }
    dialoguer::Confirm::with_theme(&dialoguer::theme::ColorfulTheme::default())
        .with_prompt(format!("{} already exists. Overwrite?", path.display()))
        .default(false)
        .interact()
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use machbar_config::MachbarConfig;

    #[test]
    fn template_matches_defaults() {
        let config: MachbarConfig = toml::from_str(MINIMAL_CONFIG).unwrap();
        let defaults = MachbarConfig::default();
        assert_eq!(config.ui.analysis_delay_ms, defaults.ui.analysis_delay_ms);
        assert_eq!(config.ui.reply_recipient, defaults.ui.reply_recipient);
        assert_eq!(config.logging.level, defaults.logging.level);
        assert!(config.catalog.file.is_none());
        assert!(config.validate().unwrap().is_empty());
    }

    #[test]
    fn writes_config_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), false).unwrap().unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), MINIMAL_CONFIG);
    }

    #[test]
    fn force_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("machbar.toml");
        std::fs::write(&path, "[ui]\n").unwrap();
        assert!(write_config(dir.path(), true).unwrap().is_some());
        assert_eq!(std::fs::read_to_string(path).unwrap(), MINIMAL_CONFIG);
    }
}
