use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::path::PathBuf;

use machbar_catalog::Catalog;
use machbar_classifier::Classifier;
use machbar_config::schema::LOG_LEVELS;
use machbar_config::{ConfigLoader, MachbarConfig};

mod analyze;
mod catalog;
mod render;
mod setup;

/// ✅ machbar — feasibility check for creative-production requests
#[derive(Parser)]
#[command(name = "machbar", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to machbar.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Skill catalog TOML file (overrides catalog.file)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Log level override (e.g. debug, info, warn, error)
    #[arg(
        short,
        long,
        global = true,
        value_parser = clap::builder::PossibleValuesParser::new(LOG_LEVELS.iter().copied())
    )]
    log_level: Option<String>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess a client request and draft a reply
    Analyze {
        /// Request text; read from stdin when omitted or "-"
        #[arg(conflicts_with = "example")]
        text: Vec<String>,
        /// Use canned example N instead (see `machbar examples`)
        #[arg(short, long)]
        example: Option<usize>,
        /// Output the assessment as JSON
        #[arg(long)]
        json: bool,
        /// Print only the draft reply
        #[arg(long, conflicts_with = "json")]
        reply_only: bool,
        /// Skip the analysis delay
        #[arg(long)]
        no_delay: bool,
    },
    /// List the canned example requests
    Examples {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the skill catalog
    Catalog {
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Print the catalog as TOML, ready to be edited and loaded via catalog.file
        #[arg(long, conflicts_with = "json")]
        export: bool,
    },
    /// Show current configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Initialize a new machbar.toml in the current or home directory
    Init {
        /// Create in current directory instead of ~/.machbar/
        #[arg(long)]
        local: bool,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Generate shell completions for bash, zsh, or fish
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Show version and build info
    Version,
}

impl Cli {
    pub async fn run(self) -> machbar_core::Result<()> {
        // These work without (or despite) a config file.
        match self.command {
            Commands::Init { local, force } => return setup::cmd_init(local, force),
            Commands::Completions { shell } => return Self::cmd_completions(shell),
            Commands::Version => return Self::cmd_version(),
            _ => {}
        }

        let config_loader = ConfigLoader::load(self.config.as_deref())?;
        if let Some(path) = self.catalog {
            config_loader.update(|c| c.catalog.file = Some(path))?;
        }
        let config = config_loader.get();

        // Resolve log level: --verbose > --quiet > --log-level > config default
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            self.log_level.as_deref().unwrap_or(&config.logging.level)
        };
        init_tracing(&config.logging.format, log_level);
        config_loader.log_warnings();

        match self.command {
            Commands::Analyze {
                text,
                example,
                json,
                reply_only,
                no_delay,
            } => {
                let classifier = build_classifier(&config)?;
                let input = analyze::resolve_input(text, example)?;
                let output = analyze::OutputMode::pick(json, reply_only, &config.ui.format);
                let delay = if no_delay { 0 } else { config.ui.analysis_delay_ms };
                analyze::cmd_analyze(&classifier, &input, output, delay).await
            }
            Commands::Examples { json } => analyze::cmd_examples(json),
            Commands::Catalog { json, export } => {
                let catalog = Catalog::load(config.catalog.file.as_deref())?;
                catalog::cmd_catalog(&catalog, json, export)
            }
            Commands::Config { json } => Self::cmd_config(&config, json),
            Commands::Init { .. } | Commands::Completions { .. } | Commands::Version => Ok(()),
        }
    }

    fn cmd_config(config: &MachbarConfig, json: bool) -> machbar_core::Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(config)?);
        } else {
            println!(
                "{}",
                toml::to_string_pretty(config)
                    .map_err(|e| machbar_core::MachbarError::Config(e.to_string()))?
            );
        }
        Ok(())
    }

    fn cmd_version() -> machbar_core::Result<()> {
        println!("✅ machbar v{}", env!("CARGO_PKG_VERSION"));
        println!("   Target: {}", std::env::consts::ARCH);
        println!("   OS: {}", std::env::consts::OS);
        #[cfg(debug_assertions)]
        println!("   Profile: debug");
        #[cfg(not(debug_assertions))]
        println!("   Profile: release");
        Ok(())
    }

    fn cmd_completions(shell: Shell) -> machbar_core::Result<()> {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "machbar", &mut std::io::stdout());
        Ok(())
    }
}

/// Classifier over the configured catalog, greeting the configured recipient.
fn build_classifier(config: &MachbarConfig) -> machbar_core::Result<Classifier> {
    let catalog = Catalog::load(config.catalog.file.as_deref())?;
    Ok(Classifier::new(catalog).with_recipient(config.ui.reply_recipient.clone()))
}

/// Logs go to stderr so that `--json` output on stdout stays machine-readable.
fn init_tracing(format: &str, level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        "json" => builder.json().with_target(true).init(),
        "compact" => builder.compact().with_target(false).init(),
        _ => builder.with_target(false).init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_analyze_with_free_text() {
        let cli = Cli::try_parse_from(["machbar", "analyze", "4", "Banner", "bis", "morgen"]).unwrap();
        match cli.command {
            Commands::Analyze { text, example, .. } => {
                assert_eq!(text, vec!["4", "Banner", "bis", "morgen"]);
                assert!(example.is_none());
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn example_conflicts_with_text() {
        assert!(Cli::try_parse_from(["machbar", "analyze", "text", "--example", "2"]).is_err());
        assert!(Cli::try_parse_from(["machbar", "analyze", "--example", "2"]).is_ok());
    }

    #[test]
    fn json_conflicts_with_reply_only() {
        assert!(Cli::try_parse_from(["machbar", "analyze", "x", "--json", "--reply-only"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["machbar", "catalog", "--catalog", "/tmp/c.toml", "-v"]).unwrap();
        assert_eq!(cli.catalog, Some(PathBuf::from("/tmp/c.toml")));
        assert!(cli.verbose);
    }

    #[test]
    fn log_level_flag_accepts_only_known_levels() {
        let cli = Cli::try_parse_from(["machbar", "examples", "-l", "debug"]).unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(Cli::try_parse_from(["machbar", "examples", "-l", "loud"]).is_err());
    }

    #[test]
    fn classifier_uses_configured_recipient() {
        let mut config = MachbarConfig::default();
        config.ui.reply_recipient = "Lea".into();
        let classifier = build_classifier(&config).unwrap();
        assert_eq!(classifier.recipient(), "Lea");
        assert_eq!(classifier.catalog(), &Catalog::builtin());
    }
}
