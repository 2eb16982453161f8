//! HR & Payroll Architecture Viewer - Entry Point

use archview::model::LayerKey;
use archview::view::{constants::DEFAULT_PRINT_WIDTH, ColorConfig, DiagramStyles};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::info;

/// HR & Payroll Architecture Viewer - TUI for the system architecture diagram
#[derive(Parser, Debug)]
#[command(name = "archview")]
#[command(version)]
#[command(about = "Interactive view of the HR & payroll system architecture")]
pub struct Args {
    /// Print the page as plain text and exit instead of starting the TUI
    #[arg(long, conflicts_with = "json")]
    pub print: bool,

    /// Layer to show expanded in printed output
    #[arg(long, requires = "print", value_name = "LAYER")]
    pub expand: Option<LayerKey>,

    /// Print the diagram content as JSON and exit
    #[arg(long)]
    pub json: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Do not capture the mouse (keeps terminal text selection working)
    #[arg(long)]
    pub no_mouse: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // One-shot outputs never touch the terminal or the log file
    if args.json {
        println!("{}", serde_json::to_string_pretty(archview::model::diagram())?);
        return Ok(());
    }

    if args.print {
        // Piped output gets a fixed width
        let width = if std::io::stdout().is_terminal() {
            crossterm::terminal::size()
                .map(|(cols, _)| cols)
                .unwrap_or(DEFAULT_PRINT_WIDTH)
        } else {
            DEFAULT_PRINT_WIDTH
        };
        println!("{}", archview::view::render_plain(args.expand, width));
        return Ok(());
    }

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        // 1. Load config file (or None if missing)
        let config_file = archview::config::load_config_with_precedence(args.config.clone())?;

        // 2. Merge with defaults
        let merged = archview::config::merge_config(config_file);

        // 3. Apply environment variable overrides
        let with_env = archview::config::apply_env_overrides(merged);

        // 4. Apply CLI argument overrides
        // Flags only override when explicitly set
        let no_color_override = if args.no_color { Some(true) } else { None };
        let mouse_override = if args.no_mouse { Some(false) } else { None };

        archview::config::apply_cli_overrides(with_env, no_color_override, mouse_override)
    };

    // Initialize tracing with configured log file path
    archview::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let styles = DiagramStyles::with_color_config(ColorConfig::from_env_and_args(config.no_color));

    archview::view::run_interactive(styles, config.mouse)?;

    Ok(())
}
