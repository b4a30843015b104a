//! Four-in-a-Row AI Engine GUI
//!
//! A graphical interface for playing Four-in-a-Row against the AI or another player.

use std::path::PathBuf;

use clap::Parser;
use four_in_a_row::config::AppConfig;
use four_in_a_row::ui::FourInARowApp;

/// Play Four-in-a-Row against the alpha-beta AI.
#[derive(Parser, Debug)]
#[command(name = "four_in_a_row", version, about)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "four_in_a_row.toml")]
    config: PathBuf,
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match AppConfig::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };
    log::info!(
        "starting {}x{} game at depth {}",
        config.game.rows,
        config.game.cols,
        config.engine.depth
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Four in a Row"),
        ..Default::default()
    };

    eframe::run_native(
        "Four in a Row",
        options,
        Box::new(|cc| Ok(Box::new(FourInARowApp::new(cc, config)))),
    )
}
