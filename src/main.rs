use anyhow::Result;
use clap::Parser;

mod appman;
mod bootstrap;
mod catalog;
mod cli;
mod config;
mod gui;
mod parse;
mod suggested;
mod utils;

use cli::Cli;
use config::Config;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    // No arguments: install the backend if needed, then open the GUI
    if args.len() == 1 {
        let config = Config::load().unwrap_or_default();

        if let Err(e) = bootstrap::ensure_backend(&config) {
            utils::print_error(&format!("AppMan installation failed: {}", e));
            std::process::exit(1);
        }

        eprintln!("[DEBUG] launching GUI...");
        gui::run(config)?;
        Ok(())
    } else {
        let cli = Cli::parse();
        cli.run()
    }
}
