use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;

use crate::appman;
use crate::bootstrap;
use crate::catalog::{self, AppEntry};
use crate::config::{self, Config};
use crate::parse;
use crate::utils;

#[derive(Parser)]
#[clap(name = "appnest")]
#[clap(about = "A desktop AppImage manager powered by AppMan", long_about = "A desktop AppImage manager for Linux, powered by the AppMan CLI.\n\nRun without arguments to open the graphical interface. The subcommands\nexpose the same operations from a terminal: list and update installed\nAppImages, browse the catalog of available ones, install and remove apps.")]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List installed AppImages
    List,
    /// Browse the catalog of available AppImages
    Available {
        /// Filter the catalog (case-insensitive, name and description)
        query: Option<String>,
    },
    /// Install an AppImage from the catalog
    Install {
        /// Application name
        name: String,
        /// Don't ask for confirmation
        #[clap(short, long)]
        yes: bool,
    },
    /// Remove an installed AppImage
    Remove {
        /// Application name
        name: String,
        /// Don't ask for confirmation
        #[clap(short, long)]
        yes: bool,
    },
    /// Update one AppImage, or all of them
    Update {
        /// Application name (if omitted, update everything)
        name: Option<String>,
    },
    /// Show information about an application
    About {
        /// Application name
        name: String,
    },
    /// Install and configure the AppMan backend if it is missing
    Bootstrap,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let rt = tokio::runtime::Runtime::new()?;

        match &self.command {
            Commands::List => {
                let apps = rt.block_on(appman::list_installed())?;
                if apps.is_empty() {
                    utils::print_info("No AppImages installed");
                } else {
                    print_entries(&apps);
                }
                Ok(())
            }
            Commands::Available { query } => {
                let apps = catalog::load_available(&config::catalog_path());
                let shown = match query {
                    Some(q) => catalog::filter_apps(&apps, q),
                    None => apps,
                };
                if shown.is_empty() {
                    utils::print_info("No matching applications");
                } else {
                    print_entries(&shown);
                }
                Ok(())
            }
            Commands::Install { name, yes } => {
                if !yes && !utils::confirm(&format!("Install {}?", name))? {
                    utils::print_info("Installation cancelled");
                    return Ok(());
                }
                let output = rt.block_on(appman::install(name.clone()))?;
                println!("{}", parse::install_summary(&output).trim());
                utils::print_success(&format!("Installed {}", name));
                Ok(())
            }
            Commands::Remove { name, yes } => {
                if !yes && !utils::confirm(&format!("Remove {}?", name))? {
                    utils::print_info("Removal cancelled");
                    return Ok(());
                }
                let output = rt.block_on(appman::remove(name.clone()))?;
                print!("{}", output);
                utils::print_success(&format!("Removed {}", name));
                Ok(())
            }
            Commands::Update { name } => {
                let output = rt.block_on(appman::update(name.clone()))?;
                print!("{}", output);
                utils::print_success(match name {
                    Some(_) => "Update finished",
                    None => "All AppImages updated",
                });
                Ok(())
            }
            Commands::About { name } => {
                let output = rt.block_on(appman::about(name.clone()))?;
                print!("{}", output);
                Ok(())
            }
            Commands::Bootstrap => {
                let config = Config::load().unwrap_or_default();
                bootstrap::ensure_backend(&config)?;
                Ok(())
            }
        }
    }
}

fn print_entries(apps: &[AppEntry]) {
    for app in apps {
        if app.description.is_empty() {
            println!("{}", app.name.as_str().bold());
        } else {
            println!("{} {} {}", app.name.as_str().bold(), ":".dimmed(), app.description);
        }
    }
}
