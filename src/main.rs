//! Lissnify Deck - the Lissnify home-page carousels in your terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use lissnify_app::config::init_config_dir;
use lissnify_core::logging;
use lissnify_core::prelude::*;
use lissnify_deck::RunOptions;

/// Lissnify Deck - browse support categories, stories and listeners from the terminal
#[derive(Parser, Debug)]
#[command(name = "lissnify")]
#[command(about = "The Lissnify home-page carousels in your terminal", long_about = None)]
struct Args {
    /// Directory holding `.lissnify/config.toml`
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Base URL of the Lissnify API (overrides the config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Use the built-in content instead of the API
    #[arg(long)]
    offline: bool,

    /// Write a default `.lissnify/config.toml` and exit
    #[arg(long)]
    init_config: bool,

    /// Print the log file location and exit
    #[arg(long)]
    print_log_path: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let base_path = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.print_log_path {
        println!("{}", logging::get_current_log_file()?.display());
        return Ok(());
    }

    if args.init_config {
        let path = init_config_dir(&base_path)?;
        eprintln!("✅ Config ready at {}", path.display());
        return Ok(());
    }

    let options = RunOptions {
        api_url: args.api_url,
        offline: args.offline,
    };
    lissnify_deck::run_with_project(&base_path, options).await
}
