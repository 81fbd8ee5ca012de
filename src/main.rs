//! Parlandim - front-end core of the Parlandim<dev> blog.

use anyhow::Result;
use clap::Parser;
use parlandim::{
    cli::{Cli, Commands},
    commands::{print_head, print_home, run_theme},
    config::{SiteConfig, cfg, init_config},
    log,
};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_config(load_config(&cli)?);
    let config = cfg();

    match &cli.command {
        Commands::Head {
            page,
            site_data,
            raw,
        } => print_head(&config, page, site_data.as_deref(), raw),
        Commands::Theme { action } => run_theme(&config, *action),
        Commands::Home { posts, limit } => print_home(posts, *limit),
    }
}

/// Load and validate configuration from CLI arguments.
///
/// A missing config file is not an error: every value has a fallback.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        log!("warn"; "`{}` not found, using defaults", config_path.display());
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}
