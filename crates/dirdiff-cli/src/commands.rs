use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use colored::Colorize;

use dirdiff_engine::diff_roots;
use dirdiff_render::{render_html, render_text};
use dirdiff_scan::PathFilter;

use crate::cli::{Cli, OutputFormat};
use crate::config::{Config, DEFAULT_CONFIG_NAME, INIT_CONFIG};

pub fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.init {
        return cmd_init(cli.force);
    }

    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_NAME));
    if !config_path.exists() {
        bail!(
            "config file '{}' not found\n  create one with:  dirdiff --init\n  or specify one:   dirdiff my-config.yaml",
            config_path.display()
        );
    }

    let config = Config::load(&config_path)?;

    let render_json = matches!(cli.format, OutputFormat::Json);
    if !config.output.color || render_json {
        colored::control::set_override(false);
    }

    let filter = PathFilter::new(&config.filter)?;
    let result = diff_roots(
        &config.original,
        &config.modified,
        &filter,
        &config.diff_options(),
    )?;

    match cli.format {
        OutputFormat::Text => print!("{}", render_text(&result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    if config.output.html {
        let html_path = &config.output.html_path;
        if let Some(parent) = html_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("could not create {}", parent.display()))?;
        }
        fs::write(html_path, render_html(&result))
            .with_context(|| format!("could not write {}", html_path.display()))?;
        if !render_json {
            println!("{} HTML report: {}", "✓".green(), html_path.display());
        }
    }

    Ok(())
}

fn cmd_init(force: bool) -> anyhow::Result<()> {
    let target = PathBuf::from(DEFAULT_CONFIG_NAME);
    if target.exists() && !force {
        bail!(
            "'{DEFAULT_CONFIG_NAME}' already exists; pass --force to overwrite it"
        );
    }

    fs::write(&target, INIT_CONFIG)
        .with_context(|| format!("could not write {DEFAULT_CONFIG_NAME}"))?;
    println!("{} '{DEFAULT_CONFIG_NAME}' created.", "✓".green());
    println!("  Adjust the paths, then run: dirdiff");
    Ok(())
}
