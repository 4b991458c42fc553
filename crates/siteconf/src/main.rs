//! `siteconf` - CLI for siteconf
//!
//! This binary loads a blog's site configuration, reports problems with it,
//! and writes it out in the form the site generator consumes.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

use siteconf::cli::{Cli, Command, ExportCommand, ShowCommand, ValidateCommand};
use siteconf::{export, init_logging, validate, Config};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    match cli.command {
        Command::Show(cmd) => handle_show(&load(cli.config)?, &cmd),
        Command::Validate(cmd) => handle_validate(cli.config, cmd),
        Command::Export(cmd) => handle_export(&load(cli.config)?, &cmd),
        Command::Contacts => {
            handle_contacts(&load(cli.config)?);
            Ok(())
        }
        Command::Fingerprint => {
            println!("{}", load(cli.config)?.fingerprint()?);
            Ok(())
        }
        Command::Path => {
            handle_path(cli.config);
            Ok(())
        }
    }
}

fn load(config_path: Option<PathBuf>) -> anyhow::Result<Config> {
    Config::load_from(config_path).context("could not load site configuration")
}

fn handle_show(config: &Config, cmd: &ShowCommand) -> anyhow::Result<()> {
    if cmd.json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    println!("{}", config.title);
    if !config.subtitle.is_empty() {
        println!("{}", config.subtitle);
    }
    println!();
    println!("URL:              {}", config.url);
    println!("Posts per page:   {}", config.posts_per_page);
    if config.comments_enabled() {
        println!("Comments:         disqus ({})", config.disqus_shortname);
    } else {
        println!("Comments:         disabled");
    }
    match config.google_analytics_id.as_deref() {
        Some(id) if config.analytics_enabled() => println!("Analytics:        {id}"),
        _ => println!("Analytics:        disabled"),
    }
    if !config.copyright.is_empty() {
        println!("Copyright:        {}", config.copyright);
    }
    println!();
    println!("[Menu]");
    for item in &config.menu {
        println!("  {:<16}{}", item.label, config.canonical_url(&item.path)?);
    }
    println!();
    println!("[Author]");
    println!("  Name:           {}", config.author.name);
    println!("  Photo:          {}", config.author.photo);
    if !config.author.bio.is_empty() {
        println!("  Bio:            {}", config.author.bio);
    }
    println!("  Contacts:       {}", config.author.contacts.len());
    Ok(())
}

fn handle_validate(config_path: Option<PathBuf>, cmd: ValidateCommand) -> anyhow::Result<()> {
    let path = cmd.file.or(config_path);
    let shown = path.clone().unwrap_or_else(Config::default_site_path);
    println!("Validating configuration: {}", shown.display());

    let config = Config::load_unchecked(path)?;
    let violations = validate::validate(&config);
    if violations.is_empty() {
        println!("Configuration is valid.");
        return Ok(());
    }

    for violation in &violations {
        println!("  {violation}");
    }
    bail!("found {} problem(s) in {}", violations.len(), shown.display());
}

fn handle_export(config: &Config, cmd: &ExportCommand) -> anyhow::Result<()> {
    let format = cmd.resolved_format();
    match &cmd.output {
        Some(path) => export::write_to(config, format, path)?,
        None => print!("{}", export(config, format)?),
    }
    Ok(())
}

fn handle_contacts(config: &Config) {
    if config.author.contacts.is_empty() {
        println!("No contacts configured.");
        return;
    }
    for (provider, href) in config.author.contacts.links() {
        println!("{:<12}{href}", provider.as_str());
    }
}

fn handle_path(config_path: Option<PathBuf>) {
    let site = config_path.unwrap_or_else(Config::default_site_path);
    println!("Site file:      {}", site.display());
    println!("User defaults:  {}", Config::user_defaults_path().display());
}
