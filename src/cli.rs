// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands that do not need the interactive carousel
//!
//! This module provides command-line functionality for:
//! - Listing the partners a config would show
//! - Checking a config file for problems

use carousel::Config;
use carousel::partners::Partner;
use carousel::terminal::ConfigSource;
use chrono::{Datelike, Local};
use std::path::Path;

/// List all partners in display order
pub fn list_partners(source: &ConfigSource) -> Result<(), Box<dyn std::error::Error>> {
    let config = source.load()?;

    if config.partners.is_empty() {
        println!("No partners configured.");
        return Ok(());
    }

    println!("{}", config.section_title);
    println!();
    for (index, partner) in config.partners.iter().enumerate() {
        println!("  {}", describe_partner(index, partner));
    }
    println!();
    println!(
        "Rotating every {} ({})",
        config.interval,
        config.tick_policy.display_name()
    );

    Ok(())
}

/// Load a config file and report anything suspicious in it
pub fn check_config(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load(path)?;
    println!("Config: {}", path.display());
    println!("  Partners: {}", config.partners.len());
    println!("  Interval: {}", config.interval);
    println!("  Tick policy: {}", config.tick_policy.display_name());

    let warnings = config.validate(Local::now().year());
    if warnings.is_empty() {
        println!("No problems found.");
        return Ok(());
    }

    println!();
    println!("Warnings:");
    for (index, warning) in &warnings {
        let name = config
            .partners
            .get(*index)
            .map(|p| p.name.as_str())
            .unwrap_or_default();
        println!("  [{}] {}: {}", index, name, warning);
    }

    Ok(())
}

fn describe_partner(index: usize, partner: &Partner) -> String {
    let mut details = vec![partner.category.label().to_string()];
    if let Some(since) = partner.since_label() {
        details.push(since);
    }
    if partner.image.is_none() {
        details.push("no image".to_string());
    }
    format!("[{}] {} ({})", index, partner.name, details.join(", "))
}
