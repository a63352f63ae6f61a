use crate::activator::StatusFile;
use crate::cli::open_activator;
use crate::Result;
use colored::Colorize;

pub fn run(json: bool) -> Result<()> {
    let activator = open_activator()?;
    let statuses = activator.statuses();

    if json {
        // Same document shape as the statuses file
        let doc = StatusFile::from_map(statuses);
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    if statuses.is_empty() {
        println!("{}", "No modules tracked.".bright_black());
        return Ok(());
    }

    println!("{}", "Tracked modules".cyan().bold());
    println!();

    for module in statuses.values() {
        let installed = if module.installed {
            "installed".green()
        } else {
            "not installed".red()
        };
        let enabled = if module.enabled {
            "enabled".green()
        } else {
            "disabled".yellow()
        };
        println!("   {:<24} {} / {}", module.name, installed, enabled);
    }

    println!();
    println!(
        "   File: {}",
        activator
            .statuses_file_path()
            .display()
            .to_string()
            .bright_black()
    );

    Ok(())
}
