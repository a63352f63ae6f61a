use crate::cli::open_activator;
use crate::Result;
use colored::Colorize;

pub fn run(module: &str) -> Result<()> {
    let mut activator = open_activator()?;

    if !activator.statuses().contains_key(module) {
        println!(
            "{}",
            format!("Module [{}] is not tracked.", module).bright_black()
        );
        return Ok(());
    }

    activator.delete(module)?;
    println!(
        "{}",
        format!("Module [{}] removed from the status file.", module).green()
    );

    Ok(())
}
