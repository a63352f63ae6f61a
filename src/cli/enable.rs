use crate::cli::open_activator;
use crate::Result;
use colored::Colorize;

pub fn run(module: &str) -> Result<()> {
    let mut activator = open_activator()?;

    // Enabling an uninstalled module would be a silent no-op in the
    // store; surface it to the user instead.
    if !activator.has_install(module, true) {
        println!(
            "{}",
            format!("Module [{}] is not installed.", module).yellow()
        );
        return Ok(());
    }

    if activator.has_status(module, true) {
        println!(
            "{}",
            format!("Module [{}] is already enabled.", module).bright_black()
        );
        return Ok(());
    }

    activator.enable(module)?;
    println!("{}", format!("Module [{}] enabled.", module).green());

    Ok(())
}
