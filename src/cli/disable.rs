use crate::cli::open_activator;
use crate::Result;
use colored::Colorize;

pub fn run(module: &str) -> Result<()> {
    let mut activator = open_activator()?;

    if !activator.has_install(module, true) {
        println!(
            "{}",
            format!("Module [{}] is not installed.", module).yellow()
        );
        return Ok(());
    }

    if activator.has_status(module, false) {
        println!(
            "{}",
            format!("Module [{}] is already disabled.", module).bright_black()
        );
        return Ok(());
    }

    activator.disable(module)?;
    println!("{}", format!("Module [{}] disabled.", module).green());

    Ok(())
}
