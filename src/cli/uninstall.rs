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

    activator.uninstall(module)?;
    println!("{}", format!("Module [{}] uninstalled.", module).green());

    Ok(())
}
