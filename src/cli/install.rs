use crate::cli::open_activator;
use crate::Result;
use colored::Colorize;

pub fn run(module: &str) -> Result<()> {
    let mut activator = open_activator()?;

    if activator.has_install(module, true) {
        println!(
            "{}",
            format!("Module [{}] is already installed.", module).bright_black()
        );
        return Ok(());
    }

    activator.install(module)?;
    println!("{}", format!("Module [{}] installed.", module).green());

    Ok(())
}
