use crate::cli::open_activator;
use crate::Result;
use colored::Colorize;
use dialoguer::Confirm;

pub fn run(yes: bool) -> Result<()> {
    let mut activator = open_activator()?;

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete the statuses file and forget every module state?")
            .default(false)
            .interact();

        match confirmed {
            Ok(true) => {}
            // Declined, or no terminal available: do nothing
            Ok(false) | Err(_) => {
                println!("{}", "Reset aborted.".bright_black());
                return Ok(());
            }
        }
    }

    activator.reset()?;
    println!("{}", "Module statuses reset.".green());

    Ok(())
}
