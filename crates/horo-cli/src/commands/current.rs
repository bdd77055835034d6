use colored::Colorize;

use super::Context;

pub fn run(ctx: &Context) -> Result<(), String> {
    let app = ctx.app()?;
    match app.selected() {
        Some(sign) => println!("  {} ({})", sign.id().bold(), sign.display_name()),
        None => println!("  No sign selected."),
    }
    Ok(())
}
