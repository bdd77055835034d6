use super::Context;

pub fn run(ctx: &Context, sign: Option<&str>, json: bool) -> Result<(), String> {
    let mut app = ctx.app_with_sign(sign)?;
    let fortune = app.show_fortune().map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&fortune).map_err(|e| e.to_string())?;
        println!("{out}");
    } else {
        app.view().render();
    }

    Ok(())
}
