use comfy_table::{ContentArrangement, Table};

use horo_core::ZodiacSign;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Sign", "", "Name", "English"]);

    for sign in ZodiacSign::all() {
        table.add_row(vec![
            sign.id().to_string(),
            sign.symbol().to_string(),
            sign.display_name().to_string(),
            sign.english_name().to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}
