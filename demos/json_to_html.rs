//! Parse JSON text and print the rendered HTML table.
//!
//! Run with: cargo run --example json_to_html

use typetable::{table_from_str, to_html_with_options, RenderOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let json = r#"{
        "id": 1,
        "profile": {"name": "Alice", "tags": ["admin"]},
        "scores": [{"round": 1, "value": 9.5}],
        "archived": null
    }"#;

    let table = table_from_str(json)?;
    let html = to_html_with_options(&table, &RenderOptions::pretty());
    println!("{}", html);

    Ok(())
}
