//! Derive a type table from a Rust struct.
//!
//! Run with: cargo run --example struct_table

use serde::Serialize;
use typetable::{table_of, to_text};

#[derive(Serialize)]
struct User {
    id: u32,
    name: String,
    email: String,
    roles: Vec<String>,
    address: Address,
}

#[derive(Serialize)]
struct Address {
    street: String,
    city: String,
    zip: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let user = User {
        id: 42,
        name: "Alice Johnson".to_string(),
        email: "alice@example.com".to_string(),
        roles: vec!["admin".to_string(), "owner".to_string()],
        address: Address {
            street: "Main St 7".to_string(),
            city: "Amsterdam".to_string(),
            zip: "1011".to_string(),
        },
    };

    let table = table_of(&user)?;
    println!("{}", to_text(&table));

    Ok(())
}
