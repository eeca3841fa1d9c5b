//! Prints the OpenAPI document for the ingestion API schemas.
//!
//! Usage: `cargo run --bin openapi > openapi.json`

use shared::openapi;

fn main() -> Result<(), serde_json::Error> {
    let doc = openapi::document()?;
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
