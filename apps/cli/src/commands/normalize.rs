//! `vigil normalize`

use std::path::Path;

use serde_json::Value;
use vigil_params::snake_to_camel;

pub fn run(input: &Path) -> anyhow::Result<()> {
    let document: Value = super::read_json(input)?;
    if !document.is_object() {
        tracing::warn!(input = %input.display(), "document is not an object, printing {{}}");
    }
    println!("{}", serde_json::to_string_pretty(&snake_to_camel(&document))?);
    Ok(())
}
