use anyhow::Result;
use assetpack::presentation::output::emit;
use assetpack::presentation::{create_build_use_case, OutputFormat};

use super::Context;

/// Runs a full build so the registry reflects every section, collisions included
pub fn cmd_lookup(ctx: &Context, name: &str) -> Result<()> {
    let loaded = ctx.load()?;
    let output = create_build_use_case().execute(&loaded.config, &loaded.defaults)?;
    let temp_path = output.lookup(name)?;

    match ctx.format() {
        OutputFormat::Json => emit(serde_json::json!({
            "event": "lookup",
            "command": "lookup",
            "name": name,
            "temp_path": temp_path,
            "owner": output.registry.owner(name).map(ToString::to_string),
        }))?,
        OutputFormat::Text => println!("{}", temp_path),
    }

    Ok(())
}
