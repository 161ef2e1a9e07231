use std::io;

use anyhow::Result;
use assetpack::presentation::output::{emit, render_section};
use assetpack::presentation::{create_build_use_case, OutputFormat};
use assetpack::AssetType;

use super::Context;

pub fn cmd_show(ctx: &Context, asset_type: AssetType, name: &str) -> Result<()> {
    let loaded = ctx.load()?;
    let report = create_build_use_case().show(&loaded.config, &loaded.defaults, asset_type, name)?;

    match ctx.format() {
        OutputFormat::Json => emit(serde_json::json!({
            "event": "section",
            "command": "show",
            "data": serde_json::to_value(&report)?,
        }))?,
        OutputFormat::Text => render_section(&mut io::stdout().lock(), &report)?,
    }

    Ok(())
}
