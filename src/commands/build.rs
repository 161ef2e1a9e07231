use std::io;

use anyhow::Result;
use assetpack::presentation::output::{emit, render_build};
use assetpack::presentation::{create_build_use_case, create_event_sink, OutputFormat};

use super::Context;

pub fn cmd_build(ctx: &Context) -> Result<()> {
    let loaded = ctx.load()?;
    let events = create_event_sink(ctx.json, ctx.verbose);

    let output = create_build_use_case().execute_with_events(
        &loaded.config,
        &loaded.defaults,
        events.as_ref(),
    )?;

    match ctx.format() {
        OutputFormat::Json => emit(serde_json::json!({
            "event": "result",
            "command": "build",
            "data": serde_json::to_value(&output)?,
        }))?,
        OutputFormat::Text => render_build(&mut io::stdout().lock(), &output)?,
    }

    Ok(())
}
