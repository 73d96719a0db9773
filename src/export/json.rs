use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::render::RenderedFields;

pub fn export_json(fields: &RenderedFields, path: &Path) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, fields)
        .with_context(|| format!("failed to serialize fields to {}", path.display()))?;
    writer.flush()?;
    info!(path = %path.display(), "wrote fields");
    Ok(())
}
