//! System clipboard access

use anyhow::{Context, Result};

/// Write text to the system clipboard. Write-only; nothing is read back.
pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().context("Failed to open the system clipboard")?;
    clipboard
        .set_text(text.to_string())
        .context("Failed to write to the clipboard")?;
    Ok(())
}
