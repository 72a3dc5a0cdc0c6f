use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Reads a plain text document from `path`, or stdin when absent or `-`.
/// Invalid UTF-8 is replaced rather than rejected; pdftotext output is not
/// always clean.
pub fn read_text(path: Option<&Path>) -> Result<String> {
    let bytes = match path {
        Some(p) if p != Path::new("-") => {
            fs::read(p).with_context(|| format!("failed to read {}", p.display()))?
        }
        _ => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
