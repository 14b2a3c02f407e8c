use std::io::Write;

use anyhow::Context;
use compress_io::compress::CompressIo;

use crate::{config::Config, document::Document};

/// Build the pipeline document and write it to stdout
///
/// The document is rendered completely before any output is written
pub fn write_document(cfg: &Config) -> anyhow::Result<()> {
    debug!("Assembling pipeline document");
    let doc = Document::from_config(cfg);
    let s = doc.to_string();
    trace!("Document has {} entries", doc.entries().len());

    let mut wrt = CompressIo::new()
        .bufwriter()
        .with_context(|| "Failed to open output")?;

    // Document is followed by a blank line
    writeln!(wrt, "{}", s).with_context(|| "Error writing document")?;
    wrt.flush().with_context(|| "Error writing document")
}
