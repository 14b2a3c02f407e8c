use std::path::{Path, PathBuf};

use anyhow::Context;
use compress_io::compress::CompressIo;
use utils::{get_next_line, get_next_trimmed_line};

/// Matched tumor and control BAM files for one sample
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplePair {
    tumor: PathBuf,
    control: PathBuf,
}

impl SamplePair {
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(tumor: P, control: Q) -> Self {
        Self {
            tumor: tumor.into(),
            control: control.into(),
        }
    }

    pub fn tumor(&self) -> &Path {
        &self.tumor
    }

    pub fn control(&self) -> &Path {
        &self.control
    }
}

/// Reading the samples manifest
/// Each non-blank line should contain the path to the tumor BAM followed by the path
/// to the matched control BAM, separated by a tab.  Additional columns are ignored.
/// Order of the lines is preserved.
pub fn read_sample_pairs_from_file<P: AsRef<Path>>(fname: P) -> anyhow::Result<Vec<SamplePair>> {
    debug!("Reading in sample pairs from {}", fname.as_ref().display());

    trace!("Opening samples manifest for reading");
    let mut rdr = CompressIo::new().path(&fname).bufreader()?;

    trace!("Reading from file");
    let mut buf = String::new();
    let mut line = 0;
    let mut pairs = Vec::new();

    while let Some(fields) = get_next_line(&mut rdr, &mut buf).with_context(|| {
        format!(
            "Error after reading {} lines from {}",
            line,
            fname.as_ref().display()
        )
    })? {
        line += 1;
        match fields.as_slice() {
            [""] => continue,
            [tumor, control, ..] => pairs.push(SamplePair::new(*tumor, *control)),
            _ => {
                return Err(anyhow!(
                    "{}:{} Expected tumor and control BAM paths separated by a tab",
                    fname.as_ref().display(),
                    line
                ))
            }
        }
    }

    debug!(
        "Finished reading in {} lines; found {} sample pairs",
        line,
        pairs.len()
    );

    Ok(pairs)
}

/// Reading the healthy manifest
/// One BAM path per line; blank lines are skipped
pub fn read_healthy_list_from_file<P: AsRef<Path>>(fname: P) -> anyhow::Result<Vec<PathBuf>> {
    debug!("Reading in healthy BAM list from {}", fname.as_ref().display());

    trace!("Opening healthy manifest for reading");
    let mut rdr = CompressIo::new().path(&fname).bufreader()?;

    let mut buf = String::new();
    let mut line = 0;
    let mut bams = Vec::new();

    while let Some(s) = get_next_trimmed_line(&mut rdr, &mut buf).with_context(|| {
        format!(
            "Error after reading {} lines from {}",
            line,
            fname.as_ref().display()
        )
    })? {
        line += 1;
        if !s.is_empty() {
            bams.push(PathBuf::from(s))
        }
    }

    debug!(
        "Finished reading in {} lines; found {} healthy BAMs",
        line,
        bams.len()
    );

    Ok(bams)
}
