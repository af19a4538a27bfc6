use std::{
    fs::{self, File},
    io::BufReader,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{
    csv,
    error::{Error, Result},
    tex,
};

const OUTPUT_SUFFIX: &str = "_converted.tex";

/// Convert the CSV file at `input` into a LaTeX table and write it next to
/// it, at [`output_path`].
///
/// The whole document is rendered before the output file is touched, so a
/// malformed input never leaves a partial `.tex` behind.
pub fn to_tex(input: &Path) -> Result<PathBuf> {
    info!("converting {}", input.display());

    let file = File::open(input).map_err(|source| Error::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let (header, rows) = csv::read(BufReader::new(file))?;
    debug!("header has {} columns", header.len());

    let mut document = tex::header(&header);
    document.push_str(&itertools::process_results(rows, |rows| tex::body(rows))?);
    document.push_str(tex::footer());

    let output = output_path(input);
    fs::write(&output, document).map_err(|source| Error::Write {
        path: output.clone(),
        source,
    })?;
    info!("wrote {}", output.display());

    Ok(output)
}

/// Every `.csv` in the path is dropped, not only a trailing extension:
/// `data.csv.bak` gives `data.bak_converted.tex`.
pub fn output_path(input: &Path) -> PathBuf {
    let base = input.to_string_lossy().replace(".csv", "");
    PathBuf::from(base + OUTPUT_SUFFIX)
}
