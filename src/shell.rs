//! The file I/O shell around the grouping core.
//!
//! Everything here is thin glue: read a JSON array of records, hand it to
//! the pure core, write the categories back out. The core never sees a
//! malformed collection — parsing failures stop the run at this boundary.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use grouping::{aggregate, Category, ProductRecord};

/// Shell-level failures. These terminate the run with a non-zero exit;
/// none of them originate in the core, which is total over its input.
#[derive(Error, Debug)]
pub enum ShellError {
    /// Input path does not exist. Checked before any read so the message
    /// can name the path rather than surface a raw OS error.
    #[error("input file not found: {0}")]
    InputNotFound(String),

    /// Input content is not a JSON list of `{title, supermarket}` records.
    #[error("malformed input: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// Read or write failure outside the two cases above.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads the record list, rejecting a missing path or unparseable content.
pub fn read_records(path: &Path) -> Result<Vec<ProductRecord>, ShellError> {
    if !path.exists() {
        return Err(ShellError::InputNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    let records: Vec<ProductRecord> = serde_json::from_str(&content)?;
    Ok(records)
}

/// Writes the category list as pretty-printed JSON.
///
/// Serialization happens fully in memory before the file is touched, so a
/// failure leaves no partial artifact: either the whole output is written
/// or none of it.
pub fn write_categories(path: &Path, categories: &[Category]) -> Result<(), ShellError> {
    let rendered = serde_json::to_string_pretty(categories)?;
    fs::write(path, rendered)?;
    Ok(())
}

/// One whole batch run: read, group, write. Returns the categories so the
/// caller can print a summary.
pub fn run_batch(input: &Path, output: &Path) -> Result<Vec<Category>, ShellError> {
    let records = match read_records(input) {
        Ok(records) => records,
        Err(err) => {
            warn!(input = %input.display(), error = %err, "batch_input_rejected");
            return Err(err);
        }
    };

    let categories = aggregate(&records);
    write_categories(output, &categories)?;

    info!(
        records = records.len(),
        categories = categories.len(),
        output = %output.display(),
        "batch_complete"
    );
    Ok(categories)
}
