use crate::types::StatsError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, error};

/// Create (or truncate) an output file.
pub fn create_output(path: &Path) -> Result<BufWriter<File>, StatsError> {
    let file = File::create(path).map_err(|source| {
        error!("Failed to create output {}: {}", path.display(), source);
        StatsError::FileWrite {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!("Created output {}", path.display());
    Ok(BufWriter::new(file))
}

/// Write `contents` and flush, so buffered failures surface here.
pub fn write_output<W: Write>(
    writer: &mut W,
    path: &Path,
    contents: &str,
) -> Result<(), StatsError> {
    writer
        .write_all(contents.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|source| {
            error!("Failed to write {}: {}", path.display(), source);
            StatsError::FileWrite {
                path: path.to_path_buf(),
                source,
            }
        })?;
    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
