//! File materialization for generated output.

use std::fs;
use std::path::Path;

use encoding_rs::Encoding;
use eyre::Result;

use crate::encoding::encode;

/// Write `content` to `path` under `encoding`, creating missing parent
/// directories and unconditionally overwriting any existing file.
///
/// Generated files are always rewritten whole; there is no merge or append
/// mode, which is what makes repeated compiles byte-identical.
pub fn write_file(path: &Path, content: &str, encoding: &'static Encoding) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, encode(content, encoding))?;
    Ok(())
}
