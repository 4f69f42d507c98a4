//! Writing generated components to disk.

use std::fs;
use std::path::{Path, PathBuf};

use tailor_core::ComponentKind;

use crate::error::Result;
use crate::generators::GeneratedCode;
use crate::options::Language;

/// Download file name of a kind, e.g. `Button.tsx`.
pub fn file_name(kind: ComponentKind, language: Language) -> String {
    format!("{}.{}", kind.display_name(), language.extension())
}

/// Write a generated module into `dir`, creating it if needed. The source
/// is written verbatim. Returns the path of the written file.
pub fn write_to_dir(dir: &Path, code: &GeneratedCode) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(&code.file_name);
    fs::write(&path, &code.source)?;
    tracing::debug!(path = %path.display(), bytes = code.source.len(), "wrote component");
    Ok(path)
}
