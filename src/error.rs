use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors the generator can hit. Synthesis itself cannot fail, so every
/// variant is a fatal filesystem failure carrying the offending path.
#[derive(Debug)]
pub enum SfxError {
    CreateDir { path: PathBuf, source: io::Error },
    WriteFile { path: PathBuf, source: io::Error },
}

impl fmt::Display for SfxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SfxError::CreateDir { path, source } => {
                write!(f, "cannot create directory {}: {source}", path.display())
            }
            SfxError::WriteFile { path, source } => {
                write!(f, "cannot write {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SfxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SfxError::CreateDir { source, .. } => Some(source),
            SfxError::WriteFile { source, .. } => Some(source),
        }
    }
}
