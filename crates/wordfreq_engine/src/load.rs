use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use wordfreq_logging::wordfreq_debug;

use crate::decode::{decode_text, DecodeError};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::NotFound { path }
            | LoadError::Io { path, .. }
            | LoadError::Decode { path, .. } => path,
        }
    }
}

/// Read the whole file at `path` and decode it as text.
pub fn load(path: &Path) -> Result<String, LoadError> {
    let bytes = read_bytes(path)?;
    let byte_len = bytes.len();
    let decoded = decode_text(bytes).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    wordfreq_debug!(
        "Loaded {:?}: {} bytes, {}",
        path,
        byte_len,
        decoded.encoding_label
    );
    Ok(decoded.text)
}

// The handle lives only in this scope, so it is closed before any error propagates.
fn read_bytes(path: &Path) -> Result<Vec<u8>, LoadError> {
    let mut file = File::open(path).map_err(|err| classify(path, err))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|err| classify(path, err))?;
    Ok(bytes)
}

fn classify(path: &Path, err: io::Error) -> LoadError {
    if err.kind() == io::ErrorKind::NotFound {
        LoadError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        LoadError::Io {
            path: path.to_path_buf(),
            source: err,
        }
    }
}
