use std::io;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use scout_core::MediaType;

/// Largest file accepted as an inline attachment.
pub const MAX_ATTACHMENT_BYTES: u64 = 20 * 1024 * 1024;

/// File bytes in transport-safe form, ready for a JSON request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAttachment {
    pub media_type: MediaType,
    /// Standard base64 with padding.
    pub data: String,
}

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path:?} is empty")]
    Empty { path: PathBuf },
    #[error("{path:?} is {actual} bytes, over the {max_bytes} byte limit")]
    TooLarge {
        path: PathBuf,
        actual: u64,
        max_bytes: u64,
    },
}

pub fn encode_bytes(bytes: &[u8], media_type: MediaType) -> EncodedAttachment {
    EncodedAttachment {
        media_type,
        data: STANDARD.encode(bytes),
    }
}

/// Reads `path` and encodes it. The media type is taken as already validated.
pub async fn encode_file(
    path: &Path,
    media_type: MediaType,
) -> Result<EncodedAttachment, EncodeError> {
    let read_error = |source| EncodeError::Read {
        path: path.to_path_buf(),
        source,
    };

    let len = tokio::fs::metadata(path).await.map_err(read_error)?.len();
    if len > MAX_ATTACHMENT_BYTES {
        return Err(EncodeError::TooLarge {
            path: path.to_path_buf(),
            actual: len,
            max_bytes: MAX_ATTACHMENT_BYTES,
        });
    }

    let bytes = tokio::fs::read(path).await.map_err(read_error)?;
    if bytes.is_empty() {
        return Err(EncodeError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(encode_bytes(&bytes, media_type))
}
