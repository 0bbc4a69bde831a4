use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{FolderError, Result};

/// Largest decoded payload accepted. Zero-padded offsets stay well under it.
pub const MAX_CURSOR_BYTES: usize = 4_096;

/// Encodes a result offset as `base64(decimal(offset))`, e.g. `4` becomes `"NA=="`.
pub fn encode_offset(offset: usize) -> String {
    STANDARD.encode(offset.to_string())
}

/// Decodes a token issued by [`encode_offset`]. An empty token is the start of the sequence.
pub fn decode_offset(token: &str) -> Result<usize> {
    if token.is_empty() {
        return Ok(0);
    }
    let bytes = STANDARD
        .decode(token.as_bytes())
        .map_err(|_| FolderError::InvalidToken)?;
    if bytes.len() > MAX_CURSOR_BYTES {
        return Err(FolderError::InvalidTokenFormat);
    }
    let text = std::str::from_utf8(&bytes).map_err(|_| FolderError::InvalidTokenFormat)?;
    // `usize` parsing already rejects signs other than '+', blanks and overflow.
    text.parse::<usize>()
        .map_err(|_| FolderError::InvalidTokenFormat)
}
