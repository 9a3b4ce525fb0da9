//! Reversible block padding
//!
//! Three conventions are supported, all of which always append at least one
//! byte so that the padding can be removed unambiguously:
//!
//! | style       | padding for 3 missing bytes |
//! |-------------|-----------------------------|
//! | PKCS#7      | `03 03 03`                  |
//! | ANSI X9.23  | `00 00 03`                  |
//! | ISO 7816-4  | `80 00 00`                  |

use std::fmt;
use std::str::FromStr;

use crate::error::{EcbError, Result};

/// Marker byte that starts ISO/IEC 7816-4 padding
pub const ISO7816_MARKER: u8 = 0x80;

/// Padding convention used to fill the last block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaddingStyle {
    /// Every padding byte holds the padding length
    #[default]
    Pkcs7,
    /// Zero bytes followed by one length byte
    AnsiX923,
    /// A `0x80` marker followed by zero bytes
    Iso7816,
}

impl PaddingStyle {
    /// All supported styles
    pub const ALL: [PaddingStyle; 3] = [
        PaddingStyle::Pkcs7,
        PaddingStyle::AnsiX923,
        PaddingStyle::Iso7816,
    ];

    /// Short tag accepted by [`FromStr`]
    pub fn tag(&self) -> &'static str {
        match self {
            PaddingStyle::Pkcs7 => "pkcs7",
            PaddingStyle::AnsiX923 => "x923",
            PaddingStyle::Iso7816 => "iso7816",
        }
    }

    /// Largest block size the style can encode
    ///
    /// PKCS#7 and X9.23 store the padding length in a single byte.
    pub fn max_block_size(&self) -> usize {
        match self {
            PaddingStyle::Pkcs7 | PaddingStyle::AnsiX923 => u8::MAX as usize,
            PaddingStyle::Iso7816 => usize::MAX,
        }
    }
}

impl fmt::Display for PaddingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaddingStyle::Pkcs7 => "PKCS#7",
            PaddingStyle::AnsiX923 => "ANSI X9.23",
            PaddingStyle::Iso7816 => "ISO 7816-4",
        };
        f.write_str(name)
    }
}

impl FromStr for PaddingStyle {
    type Err = EcbError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pkcs7" | "pkcs#7" => Ok(PaddingStyle::Pkcs7),
            "x923" | "ansix923" | "ansi-x9.23" => Ok(PaddingStyle::AnsiX923),
            "iso7816" | "iso7816-4" | "iso-7816-4" => Ok(PaddingStyle::Iso7816),
            _ => Err(EcbError::UnknownPaddingStyle(s.to_string())),
        }
    }
}

/// Number of padding bytes `pad` appends to `data_len` bytes. `block_size` is
/// never zero here.
fn padding_len(data_len: usize, block_size: usize) -> usize {
    // `block_size - 0` already yields a full block for aligned input.
    block_size - (data_len % block_size)
}

/// Pad `data` to a multiple of `block_size`
///
/// Aligned input still gets a full block of padding, so the result is always
/// strictly longer than `data`.
///
/// Fails with [`EcbError::InvalidBlockSize`] when `block_size` is zero, or
/// when it exceeds 255 for PKCS#7 and ANSI X9.23. Those two styles store the
/// padding length in one byte, and the limit applies to the block size even
/// when the padding actually needed would fit.
pub fn pad(data: &[u8], block_size: usize, style: PaddingStyle) -> Result<Vec<u8>> {
    if block_size == 0 || block_size > style.max_block_size() {
        return Err(EcbError::InvalidBlockSize(block_size));
    }

    let padding_len = padding_len(data.len(), block_size);
    let mut padded = Vec::with_capacity(data.len() + padding_len);
    padded.extend_from_slice(data);

    match style {
        PaddingStyle::Pkcs7 => {
            padded.resize(data.len() + padding_len, padding_len as u8);
        }
        PaddingStyle::AnsiX923 => {
            padded.resize(data.len() + padding_len - 1, 0);
            padded.push(padding_len as u8);
        }
        PaddingStyle::Iso7816 => {
            padded.push(ISO7816_MARKER);
            padded.resize(data.len() + padding_len, 0);
        }
    }

    log::trace!(
        "{style}: padded {} bytes with {padding_len} bytes (block size {block_size})",
        data.len()
    );
    Ok(padded)
}

/// Strip padding added by [`pad`] with the same block size and style
pub fn unpad(data: &[u8], block_size: usize, style: PaddingStyle) -> Result<Vec<u8>> {
    if block_size == 0 {
        return Err(EcbError::InvalidBlockSize(block_size));
    }
    let length = data.len();
    if length == 0 {
        return Err(EcbError::EmptyInput);
    }
    if length % block_size != 0 {
        return Err(EcbError::NotBlockAligned { len: length, block_size });
    }

    let padding_len = match style {
        PaddingStyle::Pkcs7 | PaddingStyle::AnsiX923 => {
            let padding_len = data[length - 1] as usize;
            check_range(padding_len, length, block_size)?;

            let body = match style {
                PaddingStyle::Pkcs7 => &data[length - padding_len..],
                _ => &data[length - padding_len..length - 1],
            };
            let fill = match style {
                PaddingStyle::Pkcs7 => padding_len as u8,
                _ => 0,
            };
            if body.iter().any(|&b| b != fill) {
                return Err(EcbError::PaddingMismatch(style));
            }
            padding_len
        }
        PaddingStyle::Iso7816 => {
            let marker = data
                .iter()
                .rposition(|&b| b == ISO7816_MARKER)
                .ok_or(EcbError::PaddingMarkerNotFound)?;
            let padding_len = length - marker;
            check_range(padding_len, length, block_size)?;

            if data[marker + 1..].iter().any(|&b| b != 0) {
                return Err(EcbError::PaddingMismatch(style));
            }
            padding_len
        }
    };

    log::trace!("{style}: removed {padding_len} padding bytes from {length}");
    Ok(data[..length - padding_len].to_vec())
}

fn check_range(padding_len: usize, length: usize, block_size: usize) -> Result<()> {
    if padding_len < 1 || padding_len > block_size || padding_len > length {
        return Err(EcbError::PaddingOutOfRange { padding_len, block_size });
    }
    Ok(())
}
