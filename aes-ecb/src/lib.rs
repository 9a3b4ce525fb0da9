//! # AES-ECB
//!
//! AES in ECB (Electronic Code Book) mode, layered with reversible padding so
//! that input of any length can be encrypted.
//!
//! ECB encrypts every block on its own. Equal plaintext blocks produce equal
//! ciphertext blocks, and nothing authenticates the ciphertext.
//!
//! ## Padding styles
//!
//! - **PKCS#7**: every padding byte holds the padding length
//! - **ANSI X9.23**: zero bytes, then one length byte
//! - **ISO/IEC 7816-4**: a `0x80` marker, then zero bytes
//!
//! ## Usage
//!
//! ```rust
//! use aes_ecb::{decrypt_with_unpad, encrypt_with_pad, PaddingStyle};
//!
//! let key = b"my-secret-key-16";
//! let plaintext = b"Hello, World!";
//!
//! let encrypted = encrypt_with_pad(plaintext, key, 16, PaddingStyle::Pkcs7)?;
//! assert_eq!(encrypted.len(), 16);
//!
//! let decrypted = decrypt_with_unpad(&encrypted, key, 16, PaddingStyle::Pkcs7)?;
//! assert_eq!(decrypted, plaintext);
//! # Ok::<(), aes_ecb::EcbError>(())
//! ```
//!
//! Padding and encryption are also available separately:
//!
//! ```rust
//! use aes_ecb::{pad, unpad, PaddingStyle};
//!
//! let padded = pad(&[0x41, 0x41, 0x41], 8, PaddingStyle::Pkcs7)?;
//! assert_eq!(padded, [0x41, 0x41, 0x41, 5, 5, 5, 5, 5]);
//! assert_eq!(unpad(&padded, 8, PaddingStyle::Pkcs7)?, [0x41, 0x41, 0x41]);
//!
//! let style: PaddingStyle = "iso7816".parse()?;
//! assert_eq!(pad(&[], 4, style)?, [0x80, 0, 0, 0]);
//! # Ok::<(), aes_ecb::EcbError>(())
//! ```

pub mod cipher;
pub mod error;
pub mod modes;
pub mod padding;

pub use cipher::{Aes, BlockCipher, AES_BLOCK_SIZE};
pub use error::{EcbError, Result};
pub use modes::ecb::{
    decrypt, decrypt_with, decrypt_with_unpad, decrypt_with_unpad_using, encrypt, encrypt_with,
    encrypt_with_pad, encrypt_with_pad_using,
};
pub use padding::{pad, unpad, PaddingStyle};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_surface_round_trip() {
        let key = [0x0fu8; 24];
        let plaintext = b"Integration test message for every padding style!";

        for style in PaddingStyle::ALL {
            let padded = pad(plaintext, AES_BLOCK_SIZE, style).unwrap();
            let encrypted = encrypt(&padded, &key).unwrap();
            let combined = encrypt_with_pad(plaintext, &key, AES_BLOCK_SIZE, style).unwrap();
            assert_eq!(encrypted, combined);

            let decrypted = decrypt(&encrypted, &key).unwrap();
            assert_eq!(decrypted, padded);
            assert_eq!(unpad(&decrypted, AES_BLOCK_SIZE, style).unwrap(), plaintext);
        }
    }

    #[test]
    fn test_wrong_style_is_reported() {
        let key = [0x33u8; 16];
        let encrypted = encrypt_with_pad(b"abc", &key, 16, PaddingStyle::Iso7816).unwrap();

        // 0x80 00 .. 00 ends in a zero byte.
        let result = decrypt_with_unpad(&encrypted, &key, 16, PaddingStyle::Pkcs7);
        assert!(matches!(result, Err(EcbError::PaddingOutOfRange { padding_len: 0, .. })));

        let result = decrypt_with_unpad(&encrypted, &key, 16, PaddingStyle::AnsiX923);
        assert!(matches!(result, Err(EcbError::PaddingOutOfRange { .. })));
    }

    #[test]
    fn test_errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync + std::error::Error + 'static>() {}
        assert_send_sync::<EcbError>();
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
