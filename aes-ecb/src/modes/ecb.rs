//! ECB (Electronic Code Book) mode implementation
//!
//! Every block is transformed on its own: equal plaintext blocks give equal
//! ciphertext blocks under the same key. There is no IV and no chaining.

use crate::cipher::{Aes, BlockCipher};
use crate::error::{EcbError, Result};
use crate::padding::{self, PaddingStyle};

/// ECB mode encryption with AES
///
/// The key length selects AES-128, AES-192 or AES-256. `plaintext` must
/// already be a multiple of the 16-byte block size.
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    encrypt_with::<Aes>(plaintext, key)
}

/// ECB mode decryption with AES
pub fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    decrypt_with::<Aes>(ciphertext, key)
}

/// ECB mode encryption with any [`BlockCipher`]
pub fn encrypt_with<C: BlockCipher>(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let cipher = C::new(key)?;
    let ciphertext = transform(plaintext, cipher.block_size(), |block| {
        cipher.encrypt_block(block)
    })?;
    log::debug!("ecb: encrypted {} bytes", ciphertext.len());
    Ok(ciphertext)
}

/// ECB mode decryption with any [`BlockCipher`]
pub fn decrypt_with<C: BlockCipher>(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let cipher = C::new(key)?;
    let plaintext = transform(ciphertext, cipher.block_size(), |block| {
        cipher.decrypt_block(block)
    })?;
    log::debug!("ecb: decrypted {} bytes", plaintext.len());
    Ok(plaintext)
}

fn transform<F>(input: &[u8], block_size: usize, mut apply: F) -> Result<Vec<u8>>
where
    F: FnMut(&mut [u8]) -> Result<()>,
{
    if block_size == 0 {
        return Err(EcbError::InvalidBlockSize(block_size));
    }
    if input.len() % block_size != 0 {
        return Err(EcbError::NotBlockAligned {
            len: input.len(),
            block_size,
        });
    }

    let mut output = input.to_vec();
    for chunk in output.chunks_exact_mut(block_size) {
        apply(chunk)?;
    }

    Ok(output)
}

/// Pad `plaintext` with `style` to `block_size`, then encrypt it with AES
pub fn encrypt_with_pad(
    plaintext: &[u8],
    key: &[u8],
    block_size: usize,
    style: PaddingStyle,
) -> Result<Vec<u8>> {
    encrypt_with_pad_using::<Aes>(plaintext, key, block_size, style)
}

/// Decrypt `ciphertext` with AES, then strip `style` padding
///
/// A wrong key, a corrupted ciphertext or the wrong style usually shows up as
/// a padding error here.
pub fn decrypt_with_unpad(
    ciphertext: &[u8],
    key: &[u8],
    block_size: usize,
    style: PaddingStyle,
) -> Result<Vec<u8>> {
    decrypt_with_unpad_using::<Aes>(ciphertext, key, block_size, style)
}

/// [`encrypt_with_pad`] for any [`BlockCipher`]
pub fn encrypt_with_pad_using<C: BlockCipher>(
    plaintext: &[u8],
    key: &[u8],
    block_size: usize,
    style: PaddingStyle,
) -> Result<Vec<u8>> {
    let padded = padding::pad(plaintext, block_size, style)?;
    encrypt_with::<C>(&padded, key)
}

/// [`decrypt_with_unpad`] for any [`BlockCipher`]
pub fn decrypt_with_unpad_using<C: BlockCipher>(
    ciphertext: &[u8],
    key: &[u8],
    block_size: usize,
    style: PaddingStyle,
) -> Result<Vec<u8>> {
    let padded = decrypt_with::<C>(ciphertext, key)?;
    padding::unpad(&padded, block_size, style)
}
