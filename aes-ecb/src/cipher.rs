//! Block cipher primitive used by the ECB layer

use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};

use crate::error::{EcbError, Result};

/// Trait for a keyed block cipher
///
/// Implementations transform exactly one block of [`BlockCipher::block_size`]
/// bytes in place and reject a block of any other length with
/// [`EcbError::NotBlockAligned`].
pub trait BlockCipher: Sized {
    /// Initializes the cipher from raw key material
    fn new(key: &[u8]) -> Result<Self>;

    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Returns the block size of the cipher
    fn block_size(&self) -> usize;
}

/// Block size of every AES variant, in bytes.
pub const AES_BLOCK_SIZE: usize = 16;

/// AES keyed with 128, 192 or 256 bits, picked from the key length.
#[derive(Clone)]
pub enum Aes {
    Aes128(aes::Aes128),
    Aes192(aes::Aes192),
    Aes256(aes::Aes256),
}

impl Aes {
    /// Key size in bits of the selected variant
    pub fn key_bits(&self) -> usize {
        match self {
            Aes::Aes128(_) => 128,
            Aes::Aes192(_) => 192,
            Aes::Aes256(_) => 256,
        }
    }
}

fn aes_block(block: &mut [u8]) -> Result<&mut aes::Block> {
    if block.len() != AES_BLOCK_SIZE {
        return Err(EcbError::NotBlockAligned {
            len: block.len(),
            block_size: AES_BLOCK_SIZE,
        });
    }
    Ok(aes::Block::from_mut_slice(block))
}

impl std::fmt::Debug for Aes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the round keys.
        write!(f, "Aes{}", self.key_bits())
    }
}

impl BlockCipher for Aes {
    fn new(key: &[u8]) -> Result<Self> {
        let invalid = |_| EcbError::InvalidKeyLength(key.len());
        let cipher = match key.len() {
            16 => Aes::Aes128(aes::Aes128::new_from_slice(key).map_err(invalid)?),
            24 => Aes::Aes192(aes::Aes192::new_from_slice(key).map_err(invalid)?),
            32 => Aes::Aes256(aes::Aes256::new_from_slice(key).map_err(invalid)?),
            len => return Err(EcbError::InvalidKeyLength(len)),
        };
        log::trace!("initialized AES-{}", cipher.key_bits());
        Ok(cipher)
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        let block = aes_block(block)?;
        match self {
            Aes::Aes128(c) => c.encrypt_block(block),
            Aes::Aes192(c) => c.encrypt_block(block),
            Aes::Aes256(c) => c.encrypt_block(block),
        }
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        let block = aes_block(block)?;
        match self {
            Aes::Aes128(c) => c.decrypt_block(block),
            Aes::Aes192(c) => c.decrypt_block(block),
            Aes::Aes256(c) => c.decrypt_block(block),
        }
        Ok(())
    }

    fn block_size(&self) -> usize {
        AES_BLOCK_SIZE
    }
}
