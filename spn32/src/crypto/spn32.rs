use crate::crypto::cipher_traits::{BlockCipher, CipherAlgorithm, SymmetricCipher};
use crate::crypto::error::CipherError;
use crate::crypto::key_schedule::{derive_subkeys, ROUNDS};
use crate::crypto::permutation::{permute, permute_inv};
use crate::crypto::substitution::{substitute, substitute_inv};

/// Block width in bytes (32 bits).
pub const BLOCK_SIZE: usize = 4;

/// The 3-round substitution-permutation cipher over one 32-bit block.
///
/// Each encryption round applies the byte substitution and then the bit
/// permutation with the round's subkey; decryption runs the exact
/// algebraic inverses in reverse round order.
#[derive(Clone)]
pub struct Spn32 {
    subkeys: [u32; ROUNDS],
}

impl Spn32 {
    /// Creates a cipher with subkeys derived from the 32-bit master key.
    pub fn new(master_key: u32) -> Self {
        Spn32 {
            subkeys: derive_subkeys(master_key),
        }
    }

    /// Creates a cipher from the boundary key format (8 hex digits).
    pub fn from_hex_key(key: &str) -> Result<Self, CipherError> {
        parse_hex_key(key).map(Self::new)
    }

    pub fn subkeys(&self) -> [u32; ROUNDS] {
        self.subkeys
    }

    /// Encrypts one 4-byte block, big-endian in and out.
    pub fn encrypt_block(&self, block: [u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let mut value = u32::from_be_bytes(block);
        for &subkey in &self.subkeys {
            value = permute(substitute(value, subkey), subkey);
        }
        value.to_be_bytes()
    }

    /// Decrypts one 4-byte block, strict reverse of [`Spn32::encrypt_block`].
    pub fn decrypt_block(&self, block: [u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let mut value = u32::from_be_bytes(block);
        for &subkey in self.subkeys.iter().rev() {
            value = substitute_inv(permute_inv(value, subkey), subkey);
        }
        value.to_be_bytes()
    }
}

/// Parses the boundary key format: exactly 8 hex digits, case-insensitive.
///
/// The core never substitutes a default key; rejected input is the
/// caller's problem to re-prompt for.
pub fn parse_hex_key(key: &str) -> Result<u32, CipherError> {
    if key.len() != 8 || !key.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CipherError::InvalidKey);
    }
    u32::from_str_radix(key, 16).map_err(|_| CipherError::InvalidKey)
}

impl CipherAlgorithm for Spn32 {
    fn encrypt(&self, data: &[u8]) -> Vec<u8> {
        assert_eq!(data.len() % BLOCK_SIZE, 0, "Data length must be multiple of 4");
        data.chunks_exact(BLOCK_SIZE)
            .flat_map(|chunk| {
                Spn32::encrypt_block(self, chunk.try_into().expect("block must be 4 bytes"))
            })
            .collect()
    }

    fn decrypt(&self, data: &[u8]) -> Vec<u8> {
        assert_eq!(data.len() % BLOCK_SIZE, 0, "Data length must be multiple of 4");
        data.chunks_exact(BLOCK_SIZE)
            .flat_map(|chunk| {
                Spn32::decrypt_block(self, chunk.try_into().expect("block must be 4 bytes"))
            })
            .collect()
    }
}

impl SymmetricCipher for Spn32 {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        let key: [u8; 4] = key.try_into().map_err(|_| CipherError::InvalidKey)?;
        self.subkeys = derive_subkeys(u32::from_be_bytes(key));
        Ok(())
    }
}

impl BlockCipher for Spn32 {
    fn encrypt_block(&self, block: &[u8]) -> Vec<u8> {
        let block: [u8; BLOCK_SIZE] = block.try_into().expect("block must be 4 bytes");
        Spn32::encrypt_block(self, block).to_vec()
    }

    fn decrypt_block(&self, block: &[u8]) -> Vec<u8> {
        let block: [u8; BLOCK_SIZE] = block.try_into().expect("block must be 4 bytes");
        Spn32::decrypt_block(self, block).to_vec()
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }
}
