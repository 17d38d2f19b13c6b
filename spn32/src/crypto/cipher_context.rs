use crate::crypto::cipher_io::write_all;
use crate::crypto::cipher_traits::BlockCipher;
use crate::crypto::cipher_types::{CipherInput, CipherOutput};
use crate::crypto::error::CipherError;
use crate::crypto::spn32::{BLOCK_SIZE, Spn32};
use crate::crypto::utils::{strip_zero_padding, to_blocks};
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

// Payloads at or above this size are worth fanning out to rayon.
const PARALLEL_THRESHOLD: usize = 64 * 1024;

/// Drives a block cipher over arbitrary byte payloads and hex text.
///
/// Blocks are independent (no chaining), so the codec may process them in
/// parallel; output ordering always matches input ordering.
#[derive(Clone)]
pub struct CipherContext {
    algorithm: Arc<dyn BlockCipher + Send + Sync>,
}

impl CipherContext {
    pub fn new(algorithm: Box<dyn BlockCipher + Send + Sync>) -> Self {
        Self {
            algorithm: Arc::from(algorithm),
        }
    }

    fn map_blocks(&self, data: &[u8], encrypt: bool) -> Vec<u8> {
        let blocks = to_blocks(data);
        let process = |block: &[u8; BLOCK_SIZE]| {
            if encrypt {
                self.algorithm.encrypt_block(block)
            } else {
                self.algorithm.decrypt_block(block)
            }
        };

        if data.len() >= PARALLEL_THRESHOLD {
            blocks.par_iter().flat_map(process).collect()
        } else {
            blocks.iter().flat_map(process).collect()
        }
    }

    /// Encrypts a byte payload, zero-padding the final block to 4 bytes.
    pub fn encrypt_bytes(&self, payload: &[u8]) -> Vec<u8> {
        self.map_blocks(payload, true)
    }

    /// Decrypts a binary ciphertext. The zero padding added by
    /// [`CipherContext::encrypt_bytes`] is not reversed: the caller
    /// receives whole blocks, `4 * ceil(len/4)` bytes.
    pub fn decrypt_bytes(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CipherError> {
        if ciphertext.len() % self.algorithm.block_size() != 0 {
            return Err(CipherError::InvalidCiphertextLength);
        }
        Ok(self.map_blocks(ciphertext, false))
    }

    /// Encrypts text to a flat lowercase hex string, two digits per byte.
    pub fn encrypt_text(&self, plaintext: &str) -> String {
        hex::encode(self.encrypt_bytes(plaintext.as_bytes()))
    }

    /// Decrypts a hex string back to text.
    ///
    /// If the decrypted bytes are not valid UTF-8, each byte is decoded
    /// as a single Latin-1 character instead of failing. A wrong key
    /// therefore yields garbled text rather than an error; use
    /// [`CipherContext::decrypt_text_strict`] to surface that case.
    pub fn decrypt_text(&self, hex_text: &str) -> Result<String, CipherError> {
        let plaintext = self.decrypt_text_bytes(hex_text)?;
        Ok(match String::from_utf8(plaintext) {
            Ok(text) => text,
            Err(err) => err.into_bytes().iter().map(|&b| b as char).collect(),
        })
    }

    /// Like [`CipherContext::decrypt_text`], but a failed UTF-8 decode is
    /// reported as [`CipherError::DecodeError`] instead of the lossy
    /// Latin-1 fallback.
    pub fn decrypt_text_strict(&self, hex_text: &str) -> Result<String, CipherError> {
        let plaintext = self.decrypt_text_bytes(hex_text)?;
        String::from_utf8(plaintext).map_err(|_| CipherError::DecodeError)
    }

    fn decrypt_text_bytes(&self, hex_text: &str) -> Result<Vec<u8>, CipherError> {
        let ciphertext =
            hex::decode(hex_text).map_err(|_| CipherError::InvalidCiphertextFormat)?;
        let mut plaintext = self.decrypt_bytes(&ciphertext)?;
        strip_zero_padding(&mut plaintext);
        Ok(plaintext)
    }

    fn run_file_task<F, T>(task: F) -> io::Result<T>
    where
        F: FnOnce() -> io::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(tokio::task::spawn_blocking(task))
        })
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?
    }

    /// Encrypts bytes or a whole file in binary mode.
    pub async fn encrypt(
        &self,
        input: CipherInput,
        output: &mut CipherOutput,
    ) -> io::Result<()> {
        match input {
            CipherInput::Bytes(data) => {
                let encrypted = self.encrypt_bytes(&data);
                write_all(output, &encrypted)
            }
            CipherInput::File(input_path) => {
                let this = self.clone();
                let encrypted = Self::run_file_task(move || {
                    let data = fs::read(input_path)?;
                    Ok(this.encrypt_bytes(&data))
                })?;
                write_all(output, &encrypted)
            }
        }
    }

    /// Decrypts bytes or a whole file in binary mode.
    pub async fn decrypt(
        &self,
        input: CipherInput,
        output: &mut CipherOutput,
    ) -> io::Result<()> {
        match input {
            CipherInput::Bytes(data) => {
                let decrypted = self.decrypt_bytes(&data).map_err(into_io)?;
                write_all(output, &decrypted)
            }
            CipherInput::File(input_path) => {
                let this = self.clone();
                let decrypted = Self::run_file_task(move || {
                    let data = fs::read(input_path)?;
                    this.decrypt_bytes(&data).map_err(into_io)
                })?;
                write_all(output, &decrypted)
            }
        }
    }

    /// Reads a UTF-8 text file and writes its encryption as a flat hex
    /// string, no header and no delimiters.
    pub async fn encrypt_text_file(
        &self,
        input_path: PathBuf,
        output_path: PathBuf,
    ) -> io::Result<()> {
        let this = self.clone();
        Self::run_file_task(move || {
            let plaintext = fs::read_to_string(input_path)?;
            fs::write(output_path, this.encrypt_text(&plaintext))
        })
    }

    /// Reads a hex-text file and writes the recovered plaintext.
    pub async fn decrypt_text_file(
        &self,
        input_path: PathBuf,
        output_path: PathBuf,
    ) -> io::Result<()> {
        let this = self.clone();
        Self::run_file_task(move || {
            let hex_text = fs::read_to_string(input_path)?;
            let plaintext = this.decrypt_text(hex_text.trim()).map_err(into_io)?;
            fs::write(output_path, plaintext)
        })
    }
}

fn into_io(err: CipherError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, err)
}

/// One-shot binary encryption with a fresh key schedule.
pub fn encrypt_bytes(payload: &[u8], key: u32) -> Vec<u8> {
    CipherContext::new(Box::new(Spn32::new(key))).encrypt_bytes(payload)
}

/// One-shot binary decryption; fails unless the length is a multiple of 4.
pub fn decrypt_bytes(ciphertext: &[u8], key: u32) -> Result<Vec<u8>, CipherError> {
    CipherContext::new(Box::new(Spn32::new(key))).decrypt_bytes(ciphertext)
}

/// One-shot text encryption to lowercase hex.
pub fn encrypt_text(plaintext: &str, key: u32) -> String {
    CipherContext::new(Box::new(Spn32::new(key))).encrypt_text(plaintext)
}

/// One-shot text decryption with the Latin-1 fallback.
pub fn decrypt_text(hex_text: &str, key: u32) -> Result<String, CipherError> {
    CipherContext::new(Box::new(Spn32::new(key))).decrypt_text(hex_text)
}
