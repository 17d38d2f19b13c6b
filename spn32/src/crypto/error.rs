//! Error types for the spn32 crate.

use std::fmt;

/// Errors produced by the cipher core and the stream codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Key string is not exactly 8 hexadecimal digits.
    InvalidKey,
    /// Ciphertext text is not valid hexadecimal.
    InvalidCiphertextFormat,
    /// Ciphertext length is not a multiple of the 4-byte block size.
    InvalidCiphertextLength,
    /// Decrypted bytes are not valid UTF-8 (strict text mode only).
    DecodeError,
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherError::InvalidKey => {
                write!(f, "Key must be 8 hexadecimal digits")
            }
            CipherError::InvalidCiphertextFormat => {
                write!(f, "Ciphertext contains non-hexadecimal characters")
            }
            CipherError::InvalidCiphertextLength => {
                write!(f, "Ciphertext length is not a multiple of the block size")
            }
            CipherError::DecodeError => {
                write!(f, "Decrypted bytes are not valid UTF-8")
            }
        }
    }
}

impl std::error::Error for CipherError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_key() {
        let err = CipherError::InvalidKey;
        assert_eq!(format!("{}", err), "Key must be 8 hexadecimal digits");
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(
            CipherError::InvalidCiphertextLength,
            CipherError::InvalidCiphertextLength
        );
        assert_ne!(
            CipherError::InvalidCiphertextFormat,
            CipherError::DecodeError
        );
    }
}
