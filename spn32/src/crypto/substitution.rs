//! Key-dependent byte substitution stage.
//!
//! The S-box is addition mod 256 with the positionally aligned key byte,
//! which is trivially invertible for every byte/key pair.

/// Substitutes one byte under one key byte.
pub fn sbox(byte: u8, key_byte: u8) -> u8 {
    byte.wrapping_add(key_byte)
}

/// Inverse of [`sbox`].
pub fn sbox_inv(byte: u8, key_byte: u8) -> u8 {
    byte.wrapping_sub(key_byte)
}

/// Applies the S-box to each of the 4 block bytes, most significant first.
pub fn substitute(block: u32, subkey: u32) -> u32 {
    let b = block.to_be_bytes();
    let k = subkey.to_be_bytes();
    u32::from_be_bytes([
        sbox(b[0], k[0]),
        sbox(b[1], k[1]),
        sbox(b[2], k[2]),
        sbox(b[3], k[3]),
    ])
}

/// Inverse of [`substitute`] for the same subkey.
pub fn substitute_inv(block: u32, subkey: u32) -> u32 {
    let b = block.to_be_bytes();
    let k = subkey.to_be_bytes();
    u32::from_be_bytes([
        sbox_inv(b[0], k[0]),
        sbox_inv(b[1], k[1]),
        sbox_inv(b[2], k[2]),
        sbox_inv(b[3], k[3]),
    ])
}
