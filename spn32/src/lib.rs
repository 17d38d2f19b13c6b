//! A toy substitution-permutation cipher on 32-bit blocks, with a
//! block-stream codec for byte payloads and hex-text files.
//!
//! Not a secure cipher: the key space and diffusion are deliberately
//! minimal. It exists for studying SPN round structure, not for
//! protecting data.

pub mod crypto;
