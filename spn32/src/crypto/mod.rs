pub mod cipher_context;
pub mod spn32;
pub mod key_schedule;
pub mod substitution;
pub mod permutation;
pub mod cipher_traits;
pub mod utils;
pub mod cipher_types;
pub mod error;
mod cipher_io;
