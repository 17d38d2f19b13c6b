use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum CipherInput {
    Bytes(Vec<u8>),
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub enum CipherOutput {
    Buffer(Box<Vec<u8>>),
    File(PathBuf),
}
