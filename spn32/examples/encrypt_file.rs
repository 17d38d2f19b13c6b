use spn32::crypto::cipher_context::CipherContext;
use spn32::crypto::cipher_types::{CipherInput, CipherOutput};
use spn32::crypto::spn32::Spn32;
use std::fs;

fn random_key() -> u32 {
    use rand::Rng;
    rand::rng().random()
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let dir = std::env::temp_dir().join("spn32_demo");
    fs::create_dir_all(&dir)?;

    let input_path = dir.join("sample.bin");
    let encrypted_path = dir.join("sample.enc");
    fs::write(&input_path, b"binary demo payload, length not divisible by four")?;

    let ctx = CipherContext::new(Box::new(Spn32::new(random_key())));

    ctx.encrypt(
        CipherInput::File(input_path.clone()),
        &mut CipherOutput::File(encrypted_path.clone()),
    )
    .await?;

    let mut decrypted_output = CipherOutput::Buffer(Box::new(Vec::new()));
    ctx.decrypt(CipherInput::File(encrypted_path), &mut decrypted_output)
        .await?;
    let decrypted = match decrypted_output {
        CipherOutput::Buffer(buf) => *buf,
        _ => unreachable!(),
    };

    let original = fs::read(&input_path)?;
    assert_eq!(&decrypted[..original.len()], &original[..]);
    println!("file roundtrip OK ({} bytes)", original.len());

    Ok(())
}
