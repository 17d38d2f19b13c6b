use spn32::crypto::cipher_context::CipherContext;
use spn32::crypto::spn32::Spn32;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let cipher = Spn32::from_hex_key("1a2b3c4d").expect("valid 8-digit hex key");
    let ctx = CipherContext::new(Box::new(cipher));

    let text = "The quick brown fox jumps over the lazy dog.";
    let hex_text = ctx.encrypt_text(text);
    println!("plaintext:  {text}");
    println!("ciphertext: {hex_text}");

    let recovered = ctx
        .decrypt_text(&hex_text)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    println!("recovered:  {recovered}");
    assert_eq!(recovered, text);

    Ok(())
}
