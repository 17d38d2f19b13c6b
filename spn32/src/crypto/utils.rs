use crate::crypto::spn32::BLOCK_SIZE;

/// Zero-fills a short chunk on the right up to the 4-byte block width.
pub fn pad_block(chunk: &[u8]) -> [u8; BLOCK_SIZE] {
    let mut block = [0u8; BLOCK_SIZE];
    block[..chunk.len()].copy_from_slice(chunk);
    block
}

/// Splits a payload into 4-byte blocks, zero-padding the final one.
pub fn to_blocks(data: &[u8]) -> Vec<[u8; BLOCK_SIZE]> {
    data.chunks(BLOCK_SIZE).map(pad_block).collect()
}

/// Strips trailing zero bytes from the final block of a decrypted
/// payload. Interior blocks are never touched, so at most 4 bytes go.
pub fn strip_zero_padding(data: &mut Vec<u8>) {
    let boundary = data.len().saturating_sub(BLOCK_SIZE);
    while data.len() > boundary && data.last() == Some(&0u8) {
        data.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_block_fills_with_zeros() {
        assert_eq!(pad_block(b"ab"), [b'a', b'b', 0, 0]);
        assert_eq!(pad_block(b"abcd"), [b'a', b'b', b'c', b'd']);
        assert_eq!(pad_block(b""), [0, 0, 0, 0]);
    }

    #[test]
    fn test_to_blocks_pads_only_final_block() {
        let blocks = to_blocks(b"abcdef");
        assert_eq!(blocks, vec![[b'a', b'b', b'c', b'd'], [b'e', b'f', 0, 0]]);
        assert!(to_blocks(b"").is_empty());
    }

    #[test]
    fn test_strip_zero_padding_last_block_only() {
        let mut data = vec![1, 2, 0, 0, 5, 0, 0, 0];
        strip_zero_padding(&mut data);
        assert_eq!(data, vec![1, 2, 0, 0, 5]);
    }

    #[test]
    fn test_strip_zero_padding_stops_at_block_boundary() {
        // A fully zero final block goes, the zero tail of the previous
        // block stays.
        let mut data = vec![0, 0, 0, 0, 0, 0, 0, 0];
        strip_zero_padding(&mut data);
        assert_eq!(data, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_strip_zero_padding_short_input() {
        let mut data = vec![0, 0];
        strip_zero_padding(&mut data);
        assert!(data.is_empty());
    }
}
