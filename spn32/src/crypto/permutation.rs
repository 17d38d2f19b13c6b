//! Key-dependent bit permutation stage.
//!
//! Bit positions are indexed LSB-first: position `i` holds
//! `(block >> i) & 1`. The forward map sends position `i` to
//! `(multiplier * i + addend) % 32`. The multiplier is forced odd, so it
//! is a unit mod 32 and the map is a bijection on the 32 positions.

/// Extracts the (multiplier, addend) pair from a subkey.
fn coefficients(subkey: u32) -> (u32, u32) {
    let multiplier = (subkey & 0x1F) | 1;
    let addend = (subkey >> 5) & 0x1F;
    (multiplier, addend)
}

/// Finds the multiplicative inverse of an odd multiplier mod 32.
fn inverse_multiplier(multiplier: u32) -> u32 {
    (1..32)
        .step_by(2)
        .find(|&x| (multiplier * x) % 32 == 1)
        .unwrap_or(1)
}

/// Permutes the 32 bits of `block` under `subkey`.
pub fn permute(block: u32, subkey: u32) -> u32 {
    let (multiplier, addend) = coefficients(subkey);
    let mut out = 0u32;
    for i in 0..32u32 {
        let bit = (block >> i) & 1;
        out |= bit << ((multiplier * i + addend) % 32);
    }
    out
}

/// Inverse of [`permute`] for the same subkey.
pub fn permute_inv(block: u32, subkey: u32) -> u32 {
    let (multiplier, addend) = coefficients(subkey);
    let inverse = inverse_multiplier(multiplier);
    let mut out = 0u32;
    for j in 0..32u32 {
        let bit = (block >> j) & 1;
        out |= bit << ((inverse * ((j + 32 - addend) % 32)) % 32);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_multiplier_all_odd_values() {
        for multiplier in (1..32u32).step_by(2) {
            let inverse = inverse_multiplier(multiplier);
            assert_eq!((multiplier * inverse) % 32, 1, "multiplier {}", multiplier);
        }
    }

    #[test]
    fn test_permute_roundtrip_every_coefficient_pair() {
        // The low 10 subkey bits fully determine the permutation.
        let samples = [0x00000000u32, 0xFFFFFFFF, 0x80000001, 0x12345678];
        for subkey in 0..1024u32 {
            for &block in &samples {
                assert_eq!(permute_inv(permute(block, subkey), subkey), block);
            }
        }
    }

    #[test]
    fn test_permute_preserves_bit_count() {
        for &subkey in &[0x0u32, 0x3FF, 0xE50F9AF2, 0x8721785C] {
            for &block in &[0x1u32, 0xFF00FF00, 0xFFFFFFFF, 0x00010000] {
                assert_eq!(
                    permute(block, subkey).count_ones(),
                    block.count_ones()
                );
            }
        }
    }

    #[test]
    fn test_permute_is_bijective_on_single_bits() {
        // Distinct source positions must land on distinct targets.
        for &subkey in &[0x7u32, 0x1A5, 0x3FF] {
            let mut seen = 0u32;
            for i in 0..32 {
                let target = permute(1 << i, subkey);
                assert_eq!(target.count_ones(), 1);
                assert_eq!(seen & target, 0);
                seen |= target;
            }
            assert_eq!(seen, u32::MAX);
        }
    }
}
