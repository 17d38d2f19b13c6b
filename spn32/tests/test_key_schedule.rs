use spn32::crypto::key_schedule::{ROUNDS, derive_subkeys};

#[test]
fn test_golden_subkeys() {
    let subkeys = derive_subkeys(0x1a2b3c4d);
    assert_eq!(subkeys, [0xe50f_9af2, 0xe263_e272, 0x8721_785c]);
}

#[test]
fn test_derivation_is_deterministic() {
    assert_eq!(derive_subkeys(0xdeadbeef), derive_subkeys(0xdeadbeef));
}

#[test]
fn test_round_count() {
    assert_eq!(derive_subkeys(0).len(), ROUNDS);
    assert_eq!(ROUNDS, 3);
}

#[test]
fn test_single_bit_key_flip_disturbs_every_subkey() {
    // Structural avalanche check: the two rotation amounts of each
    // subkey differ mod 32, so one flipped key bit flips two subkey bits.
    let keys = [0x00000000u32, 0x1a2b3c4d, 0xffffffff, 0x80000001];
    for &key in &keys {
        let base = derive_subkeys(key);
        for bit in 0..32 {
            let flipped = derive_subkeys(key ^ (1 << bit));
            for round in 0..ROUNDS {
                assert_ne!(
                    base[round], flipped[round],
                    "key {:#010x} bit {} round {}",
                    key, bit, round
                );
            }
        }
    }
}

#[test]
fn test_zero_key_yields_zero_subkeys() {
    // Degenerate but well-defined: rotations of zero XOR to zero.
    assert_eq!(derive_subkeys(0), [0, 0, 0]);
}
