/// Number of cipher rounds; one subkey per round.
pub const ROUNDS: usize = 3;

/// Derives the round subkeys from the 32-bit master key.
///
/// Each subkey mixes two left rotations of the key:
/// `subkey[i] = rotl(key, i+1) ^ rotl(key, 3*(i+1))`. The two rotation
/// amounts never coincide mod 32, so flipping one key bit always flips
/// two distinct bits in every subkey.
pub fn derive_subkeys(key: u32) -> [u32; ROUNDS] {
    let mut subkeys = [0u32; ROUNDS];
    for (i, subkey) in subkeys.iter_mut().enumerate() {
        let shift = i as u32 + 1;
        *subkey = key.rotate_left(shift) ^ key.rotate_left(shift * 3);
    }
    subkeys
}
