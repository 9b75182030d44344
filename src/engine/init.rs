//! Initializer (P1, §4.3): seeds LFSR/NFSR from key + nonce + constant,
//! mixes in the key twice, then seeds `acc` and `sreg` from the keystream.

use crate::bitreg::BitReg128;
use crate::engine::clock::clock;
use crate::state::CipherState;

/// Run P1 at the given Clock Engine `width` (`{1, 8, 32}`). `width` MUST
/// evenly divide 320 and 64 — true for all three supported widths.
pub(crate) fn initialize(key: [u8; 16], nonce: [u8; 12], width: u32) -> CipherState {
    debug_assert_eq!(320 % width, 0);
    debug_assert_eq!(64 % width, 0);

    let mut nfsr = BitReg128::from_bytes(key);
    let mut lfsr_bytes = [0u8; 16];
    lfsr_bytes[..12].copy_from_slice(&nonce);
    lfsr_bytes[12..].copy_from_slice(&[0xFF, 0xFF, 0xFF, 0x7F]);
    let mut lfsr = BitReg128::from_bytes(lfsr_bytes);

    // §4.1 I1: the constant upper 32 bits are in place; `key_reg` is an
    // untouched snapshot of K used only by the key-mix phase below, since
    // `nfsr` itself is rewritten by the mixing phase's clocks.
    let key_reg = BitReg128::from_bytes(key);

    // Mixing phase (320 clocks): self-referential overlay ov_l = ov_n = y.
    for _ in 0..(320 / width) {
        clock(&mut lfsr, &mut nfsr, width, |y| (y, y));
    }

    // Key-mix phase (64 clocks): ov_l = y ^ k_a, ov_n = y ^ k_b, with k_a
    // drawn from key bits [t+64 .. t+64+width) and k_b from [t .. t+width).
    for chunk in 0..(64 / width) {
        let t = chunk * width;
        let k_a = key_reg.window(t + 64, width);
        let k_b = key_reg.window(t, width);
        clock(&mut lfsr, &mut nfsr, width, |y| (y ^ k_a, y ^ k_b));
    }

    // Accumulator init (64 clocks, zero overlay): y bits land in acc in
    // production order, y_0 as the LSB.
    let mut acc: u64 = 0;
    let mut written = 0u32;
    for _ in 0..(64 / width) {
        let y = clock(&mut lfsr, &mut nfsr, width, |_| (0, 0));
        acc |= y << written;
        written += width;
    }

    // Shift-register init (64 clocks, zero overlay): same pattern into sreg.
    let mut sreg: u64 = 0;
    let mut written = 0u32;
    for _ in 0..(64 / width) {
        let y = clock(&mut lfsr, &mut nfsr, width, |_| (0, 0));
        sreg |= y << written;
        written += width;
    }

    CipherState { lfsr, nfsr, acc, sreg }
}
