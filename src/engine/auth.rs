//! Authenticator absorption (§4.4) and the Encrypt/Decrypt Core (§4.6),
//! generic over Clock Engine width. Every AD byte, message byte, and the
//! padding byte flows through [`absorb_bytes`] or [`crypt_bytes`] below;
//! `kernels::width{1,8,32}` only pick which `width` those take.

use crate::engine::clock::clock;
use crate::engine::deinterleave::deinterleave;
use crate::state::CipherState;

/// One authenticator step: two zero-overlay clocks of `width` bits each,
/// deinterleaved into a `width`-bit keystream slice and `width`-bit
/// authentication slice (§4.4 "Keystream slicing").
fn step(state: &mut CipherState, width: u32) -> (u64, u64) {
    let first = clock(&mut state.lfsr, &mut state.nfsr, width, |_| (0, 0));
    let second = clock(&mut state.lfsr, &mut state.nfsr, width, |_| (0, 0));
    let raw = first | (second << width);
    deinterleave(raw, width)
}

/// Absorb `width` message bits (`m`, bit 0 first) keyed by the matching
/// `width`-bit authentication slice `ka`, one single-bit update at a time
/// (§4.4 "Per-byte/per-word parallel form" — a pure unroll, never a
/// vectorized shortcut).
fn absorb_unit(state: &mut CipherState, width: u32, m: u64, ka: u64) {
    for j in 0..width {
        let m_bit = (m >> j) & 1;
        let ka_bit = (ka >> j) & 1;
        let broadcast = 0u64.wrapping_sub(m_bit);
        state.acc ^= broadcast & state.sreg;
        state.sreg = (state.sreg >> 1) | (ka_bit << 63);
    }
}

/// Absorb `data` into the authenticator (AD bytes, DER length bytes, or the
/// padding byte), discarding the keystream slice each step also produces.
/// `width` of 32 falls back to 8-bit steps for a tail not a multiple of 4
/// bytes, so callers may pick any supported width regardless of `data`'s
/// length.
pub(crate) fn absorb_bytes(state: &mut CipherState, width: u32, data: &[u8]) {
    match width {
        32 => {
            let mut chunks = data.chunks_exact(4);
            for c in chunks.by_ref() {
                let m = u32::from_le_bytes([c[0], c[1], c[2], c[3]]);
                let (_, ka) = step(state, 32);
                absorb_unit(state, 32, u64::from(m), ka);
            }
            absorb_bytes(state, 8, chunks.remainder());
        }
        8 => {
            for &b in data {
                let (_, ka) = step(state, 8);
                absorb_unit(state, 8, u64::from(b), ka);
            }
        }
        1 => {
            for &b in data {
                for j in 0..8u32 {
                    let bit = u64::from((b >> j) & 1);
                    let (_, ka) = step(state, 1);
                    absorb_unit(state, 1, bit, ka);
                }
            }
        }
        _ => unreachable!("unsupported clock width"),
    }
}

/// The Encrypt/Decrypt Core (§4.6): XOR `input` with the keystream into
/// `output`, feeding the plaintext byte (pre-encryption when `encrypting`,
/// post-decryption otherwise) into the authenticator. Same width-32
/// tail fallback as [`absorb_bytes`].
pub(crate) fn crypt_bytes(state: &mut CipherState, width: u32, input: &[u8], output: &mut [u8], encrypting: bool) {
    debug_assert_eq!(input.len(), output.len());
    match width {
        32 => {
            let mut in_chunks = input.chunks_exact(4);
            let mut out_chunks = output.chunks_exact_mut(4);
            for (ic, oc) in in_chunks.by_ref().zip(out_chunks.by_ref()) {
                let in_word = u32::from_le_bytes([ic[0], ic[1], ic[2], ic[3]]);
                let (ks, ka) = step(state, 32);
                let out_word = in_word ^ (ks as u32);
                oc.copy_from_slice(&out_word.to_le_bytes());
                let pt_word = if encrypting { in_word } else { out_word };
                absorb_unit(state, 32, u64::from(pt_word), ka);
            }
            crypt_bytes(state, 8, in_chunks.remainder(), out_chunks.into_remainder(), encrypting);
        }
        8 => {
            for (i, o) in input.iter().zip(output.iter_mut()) {
                let (ks, ka) = step(state, 8);
                let out_byte = i ^ (ks as u8);
                *o = out_byte;
                let pt_byte = if encrypting { *i } else { out_byte };
                absorb_unit(state, 8, u64::from(pt_byte), ka);
            }
        }
        1 => {
            for (i, o) in input.iter().zip(output.iter_mut()) {
                let mut out_byte = 0u8;
                for j in 0..8u32 {
                    let in_bit = u64::from((i >> j) & 1);
                    let (ks, ka) = step(state, 1);
                    let out_bit = (in_bit ^ ks) & 1;
                    out_byte |= (out_bit as u8) << j;
                    let pt_bit = if encrypting { in_bit } else { out_bit };
                    absorb_unit(state, 1, pt_bit, ka);
                }
                *o = out_byte;
            }
        }
        _ => unreachable!("unsupported clock width"),
    }
}
