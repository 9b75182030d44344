//! The AEAD mode driver: ties the Initializer (P1), AD Absorber (P2),
//! Encrypt/Decrypt Core (P3), Padding Absorber (P4), and Tag Emit/Verify
//! (P5) together into the two public operations, generic over Clock Engine
//! `width`. `kernels::width{1,8,32}` each just pin `width` and forward here.

use alloc::vec;
use alloc::vec::Vec;

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::der;
use crate::engine::auth::{absorb_bytes, crypt_bytes};
use crate::engine::init::initialize;

/// P1 + P2: build a freshly-initialized `CipherState` and absorb the DER
/// length prefix followed by `ad`.
fn init_and_absorb_ad(key: [u8; 16], nonce: [u8; 12], ad: &[u8], width: u32) -> crate::state::CipherState {
    let mut state = initialize(key, nonce, width);
    let der_len = der::encode(ad.len() as u64);
    absorb_bytes(&mut state, width, der_len.as_slice());
    absorb_bytes(&mut state, width, ad);
    state
}

/// P4: absorb the single padding byte (§4.7 — only its LSB carries a `1`
/// bit; the upper seven zero bits are absorbed too, contributing nothing).
fn absorb_padding(state: &mut crate::state::CipherState, width: u32) {
    absorb_bytes(state, width, &[0x01]);
}

/// `encrypt`, operating on a caller-owned buffer in place (§5 "Aliasing
/// rules" — `plaintext`/`ciphertext` may be the same buffer). `buf` holds
/// the plaintext on entry and the ciphertext on return. Returns the tag.
pub(crate) fn encrypt_in_place(key: [u8; 16], nonce: [u8; 12], ad: &[u8], buf: &mut [u8], width: u32) -> [u8; 8] {
    let mut state = init_and_absorb_ad(key, nonce, ad, width);
    crypt_in_place(&mut state, width, buf, true);
    absorb_padding(&mut state, width);
    state.acc.to_le_bytes()
}

/// `decrypt`, operating on a caller-owned buffer in place. `buf` holds the
/// ciphertext on entry; on return it holds the plaintext (verified) or all
/// zero bytes (verification failed). Returns `verified`.
pub(crate) fn decrypt_in_place(
    key: [u8; 16],
    nonce: [u8; 12],
    ad: &[u8],
    buf: &mut [u8],
    tag: [u8; 8],
    width: u32,
) -> bool {
    let mut state = init_and_absorb_ad(key, nonce, ad, width);
    crypt_in_place(&mut state, width, buf, false);
    absorb_padding(&mut state, width);

    // §4.8: constant-time comparison, single branch on the final verdict.
    // `ct_eq` returns a `subtle::Choice`, not a `bool` — there is no byte-wise
    // early return to write here even by accident; §7's no-per-byte-branching
    // requirement is `subtle`'s own contract rather than something this call
    // site could violate. The `bool` conversion below is the only branch,
    // and it branches once on the aggregate verdict.
    let computed = state.acc.to_le_bytes();
    let choice: subtle::Choice = computed.ct_eq(&tag);
    let verified: bool = choice.into();
    if !verified {
        buf.zeroize();
    }
    verified
}

/// Allocating `encrypt`: copies `msg` into a fresh buffer and encrypts it
/// in place.
pub(crate) fn encrypt_alloc(key: [u8; 16], nonce: [u8; 12], ad: &[u8], msg: &[u8], width: u32) -> (Vec<u8>, [u8; 8]) {
    let mut buf = vec![0u8; msg.len()];
    buf.copy_from_slice(msg);
    let tag = encrypt_in_place(key, nonce, ad, &mut buf, width);
    (buf, tag)
}

/// Allocating `decrypt`: copies `ciphertext` into a fresh buffer and
/// decrypts it in place.
pub(crate) fn decrypt_alloc(
    key: [u8; 16],
    nonce: [u8; 12],
    ad: &[u8],
    ciphertext: &[u8],
    tag: [u8; 8],
    width: u32,
) -> (Vec<u8>, bool) {
    let mut buf = vec![0u8; ciphertext.len()];
    buf.copy_from_slice(ciphertext);
    let verified = decrypt_in_place(key, nonce, ad, &mut buf, tag, width);
    (buf, verified)
}

/// P3 on a single caller-owned buffer: reads each chunk's current value
/// before overwriting it, so operating in place is exactly as safe as
/// operating out of place (§5).
fn crypt_in_place(state: &mut crate::state::CipherState, width: u32, buf: &mut [u8], encrypting: bool) {
    // `crypt_bytes` takes disjoint input/output slices; here there is only
    // one buffer, so each chunk is staged through a small owned scratch
    // value and written back before the next chunk is touched.
    match width {
        32 => {
            let mut chunks = buf.chunks_exact_mut(4);
            for c in chunks.by_ref() {
                let input = [c[0], c[1], c[2], c[3]];
                let mut output = [0u8; 4];
                crypt_bytes(state, 32, &input, &mut output, encrypting);
                c.copy_from_slice(&output);
            }
            crypt_in_place_tail(state, 8, chunks.into_remainder(), encrypting);
        }
        8 => crypt_in_place_tail(state, 8, buf, encrypting),
        1 => crypt_in_place_tail(state, 1, buf, encrypting),
        _ => unreachable!("unsupported clock width"),
    }
}

fn crypt_in_place_tail(state: &mut crate::state::CipherState, width: u32, buf: &mut [u8], encrypting: bool) {
    for b in buf {
        let input = [*b];
        let mut output = [0u8; 1];
        crypt_bytes(state, width, &input, &mut output, encrypting);
        *b = output[0];
    }
}

#[cfg(test)]
mod tests {
    use subtle::{Choice, ConstantTimeEq};

    // Static assertion: this only compiles as long as `ct_eq` returns
    // `Choice` rather than `bool` (§7), so a future edit that swaps it for a
    // byte-wise `==` loop fails to build instead of silently reintroducing a
    // timing side channel.
    #[test]
    fn tag_comparison_type_is_constant_time_choice() {
        fn assert_returns_choice(a: &[u8; 8], b: &[u8; 8]) -> Choice {
            a.ct_eq(b)
        }
        let choice = assert_returns_choice(&[0u8; 8], &[0u8; 8]);
        assert!(bool::from(choice));
        let choice = assert_returns_choice(&[0u8; 8], &[1u8; 8]);
        assert!(!bool::from(choice));
    }
}
