//! The single-bit (reference) Clock Engine width. Every tap read and every
//! authenticator update happens one bit at a time — the literal reading of
//! §4.1–§4.8, with no parallel-clocking derivation involved. Slowest of the
//! three, and the width the other two are checked against (§8.1 P6).

use alloc::vec::Vec;

use crate::engine::aead;

const WIDTH: u32 = 1;

/// Encrypt at the width-1 (reference) Clock Engine.
pub fn encrypt(key: [u8; 16], nonce: [u8; 12], ad: &[u8], msg: &[u8]) -> (Vec<u8>, [u8; 8]) {
    aead::encrypt_alloc(key, nonce, ad, msg, WIDTH)
}

/// Decrypt at the width-1 (reference) Clock Engine.
pub fn decrypt(key: [u8; 16], nonce: [u8; 12], ad: &[u8], ciphertext: &[u8], tag: [u8; 8]) -> (Vec<u8>, bool) {
    aead::decrypt_alloc(key, nonce, ad, ciphertext, tag, WIDTH)
}
