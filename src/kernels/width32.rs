//! The 32-bit parallel Clock Engine width: one clock call advances the
//! cipher by a full word's worth of taps at once (§4.2). The default width
//! compiled in (`engine::dispatcher::active_width`).

use alloc::vec::Vec;

use crate::engine::aead;

const WIDTH: u32 = 32;

/// Encrypt at the width-32 parallel Clock Engine.
pub fn encrypt(key: [u8; 16], nonce: [u8; 12], ad: &[u8], msg: &[u8]) -> (Vec<u8>, [u8; 8]) {
    aead::encrypt_alloc(key, nonce, ad, msg, WIDTH)
}

/// Decrypt at the width-32 parallel Clock Engine.
pub fn decrypt(key: [u8; 16], nonce: [u8; 12], ad: &[u8], ciphertext: &[u8], tag: [u8; 8]) -> (Vec<u8>, bool) {
    aead::decrypt_alloc(key, nonce, ad, ciphertext, tag, WIDTH)
}
