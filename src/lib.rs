//! Grain-128AEADv2: a lightweight stream-cipher authenticated-encryption
//! scheme (NIST LWC finalist).
//!
//! ```
//! let key = [0u8; 16];
//! let nonce = [0u8; 12];
//! let (ciphertext, tag) = grain128_aead::encrypt(key, nonce, b"", b"hello");
//! let (plaintext, verified) = grain128_aead::decrypt(key, nonce, b"", &ciphertext, tag);
//! assert!(verified);
//! assert_eq!(plaintext, b"hello");
//! ```
//!
//! The cipher couples a 128-bit LFSR and a 128-bit NFSR through a
//! nonlinear pre-output generator, with a 64-bit accumulator/shift-register
//! pair doing double duty as keystream source and authenticator. See the
//! module-level docs under `kernels` for the three interchangeable
//! Clock-Engine widths this crate carries.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::vec::Vec;

mod bitreg;
mod der;
mod engine;
#[doc(hidden)]
pub mod kernels;
mod state;
mod types;

pub use engine::dispatcher::active_width_name;
pub use types::VerificationError;

/// Encrypt `msg` under `key` and `nonce`, authenticating `ad` alongside it.
///
/// Uses whichever Clock Engine width this build compiled in (see
/// [`active_width_name`]); all widths produce bit-identical output.
#[must_use]
pub fn encrypt(key: [u8; 16], nonce: [u8; 12], ad: &[u8], msg: &[u8]) -> (Vec<u8>, [u8; 8]) {
    engine::aead::encrypt_alloc(key, nonce, ad, msg, engine::dispatcher::active_width())
}

/// Decrypt `ciphertext` under `key` and `nonce`, verifying it against `tag`
/// and `ad`.
///
/// On success, returns the recovered plaintext and `true`. On
/// authentication failure, returns a zeroed buffer of `ciphertext`'s length
/// and `false` — never a partial result.
#[must_use]
pub fn decrypt(key: [u8; 16], nonce: [u8; 12], ad: &[u8], ciphertext: &[u8], tag: [u8; 8]) -> (Vec<u8>, bool) {
    engine::aead::decrypt_alloc(key, nonce, ad, ciphertext, tag, engine::dispatcher::active_width())
}

/// `Result`-flavored [`decrypt`], for callers who prefer propagating
/// authentication failure through `?` rather than matching a `bool`.
///
/// # Errors
///
/// Returns [`VerificationError`] if `tag` does not match; the returned
/// error carries no further detail, matching §7's narrow error taxonomy.
pub fn decrypt_checked(
    key: [u8; 16],
    nonce: [u8; 12],
    ad: &[u8],
    ciphertext: &[u8],
    tag: [u8; 8],
) -> Result<Vec<u8>, VerificationError> {
    let (plaintext, verified) = decrypt(key, nonce, ad, ciphertext, tag);
    if verified {
        Ok(plaintext)
    } else {
        Err(VerificationError)
    }
}

/// In-place `encrypt`: `buf` holds the plaintext on entry and the
/// ciphertext on return (§5 "Aliasing rules" — the caller may reuse the
/// same buffer it encrypted from elsewhere, since this never allocates a
/// second copy). Returns the tag.
#[must_use]
pub fn encrypt_in_place(key: [u8; 16], nonce: [u8; 12], ad: &[u8], buf: &mut [u8]) -> [u8; 8] {
    engine::aead::encrypt_in_place(key, nonce, ad, buf, engine::dispatcher::active_width())
}

/// In-place `decrypt`: `buf` holds the ciphertext on entry; on return it
/// holds the plaintext (verified) or all-zero bytes (verification failed).
/// Returns `verified`.
#[must_use]
pub fn decrypt_in_place(key: [u8; 16], nonce: [u8; 12], ad: &[u8], buf: &mut [u8], tag: [u8; 8]) -> bool {
    engine::aead::decrypt_in_place(key, nonce, ad, buf, tag, engine::dispatcher::active_width())
}
