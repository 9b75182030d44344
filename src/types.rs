//! Public error type for the `Result`-based decrypt wrapper.

use core::fmt;

/// Returned by [`crate::decrypt_checked`] when tag verification fails.
///
/// The only expected runtime failure in this cipher (§7.1): there is no
/// partial success, and the plaintext buffer has already been zeroized by
/// the time this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationError;

impl fmt::Display for VerificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Grain-128AEADv2 tag verification failed")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for VerificationError {}
