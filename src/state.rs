//! `CipherState`: the complete runtime state driven through P1–P5 (§3).

use zeroize::Zeroize;

use crate::bitreg::BitReg128;

/// The cipher's complete runtime state: LFSR, NFSR, accumulator, shift
/// register. Constructed fresh per `encrypt`/`decrypt` call and never
/// reused (§3 "Lifecycle").
pub(crate) struct CipherState {
    pub(crate) lfsr: BitReg128,
    pub(crate) nfsr: BitReg128,
    pub(crate) acc: u64,
    pub(crate) sreg: u64,
}

impl Drop for CipherState {
    fn drop(&mut self) {
        self.lfsr.zeroize();
        self.nfsr.zeroize();
        self.acc.zeroize();
        self.sreg.zeroize();
    }
}
