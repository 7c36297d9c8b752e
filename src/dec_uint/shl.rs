//! [`DecUint`] decimal shifts.

use crate::{DecUint, Digit};
use alloc::vec;

impl DecUint {
    /// Shift left by `shift` decimal digits, i.e. multiply by `10^shift`.
    ///
    /// Zero stays zero regardless of the shift, preserving normalization.
    #[must_use]
    pub fn shl_digits(&self, shift: usize) -> Self {
        if self.is_zero() || shift == 0 {
            return self.clone();
        }

        let mut digits = vec![Digit::ZERO; shift];
        digits.extend_from_slice(self.as_digits());

        Self {
            digits: digits.into_boxed_slice(),
        }
    }
}
