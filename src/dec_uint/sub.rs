//! [`DecUint`] subtraction operations.

use crate::{DecUint, Digit};
use core::ops::Sub;
use num_traits::CheckedSub;

impl DecUint {
    /// Compute `self - (rhs + borrow)`, returning the result along with the
    /// final borrow digit.
    ///
    /// When `rhs + borrow` exceeds `self` the chain wraps at the longer
    /// operand's width and the final borrow is one; the wrapped result is
    /// numerically meaningless.
    pub fn borrowing_sub(&self, rhs: &Self, borrow: Digit) -> (Self, Digit) {
        let (digits, borrow) = Self::chain(self, rhs, borrow, |a, b, c| a.sbb(b, c));
        (digits.into(), borrow)
    }

    /// Compute `self - rhs`, discarding the final borrow.
    ///
    /// Callers must guarantee `rhs <= self`; the result is wrapped (and
    /// numerically wrong) otherwise. Use [`CheckedSub::checked_sub`] to
    /// detect the violation instead.
    #[must_use]
    pub fn wrapping_sub(&self, rhs: &Self) -> Self {
        self.borrowing_sub(rhs, Digit::ZERO).0
    }
}

impl Sub<&DecUint> for &DecUint {
    type Output = DecUint;

    fn sub(self, rhs: &DecUint) -> DecUint {
        self.checked_sub(rhs)
            .expect("attempted to subtract with underflow")
    }
}

impl Sub for DecUint {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl Sub<&DecUint> for DecUint {
    type Output = Self;

    fn sub(self, rhs: &Self) -> Self {
        &self - rhs
    }
}

impl Sub<DecUint> for &DecUint {
    type Output = DecUint;

    fn sub(self, rhs: DecUint) -> DecUint {
        self - &rhs
    }
}

impl CheckedSub for DecUint {
    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        let (result, borrow) = self.borrowing_sub(rhs, Digit::ZERO);
        borrow.is_zero().then_some(result)
    }
}
