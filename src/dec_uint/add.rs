//! [`DecUint`] addition operations.

use crate::{DecUint, Digit};
use core::ops::Add;
use num_traits::CheckedAdd;

impl DecUint {
    /// Compute `self + rhs + carry`, returning the result truncated to the
    /// longer operand's width along with the final carry digit.
    pub fn carrying_add(&self, rhs: &Self, carry: Digit) -> (Self, Digit) {
        let (digits, carry) = Self::chain(self, rhs, carry, |a, b, c| a.adc(b, c));
        (digits.into(), carry)
    }
}

impl Add<&DecUint> for &DecUint {
    type Output = DecUint;

    fn add(self, rhs: &DecUint) -> DecUint {
        // Unbounded: a final carry grows the result by one digit.
        let (mut digits, carry) = DecUint::chain(self, rhs, Digit::ZERO, |a, b, c| a.adc(b, c));
        if !carry.is_zero() {
            digits.push(carry);
        }
        digits.into()
    }
}

impl Add for DecUint {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl Add<&DecUint> for DecUint {
    type Output = Self;

    fn add(self, rhs: &Self) -> Self {
        &self + rhs
    }
}

impl Add<DecUint> for &DecUint {
    type Output = DecUint;

    fn add(self, rhs: DecUint) -> DecUint {
        self + &rhs
    }
}

impl CheckedAdd for DecUint {
    /// Addition of unbounded values cannot overflow; this always returns
    /// `Some`.
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        Some(self + rhs)
    }
}
