//! [`DecUint`] multiplication operations.

use crate::{DecUint, Digit};
use alloc::{vec, vec::Vec};
use core::ops::Mul;
use num_traits::CheckedMul;

impl DecUint {
    /// Multiply `self` by `rhs` with the schoolbook method.
    ///
    /// Performs `ndigits(self) · ndigits(rhs)` digit products accumulated
    /// into a buffer of `ndigits(self) + ndigits(rhs)` digits.
    #[must_use]
    pub fn mul(&self, rhs: &Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }

        let mut digits = vec![Digit::ZERO; self.ndigits() + rhs.ndigits()];

        for (i, &a) in self.as_digits().iter().enumerate() {
            let mut carry = Digit::ZERO;
            for (j, &b) in rhs.as_digits().iter().enumerate() {
                let (digit, c) = digits[i + j].mac(a, b, carry);
                digits[i + j] = digit;
                carry = c;
            }
            // The slot above this row's last product has not been written
            // yet, so the row carry lands there directly.
            digits[i + rhs.ndigits()] = carry;
        }

        digits.into()
    }

    /// Scale `self` by a single digit.
    #[must_use]
    pub fn mul_digit(&self, rhs: Digit) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }

        let mut digits = Vec::with_capacity(self.ndigits() + 1);
        let mut carry = Digit::ZERO;
        for &a in self.as_digits() {
            let (digit, c) = Digit::ZERO.mac(a, rhs, carry);
            digits.push(digit);
            carry = c;
        }
        digits.push(carry);

        digits.into()
    }

    /// Multiply `self` by itself.
    #[must_use]
    pub fn square(&self) -> Self {
        self.mul(self)
    }
}

impl Mul<&DecUint> for &DecUint {
    type Output = DecUint;

    fn mul(self, rhs: &DecUint) -> DecUint {
        DecUint::mul(self, rhs)
    }
}

impl Mul for DecUint {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        DecUint::mul(&self, &rhs)
    }
}

impl Mul<&DecUint> for DecUint {
    type Output = Self;

    fn mul(self, rhs: &Self) -> Self {
        DecUint::mul(&self, rhs)
    }
}

impl Mul<DecUint> for &DecUint {
    type Output = DecUint;

    fn mul(self, rhs: DecUint) -> DecUint {
        DecUint::mul(self, &rhs)
    }
}

impl CheckedMul for DecUint {
    /// Multiplication of unbounded values cannot overflow; this always
    /// returns `Some`.
    fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        Some(self.mul(rhs))
    }
}

#[cfg(test)]
mod tests {
    use super::{DecUint, Digit};

    #[test]
    fn mul_zero_short_circuits() {
        assert!(DecUint::zero().mul(&DecUint::from(42u32)).is_zero());
        assert!(DecUint::from(42u32).mul(&DecUint::zero()).is_zero());
    }

    #[test]
    fn mul_single_digits() {
        assert_eq!(DecUint::from(7u32) * DecUint::from(8u32), DecUint::from(56u32));
    }

    #[test]
    fn mul_carries_across_rows() {
        assert_eq!(
            DecUint::from(999u32) * DecUint::from(999u32),
            DecUint::from(998001u32)
        );
    }

    #[test]
    fn mul_mixed_lengths() {
        assert_eq!(
            DecUint::from(12345u32) * DecUint::from(6u32),
            DecUint::from(74070u32)
        );
    }

    #[test]
    fn mul_digit_scales() {
        assert_eq!(DecUint::from(123u32).mul_digit(Digit::new(9)), DecUint::from(1107u32));
        assert!(DecUint::from(123u32).mul_digit(Digit::ZERO).is_zero());
    }

    #[test]
    fn square() {
        assert_eq!(
            DecUint::from(111_111_111u64).square(),
            DecUint::from(12_345_678_987_654_321u64)
        );
    }
}
