pub mod cost;
pub mod energy;
pub mod rate;

use std::ops::{Div, Mul};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A numeric value carrying its dimensions in the type: `ENERGY` is the
/// kilowatt-hour exponent and `COST` the cent exponent.
#[derive(
    Clone,
    Copy,
    Deserialize,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
#[from(i32, f64, OrderedFloat<f64>)]
#[must_use]
pub struct Quantity<const ENERGY: isize, const COST: isize>(pub OrderedFloat<f64>);

impl<const ENERGY: isize, const COST: isize> Quantity<ENERGY, COST> {
    pub const ZERO: Self = Self(OrderedFloat(0.0));

    #[must_use]
    pub const fn into_inner(self) -> f64 {
        self.0.0
    }
}

impl<const ENERGY: isize, const COST: isize> Mul<f64> for Quantity<ENERGY, COST> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl<const ENERGY: isize, const COST: isize> Div<f64> for Quantity<ENERGY, COST> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl<const ENERGY: isize, const COST: isize> Div<Self> for Quantity<ENERGY, COST> {
    type Output = OrderedFloat<f64>;

    fn div(self, rhs: Self) -> Self::Output {
        self.0 / rhs.0
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::{Debug, Formatter};

    use approx::assert_abs_diff_eq;

    use super::*;

    type Bare = Quantity<0, 0>;

    impl Debug for Bare {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.0)
        }
    }

    #[test]
    fn test_scale() {
        assert_eq!(Bare::from(1.5) * 2.0, Bare::from(3.0));
        assert_eq!(Bare::from(3.0) / 2.0, Bare::from(1.5));
    }

    #[test]
    fn test_sum() {
        let total: Bare = [Bare::from(0.5), Bare::from(1.0), Bare::from(2.0)].into_iter().sum();
        assert_abs_diff_eq!(total.into_inner(), 3.5);
    }

    #[test]
    fn test_ratio() {
        assert_eq!(Bare::from(3.0) / Bare::from(2.0), OrderedFloat(1.5));
    }
}
