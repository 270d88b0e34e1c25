use num_traits::{Float, One, Zero};
use std::fmt::{self, Display};

/// Forward-mode automatic differentiation using dual numbers.
///
/// A `Dual` holds a value and its first derivative with respect to some
/// variable chosen by the caller. Every operation applies the chain rule
/// locally, so composed expressions carry an exact derivative along with
/// their value.
///
/// Seed the variable you differentiate with respect to via
/// [`Dual::variable`] and wrap everything else in [`Dual::constant`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dual<T: Float> {
    pub real: T, // The value
    pub dual: T, // The derivative
}

/// Single precision dual number.
pub type DualNumber = Dual<f32>;

impl<T: Float> Dual<T> {
    /// Constructs a new `Dual` from a value and a derivative.
    pub fn new(real: T, dual: T) -> Self {
        Dual { real, dual }
    }

    /// A constant: contributes nothing to the derivative.
    pub fn constant(real: T) -> Self {
        Dual::new(real, T::zero())
    }

    /// The independent variable, seeded with derivative 1.
    pub fn variable(real: T) -> Self {
        Dual::new(real, T::one())
    }

    pub fn real(&self) -> T {
        self.real
    }

    pub fn dual(&self) -> T {
        self.dual
    }

    /// Square root. A negative value yields NaN.
    pub fn sqrt(self) -> Self {
        let sqrt_real = self.real.sqrt();
        let half = T::one() / (T::one() + T::one());
        Dual::new(sqrt_real, half * self.dual / sqrt_real)
    }

    /// Raises to a plain scalar power.
    ///
    /// The exponent is not a dual number, so only the base is differentiated.
    pub fn powf(self, y: T) -> Self {
        Dual::new(
            self.real.powf(y),
            y * self.dual * self.real.powf(y - T::one()),
        )
    }

    pub fn sin(self) -> Self {
        Dual::new(self.real.sin(), self.dual * self.real.cos())
    }

    pub fn cos(self) -> Self {
        Dual::new(self.real.cos(), -self.dual * self.real.sin())
    }

    /// Tangent. Blows up near `PI / 2 + k * PI`.
    pub fn tan(self) -> Self {
        let cos = self.real.cos();
        Dual::new(self.real.tan(), self.dual / (cos * cos))
    }

    pub fn atan(self) -> Self {
        Dual::new(
            self.real.atan(),
            self.dual / (T::one() + self.real * self.real),
        )
    }
}

/// Hermite smoothstep `3x^2 - 2x^3`, written purely in dual arithmetic.
///
/// The derivative `6x - 6x^2` falls out of the operators; nothing here is
/// special-cased.
pub fn smooth_step<T: Float>(x: Dual<T>) -> Dual<T> {
    let two = Dual::constant(T::one() + T::one());
    let three = Dual::constant(T::one() + T::one() + T::one());
    x * x * (three - two * x)
}

impl<T: Float> Default for Dual<T> {
    fn default() -> Self {
        Dual::zero()
    }
}

impl<T: Float> From<T> for Dual<T> {
    fn from(real: T) -> Self {
        Dual::constant(real)
    }
}

impl<T: Float + Display> Display for Dual<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.dual.is_sign_negative() && !self.dual.is_nan() {
            write!(f, "{} - {}ε", self.real, -self.dual)
        } else {
            write!(f, "{} + {}ε", self.real, self.dual)
        }
    }
}

// Implementing addition for Dual
use std::ops::Add;

impl<T: Float> Add for Dual<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Dual {
            real: self.real + other.real,
            dual: self.dual + other.dual,
        }
    }
}

// Implementing multiplication for Dual
use std::ops::Mul;

impl<T: Float> Mul for Dual<T> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Dual {
            real: self.real * other.real,
            dual: self.real * other.dual + self.dual * other.real,
        }
    }
}

use std::ops::{Div, Neg, Sub};

impl<T: Float> Sub for Dual<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Dual {
            real: self.real - other.real,
            dual: self.dual - other.dual,
        }
    }
}

impl<T: Float> Div for Dual<T> {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        Dual {
            real: self.real / other.real,
            dual: (self.dual * other.real - self.real * other.dual)
                / (other.real * other.real),
        }
    }
}

impl<T: Float> Neg for Dual<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Dual {
            real: -self.real,
            dual: -self.dual,
        }
    }
}

// Plain scalars on the right-hand side act as constants
impl<T: Float> Add<T> for Dual<T> {
    type Output = Self;

    fn add(self, rhs: T) -> Self {
        self + Dual::constant(rhs)
    }
}

impl<T: Float> Sub<T> for Dual<T> {
    type Output = Self;

    fn sub(self, rhs: T) -> Self {
        self - Dual::constant(rhs)
    }
}

impl<T: Float> Mul<T> for Dual<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Dual::new(self.real * rhs, self.dual * rhs)
    }
}

impl<T: Float> Div<T> for Dual<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Dual::new(self.real / rhs, self.dual / rhs)
    }
}

impl Mul<Dual<f32>> for f32 {
    type Output = Dual<f32>;

    fn mul(self, rhs: Dual<f32>) -> Dual<f32> {
        rhs * self
    }
}

impl Mul<Dual<f64>> for f64 {
    type Output = Dual<f64>;

    fn mul(self, rhs: Dual<f64>) -> Dual<f64> {
        rhs * self
    }
}

impl<T: Float> Zero for Dual<T> {
    fn zero() -> Self {
        Dual::new(T::zero(), T::zero())
    }

    fn is_zero(&self) -> bool {
        self.real.is_zero() && self.dual.is_zero()
    }
}

impl<T: Float> One for Dual<T> {
    fn one() -> Self {
        Dual::constant(T::one())
    }
}
