//! Complex numbers for the sliding-window transforms.
//!
//! Two types share the read-only [`ComplexRead`] surface:
//!
//! - [`Complex`] is a `Copy` value with no mutators. Arithmetic returns a new
//!   value wrapped in `Result`.
//! - [`MutableComplex`] is an owned accumulator updated in place.
//!
//! Every operation checks that the components it consumes and produces are
//! finite and reports [`SlideError::NonFinite`] otherwise. A failed in-place
//! operation leaves the accumulator untouched.
//!
//! Equality is exact and field-wise. No tolerance is applied, so two values
//! that differ only by rounding compare unequal.

use core::fmt;

use crate::error::SlideError;

// Minimal float trait for the generic complex layer (no_std, math via libm)
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
    fn pi() -> Self;
    fn is_finite(self) -> bool;
    fn abs(self) -> Self;
    fn sqrt(self) -> Self;
    /// `sqrt(self² + y²)` without intermediate overflow or underflow.
    fn hypot(self, y: Self) -> Self;
    /// Four-quadrant arc tangent of `self / x`.
    fn atan2(self, x: Self) -> Self;
    fn sin_cos(self) -> (Self, Self);
}

impl Float for f32 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn pi() -> Self {
        core::f32::consts::PI
    }
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
    fn abs(self) -> Self {
        libm::fabsf(self)
    }
    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }
    fn hypot(self, y: Self) -> Self {
        libm::hypotf(self, y)
    }
    fn atan2(self, x: Self) -> Self {
        libm::atan2f(self, x)
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincosf(self)
    }
}

impl Float for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn pi() -> Self {
        core::f64::consts::PI
    }
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
    fn abs(self) -> Self {
        libm::fabs(self)
    }
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }
    fn hypot(self, y: Self) -> Self {
        libm::hypot(self, y)
    }
    fn atan2(self, x: Self) -> Self {
        libm::atan2(self, x)
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincos(self)
    }
}

#[inline(always)]
fn finite<T: Float>(re: T, im: T) -> Result<Complex<T>, SlideError> {
    if re.is_finite() && im.is_finite() {
        Ok(Complex { re, im })
    } else {
        Err(SlideError::NonFinite)
    }
}

/// Read access shared by [`Complex`] and [`MutableComplex`].
pub trait ComplexRead {
    type Scalar: Float;

    fn re(&self) -> Self::Scalar;
    fn im(&self) -> Self::Scalar;

    /// Squared magnitude `re² + im²`.
    fn norm(&self) -> Self::Scalar {
        self.re() * self.re() + self.im() * self.im()
    }

    fn length(&self) -> Self::Scalar {
        self.re().hypot(self.im())
    }

    /// Phase angle in `(-π, π]`.
    fn phi(&self) -> Self::Scalar {
        self.im().atan2(self.re())
    }

    /// Snapshot as a read-only value.
    fn value(&self) -> Complex<Self::Scalar> {
        Complex::new(self.re(), self.im())
    }

    /// Display adapter printing the polar form `(l*e^(±φπ))`.
    fn polar(&self) -> Polar<Self::Scalar> {
        Polar(self.value())
    }
}

/// Immutable complex value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex<T: Float> {
    re: T,
    im: T,
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;

impl<T: Float> Complex<T> {
    /// Build a value without checking the components.
    ///
    /// This is the permissive constructor: NaN or infinite components are
    /// stored as given, and rejected by the first operation consuming them.
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    pub fn from_cartesian(re: T, im: T) -> Result<Self, SlideError> {
        finite(re, im)
    }

    pub fn from_polar(phi: T, length: T) -> Result<Self, SlideError> {
        if !phi.is_finite() || !length.is_finite() {
            return Err(SlideError::NonFinite);
        }
        let (sin, cos) = phi.sin_cos();
        finite(length * cos, length * sin)
    }

    /// Unit rotator `e^(iθ)`.
    #[inline(always)]
    pub fn expi(theta: T) -> Result<Self, SlideError> {
        Self::from_polar(theta, T::one())
    }

    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    #[inline(always)]
    fn checked(self) -> Result<Self, SlideError> {
        finite(self.re, self.im)
    }

    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn add(self, other: impl Into<Self>) -> Result<Self, SlideError> {
        let other: Self = other.into();
        let other = other.checked()?;
        let this = self.checked()?;
        finite(this.re + other.re, this.im + other.im)
    }

    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn sub(self, other: impl Into<Self>) -> Result<Self, SlideError> {
        let other: Self = other.into();
        let other = other.checked()?;
        let this = self.checked()?;
        finite(this.re - other.re, this.im - other.im)
    }

    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn mul(self, other: impl Into<Self>) -> Result<Self, SlideError> {
        let other: Self = other.into();
        let other = other.checked()?;
        let this = self.checked()?;
        finite(
            this.re * other.re - this.im * other.im,
            this.re * other.im + this.im * other.re,
        )
    }

    /// Complex division. A zero divisor yields [`SlideError::NonFinite`].
    ///
    /// Smith's algorithm: the divisor is scaled by its larger component
    /// first, so no squared magnitude is formed.
    #[allow(clippy::should_implement_trait)]
    pub fn div(self, other: impl Into<Self>) -> Result<Self, SlideError> {
        let other: Self = other.into();
        let other = other.checked()?;
        let this = self.checked()?;
        if other.re.abs() >= other.im.abs() {
            let r = other.im / other.re;
            let den = other.re + other.im * r;
            finite(
                (this.re + this.im * r) / den,
                (this.im - this.re * r) / den,
            )
        } else {
            let r = other.re / other.im;
            let den = other.re * r + other.im;
            finite(
                (this.re * r + this.im) / den,
                (this.im * r - this.re) / den,
            )
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn neg(self) -> Result<Self, SlideError> {
        let this = self.checked()?;
        finite(-this.re, -this.im)
    }

    pub fn conj(self) -> Result<Self, SlideError> {
        let this = self.checked()?;
        finite(this.re, -this.im)
    }

    /// Reciprocal `1 / self`, i.e. the conjugate over the norm.
    pub fn inv(self) -> Result<Self, SlideError> {
        Self::new(T::one(), T::zero()).div(self)
    }

    /// Rescale to `length`, keeping the phase.
    ///
    /// The value is normalised to unit length before scaling, so a zero value
    /// cannot be rescaled.
    pub fn with_length(self, length: T) -> Result<Self, SlideError> {
        if !length.is_finite() {
            return Err(SlideError::NonFinite);
        }
        let this = self.checked()?;
        let current = this.length();
        finite(this.re / current, this.im / current)?.mul(length)
    }

    /// Rotate to phase `phi`, keeping the magnitude.
    pub fn with_phi(self, phi: T) -> Result<Self, SlideError> {
        let this = self.checked()?;
        Self::from_polar(phi, this.length())
    }
}

impl<T: Float> ComplexRead for Complex<T> {
    type Scalar = T;

    #[inline(always)]
    fn re(&self) -> T {
        self.re
    }

    #[inline(always)]
    fn im(&self) -> T {
        self.im
    }
}

impl<T: Float> From<T> for Complex<T> {
    fn from(re: T) -> Self {
        Self::new(re, T::zero())
    }
}

impl<T: Float> Default for Complex<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Float> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+.4}{:+.4}i)", self.re, self.im)
    }
}

/// Polar rendering returned by [`ComplexRead::polar`].
#[derive(Clone, Copy, Debug)]
pub struct Polar<T: Float>(Complex<T>);

impl<T: Float> fmt::Display for Polar<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let length = self.0.length();
        let phi = if length == T::zero() {
            T::zero()
        } else {
            self.0.phi() / T::pi()
        };
        write!(f, "({:.4}*e^({:+.4}\u{3c0}))", length, phi)
    }
}

/// Owned, in-place updatable complex accumulator.
///
/// Each mutating method either applies fully or returns an error without
/// modifying `self`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MutableComplex<T: Float> {
    value: Complex<T>,
}

impl<T: Float> MutableComplex<T> {
    pub fn zero() -> Self {
        Self {
            value: Complex::zero(),
        }
    }

    pub fn from_cartesian(re: T, im: T) -> Result<Self, SlideError> {
        Ok(Self {
            value: Complex::from_cartesian(re, im)?,
        })
    }

    pub fn from_polar(phi: T, length: T) -> Result<Self, SlideError> {
        Ok(Self {
            value: Complex::from_polar(phi, length)?,
        })
    }

    #[inline(always)]
    fn apply(
        &mut self,
        op: impl FnOnce(Complex<T>) -> Result<Complex<T>, SlideError>,
    ) -> Result<(), SlideError> {
        self.value = op(self.value)?;
        Ok(())
    }

    /// Overwrite with the coordinates of `other`.
    pub fn copy_from<C: ComplexRead<Scalar = T> + ?Sized>(
        &mut self,
        other: &C,
    ) -> Result<(), SlideError> {
        self.set_cartesian(other.re(), other.im())
    }

    pub fn set_cartesian(&mut self, re: T, im: T) -> Result<(), SlideError> {
        self.apply(|_| Complex::from_cartesian(re, im))
    }

    pub fn set_polar(&mut self, phi: T, length: T) -> Result<(), SlideError> {
        self.apply(|_| Complex::from_polar(phi, length))
    }

    /// Reset to zero.
    pub fn clear(&mut self) {
        self.value = Complex::zero();
    }

    pub fn set_length(&mut self, length: T) -> Result<(), SlideError> {
        self.apply(|v| v.with_length(length))
    }

    pub fn set_phi(&mut self, phi: T) -> Result<(), SlideError> {
        self.apply(|v| v.with_phi(phi))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn neg(&mut self) -> Result<(), SlideError> {
        self.apply(Complex::neg)
    }

    pub fn conj(&mut self) -> Result<(), SlideError> {
        self.apply(Complex::conj)
    }

    pub fn inv(&mut self) -> Result<(), SlideError> {
        self.apply(Complex::inv)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(&mut self, other: impl Into<Complex<T>>) -> Result<(), SlideError> {
        self.apply(|v| v.add(other))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn sub(&mut self, other: impl Into<Complex<T>>) -> Result<(), SlideError> {
        self.apply(|v| v.sub(other))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn mul(&mut self, other: impl Into<Complex<T>>) -> Result<(), SlideError> {
        self.apply(|v| v.mul(other))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn div(&mut self, other: impl Into<Complex<T>>) -> Result<(), SlideError> {
        self.apply(|v| v.div(other))
    }
}

impl<T: Float> ComplexRead for MutableComplex<T> {
    type Scalar = T;

    #[inline(always)]
    fn re(&self) -> T {
        self.value.re
    }

    #[inline(always)]
    fn im(&self) -> T {
        self.value.im
    }
}

impl<T: Float> PartialEq<Complex<T>> for MutableComplex<T> {
    fn eq(&self, other: &Complex<T>) -> bool {
        self.value == *other
    }
}

impl<T: Float> PartialEq<MutableComplex<T>> for Complex<T> {
    fn eq(&self, other: &MutableComplex<T>) -> bool {
        *self == other.value
    }
}

impl<T: Float> fmt::Display for MutableComplex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_complex_operations() {
        let a = Complex64::new(1.0, -2.0);
        let b = Complex64::new(3.0, 4.0);
        let c = a.mul(b).unwrap();
        assert_eq!(c, Complex64::new(1.0 * 3.0 - (-2.0) * 4.0, 1.0 * 4.0 + -2.0 * 3.0));
        let n = a.neg().unwrap();
        assert_eq!(n.re(), -1.0);
        assert_eq!(n.im(), 2.0);
        let q = c.div(b).unwrap();
        assert!((q.re() - a.re()).abs() < EPSILON);
        assert!((q.im() - a.im()).abs() < EPSILON);
    }

    #[test]
    fn scalar_overloads() {
        let a = Complex64::new(1.5, -2.0);
        assert_eq!(a.add(1.0).unwrap(), Complex64::new(2.5, -2.0));
        assert_eq!(a.sub(0.5).unwrap(), Complex64::new(1.0, -2.0));
        assert_eq!(a.mul(2.0).unwrap(), Complex64::new(3.0, -4.0));
        assert_eq!(a.div(2.0).unwrap(), Complex64::new(0.75, -1.0));
    }

    #[test]
    fn polar_roundtrip() {
        let c = Complex64::from_polar(0.25 * core::f64::consts::PI, 2.0).unwrap();
        assert!((c.length() - 2.0).abs() < EPSILON);
        assert!((c.phi() - 0.25 * core::f64::consts::PI).abs() < EPSILON);
        let r = c.with_phi(-1.0).unwrap().with_length(0.5).unwrap();
        assert!((r.length() - 0.5).abs() < EPSILON);
        assert!((r.phi() + 1.0).abs() < EPSILON);
    }

    #[test]
    fn division_by_zero_is_numeric_error() {
        let a = Complex64::new(1.0, 1.0);
        assert_eq!(a.div(Complex64::zero()), Err(SlideError::NonFinite));
        assert_eq!(Complex64::zero().inv(), Err(SlideError::NonFinite));
        assert_eq!(Complex64::zero().with_length(1.0), Err(SlideError::NonFinite));
    }

    #[test]
    fn extreme_magnitudes_stay_accurate() {
        let huge = Complex64::new(1e200, 0.0);
        let one = huge.mul(huge.inv().unwrap()).unwrap();
        assert!((one.re() - 1.0).abs() < EPSILON);
        assert_eq!(one.im(), 0.0);

        let r = Complex64::new(1e-200, 0.0).inv().unwrap();
        assert!((r.re() / 1e200 - 1.0).abs() < EPSILON);
        let q = Complex64::new(1.0, 0.0).div(1e200).unwrap();
        assert!((q.re() / 1e-200 - 1.0).abs() < EPSILON);
        assert_eq!(q.im(), 0.0);

        let big = Complex64::new(3e200, 4e200);
        assert!((big.length() - 5e200).abs() < 1e188);
        let unit = big.with_length(1.0).unwrap();
        assert!((unit.re() - 0.6).abs() < EPSILON);
        assert!((unit.im() - 0.8).abs() < EPSILON);
        assert!((Complex64::new(3e-200, 4e-200).length() - 5e-200).abs() < 1e-212);
    }

    #[test]
    fn permissive_values_are_rejected_on_use() {
        let nan = Complex64::new(f64::NAN, 0.0);
        assert!(!nan.is_finite());
        assert_eq!(nan.conj(), Err(SlideError::NonFinite));
        assert_eq!(Complex64::new(1.0, 0.0).add(nan), Err(SlideError::NonFinite));
        assert_eq!(
            Complex64::from_cartesian(f64::INFINITY, 0.0),
            Err(SlideError::NonFinite)
        );
        assert_eq!(
            Complex64::from_polar(f64::NAN, 1.0),
            Err(SlideError::NonFinite)
        );
    }

    #[test]
    fn overflow_is_caught() {
        let big = Complex64::new(f64::MAX, 0.0);
        assert_eq!(big.add(big), Err(SlideError::NonFinite));
        assert_eq!(big.mul(2.0), Err(SlideError::NonFinite));
    }

    #[test]
    fn failed_update_leaves_accumulator_unchanged() {
        let mut acc = MutableComplex::from_cartesian(3.0, -4.0).unwrap();
        assert_eq!(acc.div(0.0), Err(SlideError::NonFinite));
        assert_eq!(acc.add(f64::NAN), Err(SlideError::NonFinite));
        assert_eq!(acc.mul(f64::MAX), Err(SlideError::NonFinite));
        assert_eq!(acc, Complex64::new(3.0, -4.0));
    }

    #[test]
    fn accumulator_in_place() {
        let mut acc = MutableComplex::<f64>::zero();
        acc.add(Complex64::new(1.0, 2.0)).unwrap();
        acc.mul(Complex64::new(0.0, 1.0)).unwrap();
        assert_eq!(acc, Complex64::new(-2.0, 1.0));
        acc.conj().unwrap();
        acc.neg().unwrap();
        assert_eq!(acc, Complex64::new(2.0, 1.0));
        acc.set_length(5.0_f64.sqrt() * 2.0).unwrap();
        assert!((acc.re() - 4.0).abs() < EPSILON);
        assert!((acc.im() - 2.0).abs() < EPSILON);
        acc.copy_from(&Complex64::new(7.0, 8.0)).unwrap();
        assert_eq!(acc.value(), Complex64::new(7.0, 8.0));
        acc.clear();
        assert_eq!(acc, Complex64::zero());
    }

    #[test]
    fn display_forms() {
        let c = Complex64::new(1.0, -0.5);
        assert_eq!(format!("{}", c), "(+1.0000-0.5000i)");
        let p = Complex64::new(0.0, 2.0);
        assert_eq!(format!("{}", p.polar()), "(2.0000*e^(+0.5000\u{3c0}))");
        assert_eq!(
            format!("{}", Complex64::zero().polar()),
            "(0.0000*e^(+0.0000\u{3c0}))"
        );
    }

    #[test]
    fn single_precision() {
        let a = Complex32::new(0.0, 1.0);
        let b = a.mul(a).unwrap();
        assert_eq!(b, Complex32::new(-1.0, 0.0));
    }
}
