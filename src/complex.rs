use core::ops::{Add, Mul};

#[derive(Copy, Clone, Default, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    pub const fn from_real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// Primitive cube root of unity, (-1 + i√3) / 2.
    pub fn omega() -> Self {
        Self::new(-0.5, 3.0f64.sqrt() / 2.0)
    }

    /// Square of `omega()`, its conjugate (-1 - i√3) / 2.
    pub fn omega_squared() -> Self {
        Self::new(-0.5, -(3.0f64.sqrt()) / 2.0)
    }
}

impl Add<Complex> for Complex {
    type Output = Complex;
    fn add(self, other: Complex) -> Self::Output {
        Complex {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
}

impl Mul<Complex> for Complex {
    type Output = Complex;
    fn mul(self, other: Complex) -> Self::Output {
        Complex {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }
}

impl core::fmt::Debug for Complex {
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "({:?}, {:?})", self.re, self.im)
    }
}
