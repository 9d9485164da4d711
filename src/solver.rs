// Closed-form solution of c3 x^3 + c2 x^2 + c1 x + c0 = 0 with real coefficients,
// following the CRC Standard Mathematical Tables exposition.

use crate::complex::Complex;
use crate::error::Error;
use core::f64::consts::PI;
use log::{debug, trace};

/// Real cube root of a value of either sign, computed with `powf` on the magnitude.
/// Some math libraries reject negative bases for fractional exponents, so the
/// sign is always split off first.
pub fn signed_cbrt(x: f64) -> f64 {
    if x >= 0.0 {
        x.powf(1.0 / 3.0)
    } else {
        -1.0 * (-x).powf(1.0 / 3.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Branch {
    /// t < 0: three distinct real roots.
    Trigonometric,
    /// t >= 0: one real root and a conjugate pair, or repeated real roots when t == 0.
    Cardano,
}

/// The depressed cubic x'^3 + a x' + b = 0, obtained from the normalized cubic
/// x^3 + p x^2 + q x + r = 0 through x = x' - p/3.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Depressed {
    pub p: f64,
    pub a: f64,
    pub b: f64,
    /// b^2/4 + a^3/27. Its sign selects the branch.
    pub t: f64,
}

impl Depressed {
    pub fn branch(&self) -> Branch {
        if self.t < 0.0 {
            Branch::Trigonometric
        } else {
            Branch::Cardano
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cubic {
    pub c3: f64,
    pub c2: f64,
    pub c1: f64,
    pub c0: f64,
}

impl Cubic {
    pub fn new(c3: f64, c2: f64, c1: f64, c0: f64) -> Result<Self, Error> {
        if c3 == 0.0 {
            return Err(Error::DomainError);
        }
        Ok(Self { c3, c2, c1, c0 })
    }

    pub fn depressed(&self) -> Depressed {
        let p = self.c2 / self.c3;
        let q = self.c1 / self.c3;
        let r = self.c0 / self.c3;

        let a = q - p * p / 3.0;
        let b = (2.0 * p * p * p - 9.0 * p * q + 27.0 * r) / 27.0;
        let t = b * b / 4.0 + a * a * a / 27.0;

        Depressed { p, a, b, t }
    }

    /// Returns the three roots. The order falls out of the per-branch formulas;
    /// no sorting is applied.
    pub fn roots(&self) -> [Complex; 3] {
        let d = self.depressed();
        let branch = d.branch();
        debug!(
            "cubic {:?}: p = {}, a = {}, b = {}, t = {}, {:?}",
            self, d.p, d.a, d.b, d.t, branch
        );

        let mut roots = match branch {
            Branch::Trigonometric => trigonometric_roots(d.a, d.b),
            Branch::Cardano => cardano_roots(d.b, d.t),
        };

        // undo x = x' - p/3
        let shift = d.p / 3.0;
        for root in roots.iter_mut() {
            *root = Complex::new(root.re - shift, root.im);
        }
        roots
    }
}

// t < 0 implies a < 0, so -a and rho are both positive.
fn trigonometric_roots(a: f64, b: f64) -> [Complex; 3] {
    let rho = (-a).powf(1.5) / 27.0f64.sqrt();
    // rounding can push the ratio just outside [-1, 1] near t == 0
    let cos_theta = (b / rho / 2.0).max(-1.0).min(1.0);
    let theta = cos_theta.acos();
    let rho = -2.0 * rho.powf(1.0 / 3.0);
    trace!("trigonometric: rho = {}, theta = {}", rho, theta);

    [
        Complex::from_real((theta / 3.0).cos() * rho),
        Complex::from_real(((2.0 * PI + theta) / 3.0).cos() * rho),
        Complex::from_real(((4.0 * PI + theta) / 3.0).cos() * rho),
    ]
}

fn cardano_roots(b: f64, t: f64) -> [Complex; 3] {
    let t = t.sqrt();
    let l = -signed_cbrt(b / 2.0 + t);
    let m = -signed_cbrt(b / 2.0 - t);
    trace!("cardano: l = {}, m = {}", l, m);

    let omega = Complex::omega();
    let omega_squared = Complex::omega_squared();
    let l = Complex::from_real(l);
    let m = Complex::from_real(m);

    [
        Complex::from_real(l.re + m.re),
        omega * l + omega_squared * m,
        omega_squared * l + omega * m,
    ]
}

/// Solves c3 x^3 + c2 x^2 + c1 x + c0 = 0. Fails with `Error::DomainError` when c3 == 0.
pub fn solve_cubic(c3: f64, c2: f64, c1: f64, c0: f64) -> Result<[Complex; 3], Error> {
    Ok(Cubic::new(c3, c2, c1, c0)?.roots())
}
