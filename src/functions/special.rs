use crate::registry::FunctionRegistry;
use formulix_macros::formulix_fn;

pub fn register(registry: &mut FunctionRegistry) {
    registry.register("gamma", 1, gamma);
    registry.register("erf", 1, erf);
    registry.register("erfc", 1, erfc);
    registry.register("erfinv", 1, erfinv);
    registry.register("erfcinv", 1, erfcinv);
    registry.register("j0", 1, j0);
    registry.register("j1", 1, j1);
    registry.register("jn", 2, jn);
    registry.register("y0", 1, y0);
    registry.register("y1", 1, y1);
    // Registered at arity 1; a one-argument call reaches the second
    // argument read and faults at the call boundary.
    registry.register("yn", 1, yn);
}

#[formulix_fn]
fn gamma(x: f64) -> f64 {
    libm::tgamma(x)
}

#[formulix_fn]
fn erf(x: f64) -> f64 {
    libm::erf(x)
}

#[formulix_fn]
fn erfc(x: f64) -> f64 {
    libm::erfc(x)
}

/// Inverse of erf on (-1, 1); the endpoints map to +-infinity and
/// anything outside is NaN.
///
/// The central region uses a polynomial guess in w = -ln(1 - x^2)
/// polished by Newton against erf. The tail inverts erfc(y) = 1 - |x|
/// instead, where the forward direction keeps resolution all the way
/// to the last representable value below 1.
#[formulix_fn]
fn erfinv(x: f64) -> f64 {
    if x.is_nan() || x < -1.0 || x > 1.0 {
        return f64::NAN;
    }
    if x == 1.0 {
        return f64::INFINITY;
    }
    if x == -1.0 {
        return f64::NEG_INFINITY;
    }

    const HALF_SQRT_PI: f64 = 0.886_226_925_452_758;
    const SQRT_PI: f64 = 1.772_453_850_905_516;

    let w = -((1.0 - x) * (1.0 + x)).ln();
    if w < 5.0 {
        let w = w - 2.5;
        let mut p;
        p = 2.81022636e-08;
        p = 3.43273939e-07 + p * w;
        p = -3.5233877e-06 + p * w;
        p = -4.39150654e-06 + p * w;
        p = 0.00021858087 + p * w;
        p = -0.00125372503 + p * w;
        p = -0.00417768164 + p * w;
        p = 0.246640727 + p * w;
        p = 1.50140941 + p * w;
        let mut y = p * x;

        // Newton: d/dy erf(y) = 2/sqrt(pi) * exp(-y^2).
        for _ in 0..2 {
            let err = libm::erf(y) - x;
            y -= err * HALF_SQRT_PI * (y * y).exp();
        }
        y
    } else {
        // The subtraction 1 - |x| is exact for |x| >= 0.5.
        let a = x.abs();
        let q = 1.0 - a;

        // Seed from y^2 ~ -ln(q * y * sqrt(pi)), the leading asymptotic
        // form of erfc.
        let mut y = w.sqrt();
        for _ in 0..3 {
            y = (-(q * y * SQRT_PI).ln()).sqrt();
        }

        // Newton: d/dy erfc(y) = -2/sqrt(pi) * exp(-y^2).
        for _ in 0..4 {
            let err = libm::erfc(y) - q;
            y += err * HALF_SQRT_PI * (y * y).exp();
        }
        y.copysign(x)
    }
}

/// Inverse of erfc on (0, 2).
#[formulix_fn]
fn erfcinv(x: f64) -> f64 {
    erfinv(&[1.0 - x])
}

#[formulix_fn]
fn j0(x: f64) -> f64 {
    libm::j0(x)
}

#[formulix_fn]
fn j1(x: f64) -> f64 {
    libm::j1(x)
}

/// Bessel function of the first kind for the integer part of n.
#[formulix_fn]
fn jn(n: f64, x: f64) -> f64 {
    libm::jn(n as i32, x)
}

#[formulix_fn]
fn y0(x: f64) -> f64 {
    libm::y0(x)
}

#[formulix_fn]
fn y1(x: f64) -> f64 {
    libm::y1(x)
}

/// Bessel function of the second kind for the integer part of n.
#[formulix_fn]
fn yn(n: f64, x: f64) -> f64 {
    libm::yn(n as i32, x)
}
