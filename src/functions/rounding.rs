use crate::registry::FunctionRegistry;
use formulix_macros::formulix_fn;

pub fn register(registry: &mut FunctionRegistry) {
    registry.register("ceil", 1, ceil);
    registry.register("floor", 1, floor);
    registry.register("round", 1, round);
    registry.register("roundtoeven", 1, roundtoeven);
    registry.register("trunc", 1, trunc);
    registry.register("abs", 1, abs);
    registry.register("copysign", 2, copysign);
    registry.register("dim", 2, dim);
    registry.register("mod", 2, fmod);
    registry.register("nextafter", 2, nextafter);
    registry.register("remainder", 2, remainder);
}

#[formulix_fn]
fn ceil(x: f64) -> f64 {
    x.ceil()
}

#[formulix_fn]
fn floor(x: f64) -> f64 {
    x.floor()
}

/// Rounds half away from zero.
#[formulix_fn]
fn round(x: f64) -> f64 {
    x.round()
}

/// Rounds half to the nearest even integer.
#[formulix_fn]
fn roundtoeven(x: f64) -> f64 {
    x.round_ties_even()
}

#[formulix_fn]
fn trunc(x: f64) -> f64 {
    x.trunc()
}

#[formulix_fn]
fn abs(x: f64) -> f64 {
    x.abs()
}

/// Magnitude of x with the sign of y.
#[formulix_fn]
fn copysign(x: f64, y: f64) -> f64 {
    x.copysign(y)
}

/// max(x - y, 0).
#[formulix_fn]
fn dim(x: f64, y: f64) -> f64 {
    libm::fdim(x, y)
}

/// Truncated-division remainder; the sign follows x.
#[formulix_fn]
fn fmod(x: f64, y: f64) -> f64 {
    x % y
}

#[formulix_fn]
fn nextafter(x: f64, y: f64) -> f64 {
    libm::nextafter(x, y)
}

/// IEEE 754 remainder: x - y*n with n the integer nearest x/y.
#[formulix_fn]
fn remainder(x: f64, y: f64) -> f64 {
    libm::remainder(x, y)
}
