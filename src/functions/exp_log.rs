use crate::registry::FunctionRegistry;
use formulix_macros::formulix_fn;

pub fn register(registry: &mut FunctionRegistry) {
    registry.register("exp", 1, exp);
    registry.register("exp2", 1, exp2);
    registry.register("expm1", 1, expm1);
    registry.register("log", 1, log);
    registry.register("log10", 1, log10);
    registry.register("log1p", 1, log1p);
    registry.register("log2", 1, log2);
    registry.register("logb", 1, logb);
    registry.register("pow", 2, pow);
    registry.register("pow10", 1, pow10);
    registry.register("sqrt", 1, sqrt);
    registry.register("cbrt", 1, cbrt);
}

#[formulix_fn]
fn exp(x: f64) -> f64 {
    x.exp()
}

#[formulix_fn]
fn exp2(x: f64) -> f64 {
    x.exp2()
}

#[formulix_fn]
fn expm1(x: f64) -> f64 {
    x.exp_m1()
}

/// Natural logarithm.
#[formulix_fn]
fn log(x: f64) -> f64 {
    x.ln()
}

#[formulix_fn]
fn log10(x: f64) -> f64 {
    x.log10()
}

#[formulix_fn]
fn log1p(x: f64) -> f64 {
    x.ln_1p()
}

#[formulix_fn]
fn log2(x: f64) -> f64 {
    x.log2()
}

/// Binary exponent of x as a float.
#[formulix_fn]
fn logb(x: f64) -> f64 {
    if x.is_nan() {
        f64::NAN
    } else if x.is_infinite() {
        f64::INFINITY
    } else if x == 0.0 {
        f64::NEG_INFINITY
    } else {
        // ilogb normalizes subnormals before extracting the exponent.
        libm::ilogb(x) as f64
    }
}

#[formulix_fn]
fn pow(x: f64, y: f64) -> f64 {
    x.powf(y)
}

/// 10^n for the integer part of the argument.
#[formulix_fn]
fn pow10(n: f64) -> f64 {
    10.0_f64.powi(n as i32)
}

#[formulix_fn]
fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

#[formulix_fn]
fn cbrt(x: f64) -> f64 {
    x.cbrt()
}
