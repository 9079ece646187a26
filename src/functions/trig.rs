use crate::registry::FunctionRegistry;
use formulix_macros::formulix_fn;

pub fn register(registry: &mut FunctionRegistry) {
    registry.register("sin", 1, sin);
    registry.register("cos", 1, cos);
    registry.register("tan", 1, tan);
    registry.register("asin", 1, asin);
    registry.register("acos", 1, acos);
    registry.register("atan", 1, atan);
    registry.register("atan2", 2, atan2);
    registry.register("sinh", 1, sinh);
    registry.register("cosh", 1, cosh);
    registry.register("tanh", 1, tanh);
    registry.register("asinh", 1, asinh);
    registry.register("acosh", 1, acosh);
    registry.register("atanh", 1, atanh);
}

#[formulix_fn]
fn sin(x: f64) -> f64 {
    x.sin()
}

#[formulix_fn]
fn cos(x: f64) -> f64 {
    x.cos()
}

#[formulix_fn]
fn tan(x: f64) -> f64 {
    x.tan()
}

#[formulix_fn]
fn asin(x: f64) -> f64 {
    x.asin()
}

#[formulix_fn]
fn acos(x: f64) -> f64 {
    x.acos()
}

#[formulix_fn]
fn atan(x: f64) -> f64 {
    x.atan()
}

#[formulix_fn]
fn atan2(y: f64, x: f64) -> f64 {
    y.atan2(x)
}

#[formulix_fn]
fn sinh(x: f64) -> f64 {
    x.sinh()
}

#[formulix_fn]
fn cosh(x: f64) -> f64 {
    x.cosh()
}

#[formulix_fn]
fn tanh(x: f64) -> f64 {
    x.tanh()
}

#[formulix_fn]
fn asinh(x: f64) -> f64 {
    x.asinh()
}

#[formulix_fn]
fn acosh(x: f64) -> f64 {
    x.acosh()
}

#[formulix_fn]
fn atanh(x: f64) -> f64 {
    x.atanh()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_known_angles() {
        assert!((sin(&[FRAC_PI_2]) - 1.0).abs() < 1e-15);
        assert!((cos(&[0.0]) - 1.0).abs() < 1e-15);
        assert!((tan(&[FRAC_PI_4]) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_atan2_quadrants() {
        assert!((atan2(&[1.0, 1.0]) - FRAC_PI_4).abs() < 1e-15);
        assert!((atan2(&[-1.0, -1.0]) + 3.0 * FRAC_PI_4).abs() < 1e-15);
        assert_eq!(atan2(&[0.0, -1.0]), PI);
    }

    #[test]
    fn test_inverse_round_trips() {
        assert!((asin(&[sin(&[0.4])]) - 0.4).abs() < 1e-12);
        assert!((acos(&[cos(&[0.4])]) - 0.4).abs() < 1e-12);
        assert!((asinh(&[sinh(&[0.5])]) - 0.5).abs() < 1e-12);
        assert!((acosh(&[cosh(&[1.5])]) - 1.5).abs() < 1e-12);
        assert!((atanh(&[tanh(&[0.5])]) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_domain_is_nan() {
        assert!(asin(&[1.5]).is_nan());
        assert!(acosh(&[0.5]).is_nan());
    }
}
