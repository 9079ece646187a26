use crate::registry::FunctionRegistry;
use formulix_macros::formulix_fn;

pub fn register(registry: &mut FunctionRegistry) {
    registry.register("min", 1, min);
    registry.register("max", 1, max);
    registry.register("hypot", 2, hypot);
    registry.register("fma", 3, fma);
}

/// Smallest argument. NaN anywhere makes the result NaN, and -0 orders
/// below +0.
pub fn min(args: &[f64]) -> f64 {
    args[1..].iter().fold(args[0], |acc, &v| min2(acc, v))
}

/// Largest argument, with the same NaN and signed-zero handling as min.
pub fn max(args: &[f64]) -> f64 {
    args[1..].iter().fold(args[0], |acc, &v| max2(acc, v))
}

fn min2(x: f64, y: f64) -> f64 {
    if x.is_nan() || y.is_nan() {
        f64::NAN
    } else if x == y {
        if x.is_sign_negative() {
            x
        } else {
            y
        }
    } else if x < y {
        x
    } else {
        y
    }
}

fn max2(x: f64, y: f64) -> f64 {
    if x.is_nan() || y.is_nan() {
        f64::NAN
    } else if x == y {
        if x.is_sign_positive() {
            x
        } else {
            y
        }
    } else if x > y {
        x
    } else {
        y
    }
}

#[formulix_fn]
fn hypot(p: f64, q: f64) -> f64 {
    p.hypot(q)
}

/// x*y + z with a single rounding.
#[formulix_fn]
fn fma(x: f64, y: f64, z: f64) -> f64 {
    x.mul_add(y, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max_fold_left() {
        assert_eq!(min(&[3.0, 1.0, 2.0]), 1.0);
        assert_eq!(max(&[3.0, 1.0, 2.0]), 3.0);
        assert_eq!(min(&[5.0]), 5.0);
        assert_eq!(max(&[5.0]), 5.0);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(min(&[1.0, f64::NAN]).is_nan());
        assert!(min(&[f64::NAN, 1.0]).is_nan());
        assert!(max(&[2.0, f64::NAN, 1.0]).is_nan());
    }

    #[test]
    fn test_signed_zero_ordering() {
        assert!(min(&[0.0, -0.0]).is_sign_negative());
        assert!(max(&[-0.0, 0.0]).is_sign_positive());
    }

    #[test]
    fn test_hypot_avoids_overflow() {
        assert_eq!(hypot(&[3.0, 4.0]), 5.0);
        assert_eq!(hypot(&[3e300, 4e300]), 5e300);
    }

    #[test]
    fn test_fma_is_fused() {
        assert_eq!(fma(&[2.0, 3.0, 1.0]), 7.0);
        // a*a rounds away the epsilon^2 term; the fused form keeps it.
        let a = 1.0 + f64::EPSILON;
        assert!(fma(&[a, a, -(a * a)]) > 0.0);
    }
}
