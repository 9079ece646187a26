use formulix_macros::formulix_fn;
use formulix_rs::{var, Formula, FunctionRegistry};

#[formulix_fn]
fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    x.max(lo).min(hi)
}

fn main() {
    pretty_env_logger::init();

    let mut registry = FunctionRegistry::with_defaults();
    registry.register("clamp", 3, clamp);

    let formula = Formula::compile_with("clamp(x, 0, 10) * 2", registry).unwrap();
    println!("Result: {}", formula.must_eval(&[var("x", 42.0)]));

    // A panicking function comes back as an error, not a crash.
    let mut formula = Formula::compile("checked_sqrt(x)").unwrap();
    formula.register("checked_sqrt", 1, |args: &[f64]| {
        if args[0] < 0.0 {
            panic!("negative input: {}", args[0]);
        }
        args[0].sqrt()
    });

    match formula.eval(&[var("x", -9.0)]) {
        Ok(result) => println!("Result: {}", result),
        Err(err) => println!("Error: {}", err),
    }
    println!("Result: {}", formula.must_eval(&[var("x", 9.0)]));
}
