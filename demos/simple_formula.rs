use formulix_rs::{var, Formula};

fn main() {
    pretty_env_logger::init();

    let formula = Formula::compile("(price - cost) / price * 100").unwrap();

    let margin = formula
        .eval(&[var("price", 120.0), var("cost", 84.0)])
        .unwrap();
    println!("margin: {margin}%");

    // Constants are always in scope.
    let area = formulix_rs::evaluate("pi * pow(r, 2)", &[var("r", 2.5)]).unwrap();
    println!("area: {area}");

    match formula.eval(&[var("price", 120.0)]) {
        Ok(result) => println!("Result: {}", result),
        Err(err) => println!("Error: {}", err),
    }
}
