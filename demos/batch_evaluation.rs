use formulix_rs::{var, Formula};

fn main() {
    pretty_env_logger::init();

    let quotes = vec![
        vec![var("price", 120.0), var("volume", 3000.0)],
        vec![var("price", 80.0), var("volume", 6000.0)],
        vec![var("price", 95.0)],
    ];

    let formula = Formula::compile("price * volume / 1000").unwrap();

    for (i, result) in formula.eval_batch(&quotes).iter().enumerate() {
        match result {
            Ok(value) => println!("Result {}: {}", i, value),
            Err(err) => println!("Result {}: error: {}", i, err),
        }
    }
}
