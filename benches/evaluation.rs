use criterion::{black_box, criterion_group, criterion_main, Criterion};
use evalexpr::*;
use formulix_rs::{var, Formula, Variable};
use rand::Rng;

/// Benchmark simple arithmetic formulas
fn benchmark_simple_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simple Arithmetic Formula Evaluation");

    let expr = "2 + 3 * 4";
    let formula = Formula::compile(expr).unwrap();
    let precompiled_evalexpr = build_operator_tree::<DefaultNumericTypes>(expr).unwrap();

    group.bench_function("compiled_arithmetic", |b| {
        b.iter(|| formulix_rs::evaluate(black_box(expr), &[]).unwrap())
    });

    group.bench_function("precompiled_arithmetic", |b| {
        b.iter(|| formula.eval(black_box(&[])).unwrap())
    });

    group.bench_function("native_rust_arithmetic", |b| {
        b.iter(|| black_box(2.0 + 3.0 * 4.0))
    });

    group.bench_function("meval_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_evalexpr_arithmetic", |b| {
        b.iter(|| precompiled_evalexpr.eval().unwrap())
    });
}

/// Benchmark complex arithmetic formulas
fn benchmark_complex_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Complex Arithmetic Formula Evaluation");

    let expr = "(10 + 20) * 3 / (4 - 1) + 5";
    let formula = Formula::compile(expr).unwrap();
    let precompiled_evalexpr = build_operator_tree::<DefaultNumericTypes>(expr).unwrap();

    group.bench_function("compiled_complex_arithmetic", |b| {
        b.iter(|| formulix_rs::evaluate(black_box(expr), &[]).unwrap())
    });

    group.bench_function("precompiled_complex_arithmetic", |b| {
        b.iter(|| formula.eval(black_box(&[])).unwrap())
    });

    group.bench_function("native_rust_complex_arithmetic", |b| {
        b.iter(|| black_box((10.0 + 20.0) * 3.0 / (4.0 - 1.0) + 5.0))
    });

    group.bench_function("meval_complex_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_complex_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_evalexpr_complex_arithmetic", |b| {
        b.iter(|| precompiled_evalexpr.eval().unwrap())
    });
}

/// Benchmark formulas with variable bindings
fn benchmark_variable_bindings(c: &mut Criterion) {
    let mut group = c.benchmark_group("Variable Binding Evaluation");

    let expr = "price * volume / 1000";
    let formula = Formula::compile(expr).unwrap();
    let vars = vec![var("price", 120.0), var("volume", 3000.0)];

    let mut meval_ctx = meval::Context::new();
    meval_ctx.var("price", 120.0).var("volume", 3000.0);

    let mut evalexpr_ctx = HashMapContext::<DefaultNumericTypes>::new();
    evalexpr_ctx
        .set_value("price".into(), Value::from_float(120.0))
        .unwrap();
    evalexpr_ctx
        .set_value("volume".into(), Value::from_float(3000.0))
        .unwrap();

    group.bench_function("precompiled_bindings", |b| {
        b.iter(|| formula.eval(black_box(&vars)).unwrap())
    });

    group.bench_function("native_rust_bindings", |b| {
        b.iter(|| {
            let price = black_box(120.0);
            let volume = black_box(3000.0);
            black_box(price * volume / 1000.0)
        })
    });

    group.bench_function("meval_bindings", |b| {
        b.iter(|| meval::eval_str_with_context(black_box(expr), &meval_ctx).unwrap())
    });

    group.bench_function("evalexpr_bindings", |b| {
        b.iter(|| evalexpr::eval_with_context(black_box(expr), &evalexpr_ctx).unwrap())
    });
}

/// Benchmark function calls
fn benchmark_function_calls(c: &mut Criterion) {
    let mut group = c.benchmark_group("Function Call Evaluation");

    let formula = Formula::compile("pow(x, 3) + sqrt(y)").unwrap();
    let vars = vec![var("x", 4.0), var("y", 2.25)];

    let mut custom = Formula::compile("square(4)").unwrap();
    custom.register("square", 1, |args: &[f64]| args[0] * args[0]);

    group.bench_function("builtin_function_calls", |b| {
        b.iter(|| formula.eval(black_box(&vars)).unwrap())
    });

    group.bench_function("registered_function_call", |b| {
        b.iter(|| custom.eval(black_box(&[])).unwrap())
    });

    group.bench_function("native_rust_function_call", |b| {
        b.iter(|| black_box(4.0_f64.powf(3.0) + 2.25_f64.sqrt()))
    });
}

/// Benchmark one formula over many binding sets
fn benchmark_batch_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch Evaluation");

    let formula = Formula::compile("sqrt(pow(x, 2) + pow(y, 2))").unwrap();

    let mut rng = rand::rng();
    let bindings: Vec<Vec<Variable>> = (0..1000)
        .map(|_| {
            vec![
                var("x", rng.random_range(-100.0..100.0)),
                var("y", rng.random_range(-100.0..100.0)),
            ]
        })
        .collect();

    group.bench_function("sequential_1000_rows", |b| {
        b.iter(|| {
            bindings
                .iter()
                .map(|vars| formula.eval(vars).unwrap())
                .sum::<f64>()
        })
    });

    group.bench_function("parallel_1000_rows", |b| {
        b.iter(|| formula.eval_batch(black_box(&bindings)))
    });
}

/// Grouping benchmarks
criterion_group!(
    benches,
    benchmark_simple_arithmetic,
    benchmark_complex_arithmetic,
    benchmark_variable_bindings,
    benchmark_function_calls,
    benchmark_batch_evaluation,
);
criterion_main!(benches);
