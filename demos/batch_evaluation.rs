use numeval_rs::{evaluate_batch, ConstantTable, FunctionTable};

fn main() {
    pretty_env_logger::init();

    let constants = ConstantTable::from([
        ("price".to_string(), 120.0),
        ("volume".to_string(), 3000.0),
    ]);

    let expressions = [
        "price * volume",
        "price / (volume - 3000)",
        "(price - 100) % 7",
        "price +",
    ];

    let results = evaluate_batch(&expressions, &constants, &FunctionTable::new());
    for (expression, result) in expressions.iter().zip(results) {
        match result {
            Ok(value) => println!("{expression} = {value}"),
            Err(err) => println!("{expression}: {err}"),
        }
    }
}
