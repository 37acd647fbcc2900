use log::debug;
use numeval_rs::builtins::register_builtins;
use numeval_rs::{make_function, tokenize, Evaluator};

fn main() {
    pretty_env_logger::init();

    let expr = "hypot(3, 4) * 2 ^ 3 ^ 2 / 512";
    let tokens = tokenize(expr).unwrap();
    debug!("tokens: {tokens:?}");

    let mut evaluator = Evaluator::new();
    register_builtins(&mut evaluator).unwrap();

    let scale = make_function(["v", "factor"], "v * factor").unwrap();
    println!("scale = {scale}");
    evaluator.register_function("scale", scale);

    match evaluator.evaluate_expression(expr) {
        Ok(result) => println!("{expr} = {result}"),
        Err(err) => println!("Error: {err}"),
    }

    match evaluator.evaluate_expression("scale(pi, 2)") {
        Ok(result) => println!("scale(pi, 2) = {result}"),
        Err(err) => println!("Error: {err}"),
    }
}
