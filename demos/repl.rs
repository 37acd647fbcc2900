//! Reads one expression per line and prints its value until end of input.
//!
//! `def name(a, b) = body` defines a function for the rest of the session.

use log::warn;
use numeval_rs::builtins::register_builtins;
use numeval_rs::Evaluator;
use std::io::{self, BufRead, Write};

fn parse_definition(line: &str) -> Option<(&str, Vec<&str>, &str)> {
    let rest = line.strip_prefix("def ")?;
    let (head, body) = rest.split_once('=')?;
    let (name, params) = head.trim().split_once('(')?;
    let params = params.trim().strip_suffix(')')?;
    let params = params
        .split(',')
        .map(str::trim)
        .filter(|param| !param.is_empty())
        .collect();
    Some((name.trim(), params, body.trim()))
}

fn main() -> io::Result<()> {
    pretty_env_logger::init();

    let mut evaluator = Evaluator::new();
    if let Err(err) = register_builtins(&mut evaluator) {
        warn!("Built-in functions unavailable: {err}");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();

        if let Some((name, params, body)) = parse_definition(line) {
            match evaluator.define_function(name, params, body) {
                Ok(()) => println!("defined {name}"),
                Err(err) => println!("Error: {err}"),
            }
        } else if !line.is_empty() {
            match evaluator.evaluate_expression(line) {
                Ok(value) => println!("{value}"),
                Err(err) => println!("Error: {err}"),
            }
        }

        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    Ok(())
}
