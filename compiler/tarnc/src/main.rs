//! Tarn calculator CLI

use std::io::{self, IsTerminal};

use tarnc::{init_tracing, parse_args, Calculator, Command, Repl};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match parse_args(&args) {
        Ok(Command::Help) => {
            print_usage();
            return;
        }
        Ok(Command::Repl(config)) => config,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };

    init_tracing(config.trace_tree);

    let calculator = match Calculator::new() {
        Ok(calculator) => calculator,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let repl = Repl::new(&calculator, &config, stdout.is_terminal());
    let result = match &config.expression {
        Some(expression) => repl
            .eval_line(expression, &mut stdout.lock())
            .map(|ok| usize::from(!ok)),
        None => repl.run(io::stdin().lock(), stdout.lock()).map(|_| 0),
    };

    match result {
        Ok(0) => {}
        Ok(_) => std::process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Tarn calculator");
    println!();
    println!("Usage: tarn [options]");
    println!();
    println!("Reads expressions from stdin, one per line, and prints their values.");
    println!("Operators group to the right; use parentheses to override.");
    println!();
    println!("Options:");
    println!("  -e <expr>             Evaluate one expression and exit");
    println!("  --tokens              Print each line's tokens");
    println!("  --prompt=<text>       Prompt text (default: \"> \")");
    println!("  --color=<mode>        auto, always, never (default: auto)");
    println!("  --trace-tree          Nested trace output (with RUST_LOG set)");
    println!("  help                  Show this message");
}
