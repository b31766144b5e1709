use std::fs;

use clap::Parser;
use exprtree::process_expression;

/// exprtree reads arithmetic expressions in infix notation, builds a binary
/// expression tree per expression, prints the three classic traversals, and
/// evaluates the result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the input as a path to a text file holding one expression per
    /// line instead of an expression itself.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    for expr in source.lines().filter(|line| !line.trim().is_empty()) {
        println!("Processing expression: {expr}");

        match process_expression(expr) {
            Ok(summary) => {
                println!("Infix (in-order) expression: {}", summary.infix);
                println!("Prefix (pre-order) expression: {}", summary.prefix);
                println!("Postfix (post-order) expression: {}", summary.postfix);

                match summary.result {
                    Ok(value) => println!("Result of the expression: {value}"),
                    Err(e) => eprintln!("{e}"),
                }
            },

            Err(e) => {
                eprintln!("{e}");
                println!("Skipping invalid expression...");
            },
        }

        println!("-----------------------------");
    }
}
