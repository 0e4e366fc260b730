use std::io::{self, Write};
use std::process;

use bf::{Interpreter, cli_util};
use clap::Parser;

/// Execute a Brainfuck program supplied as a single argument.
///
/// The program runs against stdin and stdout with a fresh, unbounded memory
/// tape. Output is exactly the bytes the program emits; errors go to stderr
/// with a caret pointing at the offending source position.
#[derive(Parser, Debug)]
#[command(name = "bf", version)]
struct Cli {
    /// Brainfuck program text (non-instruction characters are ignored)
    #[arg(value_name = "PROGRAM")]
    program: String,
}

fn run(source: &str) -> i32 {
    let mut interpreter = match Interpreter::new(source) {
        Ok(interpreter) => interpreter,
        Err(err) => {
            cli_util::report_error(source, &err);
            return 1;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = interpreter.run(stdin.lock(), stdout.lock());
    let _ = io::stdout().flush();

    if let Err(err) = result {
        cli_util::report_error(source, &err);
        return 1;
    }
    0
}

fn main() {
    // A missing argument exits here with clap's usage message and status 2.
    let cli = Cli::parse();
    process::exit(run(&cli.program));
}
