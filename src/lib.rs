//! A tiny Brainfuck interpreter library.
//!
//! This crate provides a minimal Brainfuck interpreter that operates on an
//! unbounded, lazily growing memory tape with a single data pointer.
//!
//! Features and behaviors:
//! - Memory tape starts empty and grows on demand; unwritten cells read as 0.
//! - Cell arithmetic wraps modulo 256.
//! - Moving the data pointer left of cell 0 returns an error.
//! - Input `,` reads a single byte from the input stream; end of stream is a
//!   fatal error.
//! - Output `.` writes the byte at the current cell to the output stream.
//! - Bracket nesting is validated up front; unmatched brackets are reported
//!   with their character position before anything executes.
//! - Any non-Brainfuck character is a no-op, so programs can carry comments.
//!
//! Quick start:
//!
//! ```no_run
//! // Classic "Hello World!" in Brainfuck
//! let code = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";
//! bf::execute(code).expect("program should run");
//! ```
//!
//! For custom streams or a caller-owned tape, use [`Interpreter`] directly:
//!
//! ```
//! use bf::Interpreter;
//!
//! let input = [3u8];
//! let mut output = Vec::new();
//! Interpreter::new(",+.")
//!     .expect("balanced program")
//!     .run(&input[..], &mut output)
//!     .expect("input available");
//! assert_eq!(output, [4]);
//! ```

pub mod cli_util;
mod interpreter;
mod tape;

pub use interpreter::{BrainfuckError, Interpreter, execute};
pub use tape::{Memory, Tape};
