//! The Brainfuck execution engine.
//!
//! [`Interpreter`] parses a program into its instruction stream, validates
//! bracket nesting while building the jump table, then drives a flat step
//! loop against a [`Memory`] store, an input stream, and an output stream.
//!
//! The program is parsed one instruction per source character, so every
//! instruction index equals the absolute character offset in the original
//! text and all error positions cite the source directly.

use std::io::{Read, Write};

use crate::tape::{Memory, Tape};

/// Errors that can occur while parsing or running a Brainfuck program.
///
/// The unmatched-bracket variants are structural: they are raised before any
/// instruction executes, so a structurally invalid program can produce no
/// output and consume no input. The remaining variants are runtime errors;
/// output already emitted before the failing instruction stands.
#[derive(Debug, thiserror::Error)]
pub enum BrainfuckError {
    /// A `]` with no `[` left to match it.
    #[error("Parse error: unmatched ']' at position {position}")]
    UnmatchedClose { position: usize },

    /// A `[` still pending after the full program was scanned.
    #[error("Parse error: unmatched '[' at position {position}")]
    UnmatchedOpen { position: usize },

    /// A `<` attempted to move the data pointer below cell 0.
    #[error("Runtime error: data pointer moved left of cell 0 at instruction {ip}")]
    TapeUnderflow { ip: usize },

    /// A `,` executed with no byte left on the input stream.
    #[error("Runtime error: input exhausted by ',' at instruction {ip}")]
    InputExhausted { ip: usize },

    /// An underlying I/O error from the input or output stream.
    #[error("I/O error at instruction {ip}: {source}")]
    Io {
        ip: usize,
        #[source]
        source: std::io::Error,
    },
}

impl BrainfuckError {
    /// Character offset in the program text this error refers to.
    pub fn position(&self) -> usize {
        match self {
            Self::UnmatchedClose { position } | Self::UnmatchedOpen { position } => *position,
            Self::TapeUnderflow { ip } | Self::InputExhausted { ip } | Self::Io { ip, .. } => *ip,
        }
    }
}

/// The closed instruction set: eight meaningful characters, everything else
/// a no-op that only advances the instruction pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Instruction {
    MoveRight,
    MoveLeft,
    Increment,
    Decrement,
    Output,
    Input,
    LoopStart,
    LoopEnd,
    Nop,
}

impl Instruction {
    fn from_char(c: char) -> Self {
        match c {
            '>' => Self::MoveRight,
            '<' => Self::MoveLeft,
            '+' => Self::Increment,
            '-' => Self::Decrement,
            '.' => Self::Output,
            ',' => Self::Input,
            '[' => Self::LoopStart,
            ']' => Self::LoopEnd,
            _ => Self::Nop,
        }
    }
}

/// Build the jump table with a single stack-based pass.
///
/// `jump_map[i]` holds the matching bracket position for the `[` or `]` at
/// position `i`, and `None` elsewhere. One table serves both directions
/// because a position is either a `[` or a `]`, never both.
fn build_jump_map(program: &[Instruction]) -> Result<Vec<Option<usize>>, BrainfuckError> {
    let mut jump_map: Vec<Option<usize>> = vec![None; program.len()];
    let mut pending: Vec<usize> = Vec::new();

    for (i, instruction) in program.iter().enumerate() {
        match instruction {
            Instruction::LoopStart => pending.push(i),
            Instruction::LoopEnd => {
                let Some(open) = pending.pop() else {
                    return Err(BrainfuckError::UnmatchedClose { position: i });
                };
                jump_map[open] = Some(i);
                jump_map[i] = Some(open);
            }
            _ => {}
        }
    }

    // Report the innermost '[' still pending after the scan.
    if let Some(open) = pending.last().copied() {
        return Err(BrainfuckError::UnmatchedOpen { position: open });
    }

    Ok(jump_map)
}

/// A Brainfuck interpreter.
///
/// The interpreter owns the parsed instruction stream, the precomputed jump
/// table, the execution state (instruction pointer, data pointer), and the
/// memory store. Construction performs the full parse and bracket
/// validation, so an invalid program never reaches [`run`](Self::run).
///
/// One instance drives at most one execution at a time; input and output
/// streams are supplied to `run` and used only for the `,` and `.`
/// instructions respectively.
#[derive(Debug)]
pub struct Interpreter<M = Tape> {
    program: Vec<Instruction>,
    jump_map: Vec<Option<usize>>,
    ip: usize,
    pointer: usize,
    memory: M,
}

impl Interpreter<Tape> {
    /// Parse and validate `source`, pairing the interpreter with a fresh
    /// empty [`Tape`].
    pub fn new(source: &str) -> Result<Self, BrainfuckError> {
        Self::with_memory(source, Tape::new())
    }
}

impl<M: Memory> Interpreter<M> {
    /// Parse and validate `source`, using a caller-supplied memory store.
    ///
    /// The store is returned by [`into_memory`](Self::into_memory) after the
    /// run, so callers that want to inspect or reuse the tape can.
    pub fn with_memory(source: &str, memory: M) -> Result<Self, BrainfuckError> {
        let program: Vec<Instruction> = source.chars().map(Instruction::from_char).collect();
        let jump_map = build_jump_map(&program)?;
        Ok(Self {
            program,
            jump_map,
            ip: 0,
            pointer: 0,
            memory,
        })
    }

    /// The memory store, for inspection.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Consume the interpreter and hand back its memory store.
    pub fn into_memory(self) -> M {
        self.memory
    }

    /// Run the program to completion against `input` and `output`.
    ///
    /// Returns as soon as the instruction pointer reaches the end of the
    /// program, or with the first runtime error. Output is written one byte
    /// per `.`; flushing is left to the caller.
    pub fn run<R, W>(&mut self, mut input: R, mut output: W) -> Result<(), BrainfuckError>
    where
        R: Read,
        W: Write,
    {
        while self.ip < self.program.len() {
            self.step(&mut input, &mut output)?;
        }
        Ok(())
    }

    fn step<R, W>(&mut self, input: &mut R, output: &mut W) -> Result<(), BrainfuckError>
    where
        R: Read,
        W: Write,
    {
        match self.program[self.ip] {
            Instruction::MoveRight => self.pointer += 1,
            Instruction::MoveLeft => {
                if self.pointer == 0 {
                    return Err(BrainfuckError::TapeUnderflow { ip: self.ip });
                }
                self.pointer -= 1;
            }
            Instruction::Increment => {
                let value = self.memory.read(self.pointer).wrapping_add(1);
                self.memory.write(self.pointer, value);
            }
            Instruction::Decrement => {
                let value = self.memory.read(self.pointer).wrapping_sub(1);
                self.memory.write(self.pointer, value);
            }
            Instruction::Output => {
                let byte = [self.memory.read(self.pointer)];
                output.write_all(&byte).map_err(|source| BrainfuckError::Io {
                    ip: self.ip,
                    source,
                })?;
            }
            Instruction::Input => {
                let mut buf = [0u8; 1];
                match input.read(&mut buf) {
                    Ok(0) => return Err(BrainfuckError::InputExhausted { ip: self.ip }),
                    Ok(_) => self.memory.write(self.pointer, buf[0]),
                    Err(source) => {
                        return Err(BrainfuckError::Io {
                            ip: self.ip,
                            source,
                        });
                    }
                }
            }
            Instruction::LoopStart => {
                if self.memory.read(self.pointer) == 0 {
                    // Skip the body; the advance below steps past the ']'.
                    self.ip = self.jump_map[self.ip].expect("validated bracket");
                }
            }
            Instruction::LoopEnd => {
                // Land back on the matching '[' so it re-checks the cell.
                self.ip = self.jump_map[self.ip].expect("validated bracket");
                return Ok(());
            }
            Instruction::Nop => {}
        }
        self.ip += 1;
        Ok(())
    }
}

/// Execute `program` with a fresh tape against locked stdin/stdout.
pub fn execute(program: &str) -> Result<(), BrainfuckError> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Interpreter::new(program)?.run(stdin.lock(), stdout.lock())
}
