//! The execution engine: tape, cursors, and the dispatch loop.

use std::io::{Read, Write};

use crate::program::Instruction;
use crate::Error;

/// Number of cells on the tape.
pub const TAPE_LEN: usize = 30_000;

/// A Brainfuck interpreter.
///
/// The interpreter owns:
/// - the validated instruction sequence produced by [`crate::clean`],
/// - a zero-initialized memory tape of [`TAPE_LEN`] cells,
/// - a data pointer and an instruction pointer, both starting at 0,
/// - the input and output streams used by `,` and `.`.
///
/// Loop jumps are resolved by scanning the instruction sequence on every
/// jump; nothing is precomputed.
pub struct Interpreter<R, W> {
    code: Vec<Instruction>,
    tape: Vec<u8>,
    pc: usize,
    dp: usize,
    input: R,
    output: W,
}

impl<R: Read, W: Write> Interpreter<R, W> {
    /// Create an interpreter for `code`, reading from `input` on `,` and
    /// writing to `output` on `.`.
    pub fn new(code: Vec<Instruction>, input: R, output: W) -> Self {
        Self {
            code,
            tape: vec![0; TAPE_LEN],
            pc: 0,
            dp: 0,
            input,
            output,
        }
    }

    /// Execute the program until the instruction pointer runs past the end
    /// of the sequence.
    pub fn run(&mut self) -> Result<(), Error> {
        self.execute(false)
    }

    /// Execute like [`run`](Self::run), printing a trace line to stderr
    /// before each dispatch. Tracing does not change execution semantics;
    /// program output still goes to the output stream.
    pub fn run_trace(&mut self) -> Result<(), Error> {
        self.execute(true)
    }

    fn execute(&mut self, trace: bool) -> Result<(), Error> {
        while self.pc < self.code.len() {
            if trace {
                self.print_status();
            }

            match self.code[self.pc] {
                Instruction::MoveRight => {
                    if self.dp >= self.tape.len() - 1 {
                        return Err(Error::PointerOutOfBounds {
                            ip: self.pc,
                            ptr: self.dp,
                            op: '>',
                        });
                    }
                    self.dp += 1;
                }
                Instruction::MoveLeft => {
                    if self.dp == 0 {
                        return Err(Error::PointerOutOfBounds {
                            ip: self.pc,
                            ptr: self.dp,
                            op: '<',
                        });
                    }
                    self.dp -= 1;
                }
                Instruction::Increment => {
                    self.tape[self.dp] = self.tape[self.dp].wrapping_add(1);
                }
                Instruction::Decrement => {
                    self.tape[self.dp] = self.tape[self.dp].wrapping_sub(1);
                }
                Instruction::Output => {
                    let byte = [self.tape[self.dp]];
                    self.output.write_all(&byte).map_err(|source| Error::Io {
                        ip: self.pc,
                        source,
                    })?;
                }
                Instruction::Input => {
                    // Read exactly one byte. A zero-length read means EOF and
                    // leaves the cell unchanged.
                    let mut buf = [0u8; 1];
                    match self.input.read(&mut buf) {
                        Ok(0) => {}
                        Ok(_) => self.tape[self.dp] = buf[0],
                        Err(source) => {
                            return Err(Error::Io {
                                ip: self.pc,
                                source,
                            });
                        }
                    }
                }
                Instruction::LoopStart => {
                    if self.tape[self.dp] == 0 {
                        self.pc = self.find_matching_end()?;
                    }
                }
                Instruction::LoopEnd => {
                    if self.tape[self.dp] != 0 {
                        self.pc = self.find_matching_start()?;
                    }
                }
            }

            // Jump targets above are one position shy of where execution
            // resumes, so this lands every path on the right instruction.
            // A backward jump to before index 0 wraps and re-enters at 0.
            self.pc = self.pc.wrapping_add(1);
        }

        self.output.flush().map_err(|source| Error::Io {
            ip: self.pc,
            source,
        })
    }

    fn print_status(&self) {
        eprintln!(
            "PC: {}\t\tDP: {}\t\tInstruction: {}\t\tMemory: {}",
            self.pc,
            self.dp,
            self.code[self.pc].symbol(),
            self.tape[self.dp]
        );
    }

    /// Scan forward from the `[` at the current instruction pointer and
    /// return the position of its matching `]`.
    fn find_matching_end(&self) -> Result<usize, Error> {
        let mut depth = 0usize;

        for pc in self.pc..self.code.len() {
            match self.code[pc] {
                Instruction::LoopStart => depth += 1,
                Instruction::LoopEnd => depth -= 1,
                _ => {}
            }
            if depth == 0 {
                return Ok(pc);
            }
        }

        Err(Error::UnmatchedJump {
            ip: self.pc,
            op: '[',
        })
    }

    /// Scan backward from the `]` at the current instruction pointer and
    /// return the position immediately before its matching `[`.
    fn find_matching_start(&self) -> Result<usize, Error> {
        let mut depth = 0usize;
        let mut pc = self.pc;

        loop {
            match self.code[pc] {
                Instruction::LoopStart => depth -= 1,
                Instruction::LoopEnd => depth += 1,
                _ => {}
            }
            if depth == 0 {
                return Ok(pc.wrapping_sub(1));
            }
            if pc == 0 {
                return Err(Error::UnmatchedJump {
                    ip: self.pc,
                    op: ']',
                });
            }
            pc -= 1;
        }
    }
}
