//! Source preprocessing: strip non-instruction bytes and check brace balance.

use crate::{BraceKind, Error};

/// One of the eight Brainfuck instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `>` — move the data pointer one cell to the right.
    MoveRight,
    /// `<` — move the data pointer one cell to the left.
    MoveLeft,
    /// `+` — increment the current cell, wrapping modulo 256.
    Increment,
    /// `-` — decrement the current cell, wrapping modulo 256.
    Decrement,
    /// `.` — write the current cell to the output stream.
    Output,
    /// `,` — read one byte from the input stream into the current cell.
    Input,
    /// `[` — jump past the matching `]` when the current cell is zero.
    LoopStart,
    /// `]` — jump back to the matching `[` when the current cell is nonzero.
    LoopEnd,
}

impl Instruction {
    /// Recognize a source byte as an instruction. Every other byte is a
    /// comment and yields `None`.
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'>' => Some(Instruction::MoveRight),
            b'<' => Some(Instruction::MoveLeft),
            b'+' => Some(Instruction::Increment),
            b'-' => Some(Instruction::Decrement),
            b'.' => Some(Instruction::Output),
            b',' => Some(Instruction::Input),
            b'[' => Some(Instruction::LoopStart),
            b']' => Some(Instruction::LoopEnd),
            _ => None,
        }
    }

    /// The source character for this instruction, for diagnostics.
    pub fn symbol(self) -> char {
        match self {
            Instruction::MoveRight => '>',
            Instruction::MoveLeft => '<',
            Instruction::Increment => '+',
            Instruction::Decrement => '-',
            Instruction::Output => '.',
            Instruction::Input => ',',
            Instruction::LoopStart => '[',
            Instruction::LoopEnd => ']',
        }
    }
}

/// Filter raw source bytes down to the instruction sequence and verify that
/// loop braces balance.
///
/// Non-instruction bytes (whitespace, comments, anything else) are discarded
/// silently; the relative order of instructions is preserved. Brace checking
/// is strict: a `]` with no open `[` fails immediately, and any `[` still
/// open at the end of the program fails, so inputs like `"]["` are rejected
/// even though their nesting counts sum to zero.
pub fn clean(source: &[u8]) -> Result<Vec<Instruction>, Error> {
    let mut code = Vec::with_capacity(source.len() / 2);
    let mut depth: usize = 0;

    for &b in source {
        let Some(instruction) = Instruction::from_byte(b) else {
            continue;
        };
        match instruction {
            Instruction::LoopStart => depth += 1,
            Instruction::LoopEnd => {
                if depth == 0 {
                    return Err(Error::UnbalancedBraces {
                        ip: code.len(),
                        kind: BraceKind::Close,
                    });
                }
                depth -= 1;
            }
            _ => {}
        }
        code.push(instruction);
    }

    if depth != 0 {
        // Report the last unclosed '[' in the filtered sequence.
        let ip = code
            .iter()
            .rposition(|&i| i == Instruction::LoopStart)
            .unwrap_or(0);
        return Err(Error::UnbalancedBraces {
            ip,
            kind: BraceKind::Open,
        });
    }

    Ok(code)
}
