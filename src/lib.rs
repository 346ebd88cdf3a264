//! A tiny Brainfuck interpreter library.
//!
//! This crate provides a minimal Brainfuck interpreter that operates on a
//! memory tape (30,000 cells) with a single data pointer.
//!
//! Features and behaviors:
//! - Memory tape initialized to 0; cell arithmetic wraps modulo 256.
//! - Strict pointer bounds: moving left from cell 0 or right past the end
//!   returns an error.
//! - Input `,` reads a single byte from the input stream; on EOF the current
//!   cell is left unchanged.
//! - Output `.` writes the byte at the current cell to the output stream.
//! - Non-instruction characters are stripped before execution; unbalanced
//!   brackets are reported as errors before any instruction runs.
//! - Loop jumps are resolved by a fresh linear scan on every jump, with
//!   nested-bracket depth tracking. There is no precomputed jump table.
//!
//! Quick start:
//!
//! ```no_run
//! use minibf::{clean, Interpreter};
//!
//! let code = clean(b"++>+++++[<+>-]<.").expect("balanced program");
//! let mut bf = Interpreter::new(code, std::io::empty(), std::io::stdout());
//! bf.run().expect("program should run");
//! ```

use std::fmt;

pub mod config;
pub mod interpreter;
pub mod program;

pub use config::{Config, Source};
pub use interpreter::{Interpreter, TAPE_LEN};
pub use program::{clean, Instruction};

/// Errors that can occur while preparing or interpreting Brainfuck code.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Loop brackets did not balance; found during preprocessing.
    #[error("Unbalanced braces: unmatched {kind} at instruction {ip}")]
    UnbalancedBraces { ip: usize, kind: BraceKind },

    /// The data pointer attempted to move left of cell 0 or beyond the last cell.
    #[error("Pointer out of bounds at instruction {ip} (ptr={ptr}, op='{op}')")]
    PointerOutOfBounds { ip: usize, ptr: usize, op: char },

    /// A jump scan ran off the end of the program. Unreachable for any
    /// sequence that passed [`clean`]; kept as a hard error rather than a panic.
    #[error("No matching brace for '{op}' at instruction {ip}")]
    UnmatchedJump { ip: usize, op: char },

    /// An underlying I/O error occurred on the input or output stream.
    #[error("I/O error at instruction {ip}: {source}")]
    Io {
        ip: usize,
        #[source]
        source: std::io::Error,
    },
}

/// Which side of a loop was unmatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BraceKind {
    Open,
    Close,
}

impl fmt::Display for BraceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BraceKind::Open => write!(f, "'['"),
            BraceKind::Close => write!(f, "']'"),
        }
    }
}
