use clap::Parser;
use minibf::{clean, Config, Interpreter, Source};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Run a Brainfuck program against a 30,000-cell tape.
///
/// The program is taken from the positional CODE argument, or from a file
/// with --file. Non-instruction characters are ignored. `,` reads one byte
/// from stdin (EOF leaves the cell unchanged) and `.` writes one byte to
/// stdout.
#[derive(Parser, Debug)]
#[command(name = "minibf", version)]
struct Cli {
    /// Read the program from PATH instead of positional CODE
    #[arg(short = 'f', long = "file", value_name = "PATH", conflicts_with = "code")]
    file: Option<PathBuf>,

    /// Print a per-instruction trace line to stderr before each dispatch
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Inline Brainfuck program text
    #[arg(value_name = "CODE", required_unless_present = "file")]
    code: Option<String>,
}

impl Cli {
    fn into_config(self) -> Config {
        let source = match self.file {
            Some(path) => Source::File(path),
            None => Source::Inline(self.code.unwrap_or_default()),
        };
        Config {
            source,
            trace: self.debug,
        }
    }
}

fn run(config: &Config) -> u8 {
    let source = match config.source.read() {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("minibf: failed to read code file: {e}");
            return 1;
        }
    };

    let code = match clean(&source) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("minibf: {e}");
            return 1;
        }
    };

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut bf = Interpreter::new(code, stdin, stdout);

    let result = if config.trace {
        bf.run_trace()
    } else {
        bf.run()
    };

    if let Err(e) = result {
        eprintln!("minibf: {e}");
        return 1;
    }
    0
}

fn main() -> ExitCode {
    let config = Cli::parse().into_config();
    ExitCode::from(run(&config))
}
