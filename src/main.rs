use std::{fs, process::ExitCode};

use clap::Parser;
use spl::run;

/// spl is a small scripting language for integer and floating-point
/// arithmetic.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells spl to read the program from a file instead of taking it
    /// literally.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::from(1);
            },
        }
    } else {
        args.contents
    };

    match run(&script) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            if e.is_fatal() { ExitCode::from(2) } else { ExitCode::FAILURE }
        },
    }
}
