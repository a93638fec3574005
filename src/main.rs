use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};

use miniparse::{lexer, parser};

fn main() -> Result<ExitCode> {
    let mut args = std::env::args().skip(1);
    let mut dump_tokens = false;
    let mut input_path: Option<String> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--tokens" | "-t" => dump_tokens = true,
            _ => {
                input_path = Some(arg);
                if args.next().is_some() {
                    bail!("Only one input file is supported");
                }
                break;
            }
        }
    }

    let source = if let Some(path) = input_path {
        fs::read_to_string(&path).with_context(|| format!("Reading {path}"))?
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Reading stdin")?;
        buffer
    };

    if dump_tokens {
        for token in lexer::tokenize(&source) {
            println!("{:?} {:?}", token.kind, token.lexeme);
        }
        return Ok(ExitCode::SUCCESS);
    }

    match parser::parse(&source) {
        Ok(()) => {
            println!("{}", parser::ACCEPTANCE_MESSAGE);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            println!("{err}");
            Ok(ExitCode::FAILURE)
        }
    }
}
