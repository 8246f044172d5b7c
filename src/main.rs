use std::{fs, process::ExitCode};

use calcparse::{Limits, Session, util::brackets::is_balanced};
use clap::Parser;

/// calcparse evaluates arithmetic with arbitrary-precision decimals, one
/// statement per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells calcparse to read the source from a file instead of the
    /// argument.
    #[arg(short, long)]
    file: bool,

    /// Prints only the result of the last statement.
    #[arg(short, long)]
    last: bool,

    /// Only checks that brackets are balanced.
    #[arg(short, long)]
    check: bool,

    /// Significant digits kept by arithmetic results.
    #[arg(long, default_value_t = Limits::default().precision)]
    precision: usize,

    contents: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    if args.check {
        return if is_balanced(&source) {
            println!("balanced");
            ExitCode::SUCCESS
        } else {
            println!("unbalanced");
            ExitCode::FAILURE
        };
    }

    let limits = Limits { precision: args.precision,
                          ..Limits::default() };
    let mut session = Session::with_limits(limits);

    // Files usually end with a newline, which the grammar does not allow.
    match session.evaluate(source.trim_end_matches(['\n', '\r'])) {
        Ok(outcomes) => {
            let shown = if args.last {
                outcomes.last().map_or(&[][..], std::slice::from_ref)
            } else {
                &outcomes[..]
            };
            for outcome in shown {
                println!("{outcome}");
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
