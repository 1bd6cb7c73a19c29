//! codeshot CLI
//!
//! Syntax-colored code rendering in the terminal.

use codeshot::commands::{lex_files, list_languages, show_file, CliError, LexOptions, ShowOptions};

fn main() {
    codeshot::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: codeshot lex <file>... [--lang <id>]");
                std::process::exit(1);
            }
            LexOptions::parse(&args[2..]).and_then(|options| lex_files(&options))
        }
        "show" => {
            if args.len() < 3 {
                eprintln!("Usage: codeshot show <file> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --lang <id>            Language id or alias (default: from extension)");
                eprintln!("  --color <kind>=<hex>   Override a token color, e.g. keyword=#ff8800");
                eprintln!("  --no-gutter            Do not print line numbers");
                std::process::exit(1);
            }
            ShowOptions::parse(&args[2..]).and_then(|options| show_file(&options))
        }
        "languages" => {
            list_languages();
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("codeshot {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = result {
        report(&err);
        std::process::exit(1);
    }
}

fn report(err: &CliError) {
    eprintln!("error: {err}");
    if matches!(err, CliError::Lex(_)) {
        eprintln!("Run `codeshot languages` to see supported languages.");
    }
}

fn print_usage() {
    println!("codeshot: syntax-colored code in the terminal");
    println!();
    println!("Usage: codeshot <command> [options]");
    println!();
    println!("Commands:");
    println!("  show <file>          Print a file with syntax colors");
    println!("  lex <file>...        Tokenize files and display the tokens");
    println!("  languages            List supported languages");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --lang <id>            Language id or alias (default: from extension)");
    println!("  --color <kind>=<hex>   Override a token color (show only)");
    println!("  --no-gutter            Do not print line numbers (show only)");
    println!();
    println!("Token kinds for --color:");
    println!("  keyword identifier number operator bracket comment-line comment-block");
    println!("  string directive space tab newline unknown");
    println!();
    println!("Examples:");
    println!("  codeshot show main.py");
    println!("  codeshot show main.cpp --color keyword=#ff8800 --no-gutter");
    println!("  codeshot show script --lang js");
    println!("  codeshot lex src/*.py");
    println!();
    println!("Set RUST_LOG=codeshot_lexer=debug to trace lexing on stderr.");
}
