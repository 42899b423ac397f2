//! Ilys compiler CLI.
//!
//! Currently exposes the lexing front end: `ilys lex <file.ilys>` dumps the
//! token stream for a source file.

use ilysc::commands::lex_file;

fn main() {
    ilysc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: ilys lex <file.ilys>");
                std::process::exit(1);
            }

            let diagnostics = lex_file(&args[2]);
            if diagnostics > 0 {
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Ilys compiler");
    println!();
    println!("Usage: ilys <command> [arguments]");
    println!();
    println!("Commands:");
    println!("  lex <file.ilys>    Tokenize a source file and dump the token stream");
    println!("  help               Show this message");
}
