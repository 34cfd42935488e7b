//! MiniPL command-line interpreter.

use minipl_diagnostic::ColorMode;
use miniplc::commands::{check_file, lex_file, parse_file, run_file};
use miniplc::{init_tracing, ExitStatus};

fn main() {
    init_tracing();

    let mut color = ColorMode::Auto;
    let mut args: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        if let Some(value) = arg.strip_prefix("--color=") {
            let Some(mode) = ColorMode::from_flag(value) else {
                eprintln!("error: invalid value '{value}' for --color");
                eprintln!("Valid values: auto, always, never");
                exit(ExitStatus::Usage);
            };
            color = mode;
        } else {
            args.push(arg);
        }
    }

    let Some(command) = args.first() else {
        print_usage();
        return;
    };

    let status = match command.as_str() {
        "run" => run_file(file_arg(&args, "run"), color),
        "check" => check_file(file_arg(&args, "check"), color),
        "lex" => lex_file(file_arg(&args, "lex"), color),
        "parse" => parse_file(file_arg(&args, "parse"), color),
        "help" | "--help" | "-h" => {
            print_usage();
            ExitStatus::Success
        }
        "version" | "--version" | "-V" => {
            println!("MiniPL {}", env!("CARGO_PKG_VERSION"));
            ExitStatus::Success
        }
        _ => {
            // If it looks like a source file, run it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("mpl"))
            {
                run_file(command, color)
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                ExitStatus::Usage
            }
        }
    };
    exit(status);
}

/// The file operand of `command`, or a usage error.
fn file_arg<'a>(args: &'a [String], command: &str) -> &'a str {
    match args.get(1) {
        Some(path) => path,
        None => {
            eprintln!("Usage: minipl {command} <file.mpl>");
            exit(ExitStatus::Usage);
        }
    }
}

fn exit(status: ExitStatus) -> ! {
    std::process::exit(status.code())
}

fn print_usage() {
    println!("MiniPL interpreter");
    println!();
    println!("Usage: minipl <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.mpl>       Run a MiniPL program");
    println!("  check <file.mpl>     Lex, parse, and type check (no execution)");
    println!("  lex <file.mpl>       Tokenize and display tokens");
    println!("  parse <file.mpl>     Parse and display statements");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --color=<when>       Color diagnostics: auto (default), always, never");
    println!();
    println!("Environment:");
    println!("  MINIPL_LOG           Tracing filter (falls back to RUST_LOG)");
    println!();
    println!("Exit codes:");
    println!("  0  success           1  lexical or parse error");
    println!("  2  type error        3  runtime error");
    println!("  64 usage error       66 unreadable input file");
    println!();
    println!("Examples:");
    println!("  minipl run hello.mpl");
    println!("  minipl hello.mpl                  # same as run");
    println!("  minipl check hello.mpl --color=never");
    println!("  MINIPL_LOG=minipl_eval=trace minipl run loop.mpl");
}
