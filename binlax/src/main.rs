//! lax command-line tool for checking and inspecting JSON documents.
//!
//! Usage: lax [OPTIONS] [FILE|DIR]
//!
//! Options:
//!   --check                Check if input is valid (exit 0 if valid, 1 if invalid)
//!   --strict               Reject unknown escape sequences
//!   --max-depth <N>        Maximum container nesting [default: 128, 0 for unbounded]
//!   -g, --get <PATH>       Print the value at a dot-separated path (e.g. items.0.price)
//!   --debug                Print the parsed tree in Debug form
//!   -v, --verbose          Log parser activity to stderr
//!   -h, --help             Print help
//!   -V, --version          Print version
//!
//! With no FILE, or when FILE is `-`, input is read from stdin. A directory
//! processes every `*.json` file inside it.

use liblax::{parse_with_options, EscapeMode, ParseError, ParseOptions, Value, DEFAULT_MAX_DEPTH};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Settings gathered from the command line.
struct Config {
    check_only: bool,
    debug_output: bool,
    get_path: Option<String>,
    options: ParseOptions,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut config = Config {
        check_only: false,
        debug_output: false,
        get_path: None,
        options: ParseOptions::default().with_max_depth(Some(DEFAULT_MAX_DEPTH)),
    };
    let mut verbose = false;
    let mut input_path: Option<&str> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-V" | "--version" => {
                println!("lax {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            "--check" => {
                config.check_only = true;
            }
            "--strict" => {
                config.options.escapes = EscapeMode::Strict;
            }
            "--max-depth" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --max-depth requires a number");
                    process::exit(1);
                }
                match args[i].parse::<usize>() {
                    Ok(0) => config.options.max_depth = None,
                    Ok(n) => config.options.max_depth = Some(n),
                    Err(_) => {
                        eprintln!("Error: Invalid depth: {}", args[i]);
                        process::exit(1);
                    }
                }
            }
            "-g" | "--get" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --get requires a path argument");
                    process::exit(1);
                }
                config.get_path = Some(args[i].clone());
            }
            "--debug" => {
                config.debug_output = true;
            }
            "-v" | "--verbose" => {
                verbose = true;
            }
            "-" => {
                // Explicit stdin
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                process::exit(1);
            }
            _ => {
                if input_path.is_some() {
                    eprintln!("Error: Multiple input paths not supported");
                    process::exit(1);
                }
                input_path = Some(&args[i]);
            }
        }
        i += 1;
    }

    init_tracing(verbose);

    if let Some(path) = input_path {
        if Path::new(path).is_dir() {
            process_directory(path, &config);
            return;
        }
    }

    let input = match input_path {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading {}: {}", path, e);
                process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading stdin: {}", e);
                process::exit(1);
            }
            buffer
        }
    };

    process::exit(process_input(&input, input_path, &config));
}

/// Install a stderr subscriber. `RUST_LOG` applies unless `--verbose` is given.
fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn process_directory(dir_path: &str, config: &Config) {
    let entries = match fs::read_dir(dir_path) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Error reading directory {}: {}", dir_path, e);
            process::exit(1);
        }
    };

    let mut paths: Vec<_> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().map(|e| e == "json").unwrap_or(false))
        .collect();
    paths.sort();
    debug!(dir = dir_path, files = paths.len(), "processing directory");

    let mut had_errors = false;
    for path in paths {
        let path_str = path.to_string_lossy();
        let input = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading {}: {}", path_str, e);
                had_errors = true;
                continue;
            }
        };

        if process_input(&input, Some(&path_str), config) != 0 {
            had_errors = true;
        }
    }

    process::exit(if had_errors { 1 } else { 0 });
}

/// Parse one document and print the result. Returns the exit code.
fn process_input(input: &str, input_file: Option<&str>, config: &Config) -> i32 {
    debug!(file = ?input_file, bytes = input.len(), "read input");

    let value = match parse_with_options(input, &config.options) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("{}", format_error(&e, input, input_file));
            return 1;
        }
    };

    if config.check_only {
        match input_file {
            Some(path) => println!("{}: ok", path),
            None => println!("ok"),
        }
        return 0;
    }

    let target = match &config.get_path {
        Some(path) => navigate(&value, path),
        None => &value,
    };
    if config.debug_output {
        println!("{:#?}", target);
    } else {
        println!("{}", target);
    }
    0
}

/// Walk a dot-separated path. Numeric segments index arrays; every other
/// step is an object key. Missing steps yield null.
fn navigate<'v>(value: &'v Value, path: &str) -> &'v Value {
    path.split('.')
        .filter(|segment| !segment.is_empty())
        .fold(value, |current, segment| {
            match (current, segment.parse::<i64>()) {
                (Value::Array(_), Ok(index)) => current.get(index),
                _ => current.get(segment),
            }
        })
}

fn format_error(err: &ParseError, input: &str, input_file: Option<&str>) -> String {
    match input_file {
        Some(path) => {
            let loc = err.locate(input);
            format!("{}:{}:{}: {}", path, loc.line, loc.column, err)
        }
        None => format!("Parse error: {}", err),
    }
}

fn print_help() {
    println!(
        r#"lax - check and inspect JSON documents

Usage: lax [OPTIONS] [FILE|DIR]

Arguments:
  [FILE|DIR]  Input file or directory of *.json files (stdin if omitted or "-")

Options:
      --check            Check if input is valid (exit 0 if valid, 1 if invalid)
      --strict           Reject unknown escape sequences such as \q
      --max-depth <N>    Maximum container nesting [default: 128, 0 for unbounded]
  -g, --get <PATH>       Print the value at a dot-separated path (e.g. items.0.price)
      --debug            Print the parsed tree in Debug form
  -v, --verbose          Log parser activity to stderr (otherwise RUST_LOG applies)
  -h, --help             Print help
  -V, --version          Print version

Examples:
  lax order.json                    Print the parsed document
  lax -g items.0.product order.json Print one nested value
  lax --check orders/               Validate every *.json file in a directory"#
    );
}
