//! Command-line interface for ziwei-markup
//! Highlights chart analysis text and prints it in one of the registered formats.
//!
//! Usage:
//!   ziwei-markup render `<path>` [--format `<format>`]   - Highlight a message (`-` reads stdin)
//!   ziwei-markup questions `<path>`                     - Print the follow-up questions
//!   ziwei-markup dump-dictionary                      - Print the active dictionary as YAML
//!   ziwei-markup list-formats                         - List all available output formats
//!
//! Every command accepts `--dictionary <yaml>` to layer a dictionary file over
//! the built-in lists. Set `RUST_LOG=debug` for pipeline logging on stderr.

use clap::{Arg, ArgMatches, Command};
use std::io::Read;
use tracing_subscriber::EnvFilter;
use ziwei_markup::markup::{DictionaryConfig, FormatRegistry, Highlighter};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("ziwei-markup")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Term highlighting for chart analysis text")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("dictionary")
                .long("dictionary")
                .short('d')
                .help("YAML dictionary file layered over the built-in lists")
                .global(true),
        )
        .subcommand(
            Command::new("render")
                .about("Highlight a message")
                .arg(
                    Arg::new("path")
                        .help("Path to the message text, or '-' for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'tag', 'json')")
                        .default_value("tag"),
                ),
        )
        .subcommand(
            Command::new("questions")
                .about("Print the follow-up questions of a message")
                .arg(
                    Arg::new("path")
                        .help("Path to the message text, or '-' for stdin")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("dump-dictionary").about("Print the active dictionary as YAML"))
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    let config = load_config(&matches);

    match matches.subcommand() {
        Some(("render", render_matches)) => {
            let path = required(render_matches, "path");
            let format = required(render_matches, "format");
            handle_render_command(&config, path, format);
        }
        Some(("questions", questions_matches)) => {
            let path = required(questions_matches, "path");
            handle_questions_command(&config, path);
        }
        Some(("dump-dictionary", _)) => {
            handle_dump_dictionary_command(&config);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_else(|| {
            eprintln!("Error: missing argument '{}'", name);
            std::process::exit(2);
        })
}

fn load_config(matches: &ArgMatches) -> DictionaryConfig {
    let Some(path) = matches
        .subcommand()
        .and_then(|(_, sub)| sub.get_one::<String>("dictionary"))
        .or_else(|| matches.get_one::<String>("dictionary"))
    else {
        return DictionaryConfig::default();
    };

    DictionaryConfig::from_yaml_file(path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    })
}

fn build_highlighter(config: &DictionaryConfig) -> Highlighter {
    Highlighter::from_config(config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    })
}

fn read_input(path: &str) -> String {
    let result = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer).map(|_| buffer)
    } else {
        std::fs::read_to_string(path)
    };

    result.unwrap_or_else(|e| {
        eprintln!("Error reading input: {}", e);
        std::process::exit(1);
    })
}

/// Handle the render command
fn handle_render_command(config: &DictionaryConfig, path: &str, format: &str) {
    let registry = FormatRegistry::with_defaults();
    if !registry.has(format) {
        eprintln!(
            "Error: unknown format '{}' (available: {})",
            format,
            registry.list_formats().join(", ")
        );
        std::process::exit(1);
    }

    let highlighter = build_highlighter(config);
    let message = highlighter.render(&read_input(path));
    let output = registry.serialize(&message, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    println!("{}", output);
}

/// Handle the questions command
fn handle_questions_command(config: &DictionaryConfig, path: &str) {
    let highlighter = build_highlighter(config);
    let extraction = highlighter.extract(&read_input(path));
    for question in extraction.top_questions() {
        println!("{}", question);
    }
}

/// Handle the dump-dictionary command
fn handle_dump_dictionary_command(config: &DictionaryConfig) {
    match config.to_yaml() {
        Ok(yaml) => print!("{}", yaml),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");
    for name in registry.list_formats() {
        let description = registry.get(&name).map(|f| f.description()).unwrap_or("");
        println!("  {}", name);
        println!("    {}", description);
    }
}
