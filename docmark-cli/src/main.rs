// Command-line interface for docmark
//
// Reads the XML documentation file a compiler writes next to an assembly and turns it into
// Markdown. All the work happens in docmark-core; this binary only reads files, picks the
// configuration and writes the result.
//
// Usage:
//  docmark <input.xml> [--output <file>] [--member <id>]          - Convert to Markdown (default)
//  docmark convert <input.xml> [--output <file>] [--member <id>]  - Same as above (explicit)
//  docmark inspect <input.xml>                                    - Print the parsed model as JSON
//
// Configuration:
//
// ./docmark.toml is layered over the built-in defaults when present. --config <path> adds one
// more file on top, which must exist.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use docmark_config::{DocmarkConfig, Loader};
use docmark_core::model::DocRoot;
use docmark_core::{read_str, ConvertOptions, MarkdownConverter};
use std::fs;

const SUBCOMMANDS: &[&str] = &["convert", "inspect", "help"];

fn build_cli() -> Command {
    Command::new("docmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert XML documentation comments to Markdown")
        .long_about(
            "docmark reads the XML documentation file emitted next to an assembly\n\
            (<doc><members><member name=\"T:...\">...) and writes Markdown.\n\n\
            Commands:\n  \
            - convert: Render documentation as Markdown (default command)\n  \
            - inspect: Print the parsed documentation model as JSON\n\n\
            Examples:\n  \
            docmark Acme.Widgets.xml                        # Markdown to stdout\n  \
            docmark Acme.Widgets.xml -o api.md              # Markdown to a file\n  \
            docmark Acme.Widgets.xml --member T:Acme.Widget # A single member\n  \
            docmark inspect Acme.Widgets.xml                # Model as JSON",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a docmark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Render documentation as Markdown (default command)")
                .long_about(
                    "Render an XML documentation file as Markdown.\n\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    docmark convert Acme.Widgets.xml                 # Markdown to stdout\n  \
                    docmark convert Acme.Widgets.xml -o api.md       # Markdown to a file\n  \
                    docmark Acme.Widgets.xml                         # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input XML documentation file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("member")
                        .long("member")
                        .value_name("ID")
                        .help("Only render the member with this identifier, e.g. T:Acme.Widget")
                        .action(ArgAction::Set)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the parsed documentation model as JSON")
                .arg(
                    Arg::new("input")
                        .help("Input XML documentation file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

/// Parses the arguments, retrying with `convert` injected when the first
/// argument looks like a file rather than a subcommand.
fn parse_args(cli: Command, args: &[String]) -> ArgMatches {
    match cli.clone().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(e) => {
            if args.len() > 1
                && !args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&args[1].as_str())
            {
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);
                match cli.try_get_matches_from(&new_args) {
                    Ok(matches) => matches,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let matches = parse_args(build_cli(), &args);

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let member = sub_matches.get_one::<String>("member").map(|s| s.as_str());
            handle_convert_command(input, output, member, &config);
        }
        Some(("inspect", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_inspect_command(input);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> DocmarkConfig {
    let loader = Loader::new().with_optional_file("docmark.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn read_input(input: &str) -> DocRoot {
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    read_str(&source).unwrap_or_else(|e| {
        eprintln!("Error: {input}: {e}");
        std::process::exit(1);
    })
}

fn handle_convert_command(
    input: &str,
    output: Option<&str>,
    member: Option<&str>,
    config: &DocmarkConfig,
) {
    let root = read_input(input);
    let converter = MarkdownConverter::new(ConvertOptions::from(config));

    let result = match member {
        Some(id) => {
            let found = match &root {
                DocRoot::File(file) => file.member(id),
                DocRoot::Member(m) => Some(m).filter(|m| m.id.as_str() == id),
            };
            let Some(found) = found else {
                eprintln!("Error: Member '{id}' not found in '{input}'");
                std::process::exit(1);
            };
            converter.convert_to_markdown(found)
        }
        None => converter.convert_to_markdown(&root),
    };

    let markdown = result.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    match output {
        Some(path) => {
            fs::write(path, markdown).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{markdown}"),
    }
}

fn handle_inspect_command(input: &str) {
    let root = read_input(input);
    let json = serde_json::to_string_pretty(&root).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    println!("{json}");
}
