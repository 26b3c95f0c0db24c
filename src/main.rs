use clap::{Arg, ArgAction, ArgMatches, Command};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::Path;
use tracing::{debug, Level};

use pyhighlight::formatting::Identity;
use pyhighlight::parsing;
use pyhighlight::rendering::{self, Terminal};
use pyhighlight::templating::{self, Bare, Page};

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("pyhighlight")
        .version(VERSION)
        .propagate_version(true)
        .about("Syntax highlighting for Python source.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log details of classification to standard error."),
        )
        .subcommand(
            Command::new("html")
                .about("Render the given Python file as HTML")
                .arg(
                    Arg::new("standalone")
                        .short('s')
                        .long("standalone")
                        .action(ArgAction::SetTrue)
                        .help("Emit a complete HTML page with stylesheet rather than just the highlighted markup."),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .help("Title for the standalone page. Defaults to the filename."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the Python code to highlight, or - for standard input."),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Display the given Python file with syntax highlighting")
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for syntax highlighting even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the Python code to highlight, or - for standard input."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("html", submatches)) => html(submatches),
        Some(("show", submatches)) => show(submatches),
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: pyhighlight [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn html(submatches: &ArgMatches) {
    let filename = filename(submatches);
    let content = load(filename);

    let standalone = submatches.get_flag("standalone");
    debug!(standalone, "Rendering HTML");

    let title = match submatches.get_one::<String>("title") {
        Some(title) => title.clone(),
        None => filename
            .to_string_lossy()
            .to_string(),
    };

    let result = if standalone {
        templating::fill(&Page, &title, &content)
    } else {
        templating::fill(&Bare, &title, &content)
    };

    match result {
        Ok(markup) => println!("{}", markup),
        Err(error) => {
            eprintln!("{}: {}", "error".bright_red(), error);
            std::process::exit(1);
        }
    }
}

fn show(submatches: &ArgMatches) {
    let filename = filename(submatches);
    let content = load(filename);

    let raw_output = submatches.get_flag("raw-control-chars");
    debug!(raw_output, "Rendering for display");

    let result = if raw_output || std::io::stdout().is_terminal() {
        rendering::render(&Terminal, &content)
    } else {
        rendering::render(&Identity, &content)
    };

    print!("{}", result);
}

fn filename(submatches: &ArgMatches) -> &Path {
    // argument is required, so clap has already rejected its absence
    let filename = submatches
        .get_one::<String>("filename")
        .map(String::as_str)
        .unwrap_or("-");
    Path::new(filename)
}

fn load(filename: &Path) -> String {
    match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}: {}", "error".bright_red(), error);
            std::process::exit(1);
        }
    }
}
