//! Corner Layout CLI
//!
//! Usage:
//!   corner-layout [OPTIONS] [FILE]
//!
//! Options:
//!   -d, --debug    Dump computed child frames to stderr
//!   -c, --compact  Emit SVG without indentation
//!   -h, --help     Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use corner_layout::{render_with_config, RenderConfig, SvgConfig};

#[derive(Parser)]
#[command(name = "corner-layout")]
#[command(about = "Four-corner layout container, visualized as SVG")]
struct Cli {
    /// Scene file in TOML format (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Debug mode: dump computed child frames to stderr
    #[arg(short, long)]
    debug: bool,

    /// Emit SVG without indentation
    #[arg(short, long)]
    compact: bool,
}

fn main() {
    let cli = Cli::parse();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let config = RenderConfig::new()
        .with_svg(SvgConfig::default().with_pretty_print(!cli.compact))
        .with_debug(cli.debug);

    match render_with_config(&source, config) {
        Ok(svg) => {
            println!("{}", svg);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_intro() {
    println!(
        r#"Corner Layout - four-corner layout container, visualized as SVG

USAGE:
    corner-layout [OPTIONS] [FILE]
    corner-layout < scene.toml

OPTIONS:
    -d, --debug      Dump computed child frames to stderr
    -c, --compact    Emit SVG without indentation
    -h, --help       Print help

SCENE FORMAT (TOML):
    [container]
    width = {{ mode = "exact", size = 200 }}     # exact | at-most | unspecified
    height = {{ mode = "unspecified" }}          # omit for wrap-content

    [[children]]                               # up to four get a corner,
    width = 50                                 # in attachment order:
    height = 50                                # top-left, top-right,
    margin = {{ left = 10, top = 10 }}           # bottom-left, bottom-right

QUICK START:
    corner-layout demos/corners.toml > out.svg"#
    );
}
