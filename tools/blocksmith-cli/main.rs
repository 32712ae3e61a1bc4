use blocksmith::prelude::*;
use clap::Parser;
use std::fs;
use std::io::{self, Write};

/// Render a canvas snapshot into Clarity contract source.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the canvas snapshot JSON exported by the editor
    input: String,

    /// Write the generated contract here instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Run the rule-based validator over the generated text
    #[arg(long)]
    lint: bool,
}

fn main() {
    let cli = Cli::parse();

    let json = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Failed to read canvas file '{}': {}", cli.input, e);
            std::process::exit(1);
        }
    };

    let canvas = match UiCanvas::from_json(&json) {
        Ok(canvas) => canvas,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let graph = match canvas.into_graph() {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let source = Generator::new(&graph).generate();

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &source) {
                eprintln!("Failed to write contract to '{}': {}", path, e);
                std::process::exit(1);
            }
            println!("Wrote generated contract to '{}'", path);
        }
        None => {
            if let Err(e) = io::stdout().write_all(source.as_bytes()) {
                eprintln!("Failed to write to stdout: {}", e);
                std::process::exit(1);
            }
        }
    }

    if cli.lint {
        let report = validate(&source);
        for warning in &report.warnings {
            eprintln!("warning: {}", warning);
        }
        for error in &report.errors {
            eprintln!("error: {}", error);
        }
        if !report.errors.is_empty() {
            std::process::exit(2);
        }
    }
}
