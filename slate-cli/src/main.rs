//! Command-line interface for slate
//! This binary converts XML documents into the teaching config language.
//!
//! Usage:
//!   slate `<output>` `<input>`                 - Convert a document
//!   slate `<output>` `<input>` --config `<path>` - Convert with a settings overlay
//!
//! The output path comes first, matching the classroom handout the tool
//! accompanies.

use clap::{Arg, ArgAction, ArgMatches, Command};
use slate_config::{Loader, SlateConfig};
use slate_parser::slate::loader::DocumentLoader;
use std::fs;

fn main() {
    let matches = Command::new("slate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Converts XML documents into the slate config language")
        .arg(
            Arg::new("output")
                .help("Path of the config file to write")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("input")
                .help("Path of the XML document to convert")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML settings file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("trailing-newline")
                .long("trailing-newline")
                .help("End the written file with a newline")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Suppress the summary line on success")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let output_path = matches
        .get_one::<String>("output")
        .expect("output is required");
    let input_path = matches
        .get_one::<String>("input")
        .expect("input is required");

    let settings = load_settings(&matches);
    handle_convert_command(output_path, input_path, &settings);
}

/// Build the effective settings: defaults, then the optional settings file,
/// then CLI flags.
fn load_settings(matches: &ArgMatches) -> SlateConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("trailing-newline") {
        loader = loader
            .set_override("convert.trailing_newline", true)
            .unwrap_or_else(|e| {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            });
    }
    if matches.get_flag("quiet") {
        loader = loader
            .set_override("report.show_summary", false)
            .unwrap_or_else(|e| {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            });
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

/// Handle the convert command
fn handle_convert_command(output_path: &str, input_path: &str, settings: &SlateConfig) {
    let loader = DocumentLoader::from_path(input_path).unwrap_or_else(|e| {
        eprintln!("Error reading '{}': {}", input_path, e);
        std::process::exit(1);
    });

    let mut converted = loader.convert().unwrap_or_else(|e| {
        eprintln!("Conversion error: {}", e);
        std::process::exit(1);
    });
    if settings.convert.trailing_newline {
        converted.push('\n');
    }

    fs::write(output_path, &converted).unwrap_or_else(|e| {
        eprintln!("Error writing '{}': {}", output_path, e);
        std::process::exit(1);
    });

    if settings.report.show_summary {
        println!("Configuration saved to {}", output_path);
    }
}
