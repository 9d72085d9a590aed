//! Tree inspector for slate
//! Parses an XML document and dumps the element tree as JSON, without
//! running the conversion. Useful for checking what the converter will
//! actually walk, tag by tag, before the vocabulary rules apply.

use clap::{Arg, ArgAction, Command};
use serde_json::json;
use slate_config::Loader;
use slate_parser::slate::document::Element;
use slate_parser::slate::loader::DocumentLoader;

fn main() {
    let matches = Command::new("slate-inspect")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Dumps the parsed element tree of an XML document as JSON")
        .arg(
            Arg::new("input")
                .help("Path of the XML document to inspect")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .help("Print the tree on a single line")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let input_path = matches
        .get_one::<String>("input")
        .expect("input is required");

    let mut loader = Loader::new();
    if matches.get_flag("compact") {
        loader = loader.set_override("inspect.pretty", false).unwrap_or_else(|e| {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        });
    }
    let settings = loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let root = DocumentLoader::from_path(input_path)
        .and_then(|loader| loader.parse())
        .unwrap_or_else(|e| {
            eprintln!("Error inspecting '{}': {}", input_path, e);
            std::process::exit(1);
        });

    let tree = element_to_json(&root);
    let rendered = if settings.inspect.pretty {
        serde_json::to_string_pretty(&tree)
    } else {
        serde_json::to_string(&tree)
    };
    match rendered {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("JSON serialization failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Convert an element to a JSON-serializable format
///
/// Attributes are emitted as an array of name/value pairs so their
/// document order survives the dump.
fn element_to_json(element: &Element) -> serde_json::Value {
    json!({
        "tag": element.tag,
        "attributes": element
            .attributes
            .iter()
            .map(|(name, value)| json!({ "name": name, "value": value }))
            .collect::<Vec<_>>(),
        "text": element.text,
        "children": element.children.iter().map(element_to_json).collect::<Vec<_>>(),
    })
}
