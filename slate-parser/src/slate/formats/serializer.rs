//! Config dialect serialization
//!
//! Converts a parsed document tree into the line-oriented config dialect.
//! The walk is a single forward pass in document order and the dispatch is
//! tag-driven, so a recognized tag is processed at any nesting depth, the
//! root included. Unrecognized tags produce no output and no bindings.
//!
//! ## Emitted constructs
//!
//! ```text
//! {{!--
//! a comment block
//! --}}
//! (def port 8080)
//! $[
//!   retries : 3,
//! ]
//! {{!-- |+ port 1| : 8081 --}}
//! ```
//!
//! `const` and dictionary `entry` elements bind their values into the
//! symbol table as they are passed, so an expression may only reference
//! names declared earlier in the document.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::slate::document::Element;
use crate::slate::error::ConvertError;
use crate::slate::eval::evaluate;
use crate::slate::symbols::SymbolTable;

/// Opening marker of a comment block.
pub const COMMENT_START: &str = "{{!--";
/// Closing marker of a comment block.
pub const COMMENT_END: &str = "--}}";
/// Opening marker of a dictionary block.
pub const DICTIONARY_OPEN: &str = "$[";
/// Closing marker of a dictionary block.
pub const DICTIONARY_CLOSE: &str = "]";

/// Identifier grammar: a letter followed by letters or digits.
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9]*$").unwrap());

/// Unsigned-integer-literal grammar. ASCII digits only, no sign.
static VALUE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Serialize a parsed document into the config dialect.
///
/// Lines are joined with `\n` and no trailing newline is appended; that
/// normalization is left to the caller.
pub fn serialize_document(root: &Element) -> Result<String, ConvertError> {
    let mut serializer = ConfigSerializer::new();
    serializer.serialize(root)?;
    Ok(serializer.lines.join("\n"))
}

/// Serializer that walks the element tree and accumulates output lines,
/// binding symbols along the way.
struct ConfigSerializer {
    lines: Vec<String>,
    symbols: SymbolTable,
}

impl ConfigSerializer {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            symbols: SymbolTable::new(),
        }
    }

    fn serialize(&mut self, root: &Element) -> Result<(), ConvertError> {
        for element in root.iter() {
            match element.tag.as_str() {
                "comment" => self.serialize_comment(element),
                "const" => self.serialize_const(element)?,
                "dictionary" => self.serialize_dictionary(element)?,
                "expr" => self.serialize_expr(element)?,
                _ => {}
            }
        }
        Ok(())
    }

    fn serialize_comment(&mut self, element: &Element) {
        self.lines.push(COMMENT_START.to_string());
        let text = element.text.as_deref().unwrap_or("");
        self.lines.push(text.trim().to_string());
        self.lines.push(COMMENT_END.to_string());
    }

    fn serialize_const(&mut self, element: &Element) -> Result<(), ConvertError> {
        let (name, value) = self.bind_definition(element, "const")?;
        self.lines.push(format!("(def {} {})", name, value));
        Ok(())
    }

    /// Direct children tagged `entry` become dictionary lines; any other
    /// child contributes nothing here, though the walk still reaches it on
    /// its own turn.
    fn serialize_dictionary(&mut self, element: &Element) -> Result<(), ConvertError> {
        self.lines.push(DICTIONARY_OPEN.to_string());
        for child in &element.children {
            if child.tag == "entry" {
                let (name, value) = self.bind_definition(child, "dictionary")?;
                self.lines.push(format!("  {} : {},", name, value));
            }
        }
        self.lines.push(DICTIONARY_CLOSE.to_string());
        Ok(())
    }

    fn serialize_expr(&mut self, element: &Element) -> Result<(), ConvertError> {
        let expression = require_attribute(element, "value")?;
        let result = evaluate(expression, &self.symbols)?;
        self.lines.push(format!(
            "{} {} : {} {}",
            COMMENT_START, expression, result, COMMENT_END
        ));
        Ok(())
    }

    /// Validate a name/value attribute pair, bind it, and hand back the
    /// original attribute text for emission. The emitted value keeps its
    /// source spelling, so leading zeros survive in the output even though
    /// the binding is numeric.
    fn bind_definition<'a>(
        &mut self,
        element: &'a Element,
        context: &str,
    ) -> Result<(&'a str, &'a str), ConvertError> {
        let name = require_attribute(element, "name")?;
        let value = require_attribute(element, "value")?;
        if !NAME_PATTERN.is_match(name) {
            return Err(ConvertError::InvalidIdentifier {
                element: context.to_string(),
                name: name.to_string(),
            });
        }
        if !VALUE_PATTERN.is_match(value) {
            return Err(ConvertError::InvalidLiteral {
                element: context.to_string(),
                value: value.to_string(),
            });
        }
        // The grammar admits literals wider than 64 bits; those are
        // declaration errors, not arithmetic ones.
        let bound = value.parse::<i64>().map_err(|_| ConvertError::InvalidLiteral {
            element: context.to_string(),
            value: value.to_string(),
        })?;
        self.symbols.bind(name, bound);
        Ok((name, value))
    }
}

fn require_attribute<'a>(
    element: &'a Element,
    attribute: &str,
) -> Result<&'a str, ConvertError> {
    element
        .attribute(attribute)
        .ok_or_else(|| ConvertError::MissingAttribute {
            element: element.tag.clone(),
            attribute: attribute.to_string(),
        })
}
