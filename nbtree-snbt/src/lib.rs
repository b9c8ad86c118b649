//! Parse stringified NBT (SNBT), the text form of NBT used in Minecraft
//! commands, into [`nbtree`] values.
//!
//! ```
//! use nbtree::{Tag, Value};
//!
//! let item = nbtree_snbt::compound_from_str(r#"{id:"minecraft:diamond",Count:3b}"#).unwrap();
//! assert_eq!(item.get_str("id"), Some("minecraft:diamond"));
//! assert_eq!(item.get("Count"), Some(&Value::Byte(3)));
//!
//! let list = nbtree_snbt::list_from_str("[1.5d, 2d]").unwrap();
//! assert_eq!(list.content_tag(), Tag::Double);
//! ```
//!
//! Unquoted literals are typed by their shape: `5` is an Int, `5b` a Byte,
//! `5s` a Short, `5l` a Long, `5.0f` a Float and `5.0d` a Double. Anything
//! quoted, and anything unquoted that is not a number, is a String. Note that
//! a bare `1.5` has no suffix and so is the string `"1.5"`.
//!
//! Writing SNBT is done through the `Display` implementation of
//! [`nbtree::Value`], and the output parses back into an equal value.

use nbtree::error::Result;
use nbtree::{Compound, List, Value};

use de::Parser;

pub mod de;
mod input;
mod parser;


/// Parse a single value of any kind. Surrounding whitespace is ignored,
/// anything else after the value is an error.
pub fn from_str(input: &str) -> Result<Value> {
    parse_all(input, Parser::read_value)
}

/// Parse a compound, `{...}`.
pub fn compound_from_str(input: &str) -> Result<Compound> {
    parse_all(input, Parser::read_compound)
}

/// Parse a list, `[...]`. Typed arrays are not lists; read them with
/// [`from_str`].
pub fn list_from_str(input: &str) -> Result<List> {
    parse_all(input, Parser::read_list)
}

fn parse_all<'a, T>(input: &'a str, read: impl FnOnce(&mut Parser<'a>) -> Result<T>) -> Result<T> {
    let mut parser = Parser::new(input.trim());
    let value = read(&mut parser)?;
    parser.finish()?;
    Ok(value)
}
