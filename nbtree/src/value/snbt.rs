//! Stringified NBT output through `Display`.
//!
//! The output is read back by the `nbtree-snbt` parser into an equal tree.
//! Floating point values keep their numeric value but not necessarily their
//! original spelling.

use std::fmt::{self, Display, Formatter, Write};

use super::{Compound, List, Value};

fn is_unquoted_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '+' | '_' | '.')
}

fn write_escaped_str(f: &mut Formatter<'_>, v: &str) -> fmt::Result {
    f.write_char('"')?;
    let mut start = 0;
    for (i, c) in v.char_indices() {
        if c != '"' && c != '\\' {
            continue;
        }
        f.write_str(&v[start..i])?;
        f.write_char('\\')?;
        f.write_char(c)?;
        start = i + 1;
    }
    f.write_str(&v[start..])?;
    f.write_char('"')
}

fn write_key(f: &mut Formatter<'_>, key: &str) -> fmt::Result {
    if !key.is_empty() && key.chars().all(is_unquoted_char) {
        f.write_str(key)
    } else {
        write_escaped_str(f, key)
    }
}

fn write_int<I: itoa::Integer>(f: &mut Formatter<'_>, v: I, suffix: &str) -> fmt::Result {
    let mut buffer = itoa::Buffer::new();
    f.write_str(buffer.format(v))?;
    f.write_str(suffix)
}

fn write_array<I: itoa::Integer + Copy>(
    f: &mut Formatter<'_>,
    prefix: &str,
    data: &[I],
    suffix: &str,
) -> fmt::Result {
    f.write_str(prefix)?;
    for (i, v) in data.iter().enumerate() {
        if i != 0 {
            f.write_char(',')?;
        }
        write_int(f, *v, suffix)?;
    }
    f.write_char(']')
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Byte(v) => write_int(f, *v, "b"),
            Value::Short(v) => write_int(f, *v, "s"),
            Value::Int(v) => write_int(f, *v, ""),
            Value::Long(v) => write_int(f, *v, "l"),
            // Display never uses exponents, which the parser would not accept.
            Value::Float(v) => write!(f, "{}f", v),
            Value::Double(v) => write!(f, "{}d", v),
            Value::String(v) => write_escaped_str(f, v),
            Value::ByteArray(v) => write_array(f, "[B;", v.as_slice(), "b"),
            Value::IntArray(v) => write_array(f, "[I;", v.as_slice(), ""),
            Value::LongArray(v) => write_array(f, "[L;", v.as_slice(), "l"),
            Value::List(v) => v.fmt(f),
            Value::Compound(v) => v.fmt(f),
        }
    }
}

impl Display for List {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (i, v) in self.iter().enumerate() {
            if i != 0 {
                f.write_char(',')?;
            }
            v.fmt(f)?;
        }
        f.write_char(']')
    }
}

impl Display for Compound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i != 0 {
                f.write_char(',')?;
            }
            write_key(f, k)?;
            f.write_char(':')?;
            v.fmt(f)?;
        }
        f.write_char('}')
    }
}

#[cfg(test)]
mod tests {
    use crate::{ByteArray, Compound, IntArray, List, LongArray, Tag, Value};

    #[test]
    fn scalars_carry_suffixes() {
        assert_eq!(Value::Byte(5).to_string(), "5b");
        assert_eq!(Value::Short(-5).to_string(), "-5s");
        assert_eq!(Value::Int(5).to_string(), "5");
        assert_eq!(Value::Long(5).to_string(), "5l");
        assert_eq!(Value::Float(1.5).to_string(), "1.5f");
        assert_eq!(Value::Double(0.25).to_string(), "0.25d");
    }

    #[test]
    fn strings_are_escaped() {
        let v = Value::from(r#"say "hi" \o/"#);
        assert_eq!(v.to_string(), r#""say \"hi\" \\o/""#);
    }

    #[test]
    fn arrays() {
        assert_eq!(
            Value::ByteArray(ByteArray::new(vec![1, -2])).to_string(),
            "[B;1b,-2b]"
        );
        assert_eq!(Value::IntArray(IntArray::new(vec![])).to_string(), "[I;]");
        assert_eq!(
            Value::LongArray(LongArray::new(vec![7])).to_string(),
            "[L;7l]"
        );
    }

    #[test]
    fn keys_are_quoted_only_when_needed() {
        let c = Compound::from([("plain_key", 1)]);
        assert_eq!(c.to_string(), "{plain_key:1}");

        let c = Compound::from([("has space", 1)]);
        assert_eq!(c.to_string(), r#"{"has space":1}"#);

        let c = Compound::from([("", 1)]);
        assert_eq!(c.to_string(), r#"{"":1}"#);
    }

    #[test]
    fn nested_list() {
        let inner = List::from_values(Tag::Short, [1i16, 2]).unwrap();
        let outer = List::from_values(Tag::List, [inner]).unwrap();
        assert_eq!(outer.to_string(), "[[1s,2s]]");
        assert_eq!(List::empty().to_string(), "[]");
    }
}
