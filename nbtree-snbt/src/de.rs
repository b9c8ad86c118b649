//! A recursive descent parser from SNBT text to [`nbtree`] values.
//!
//! Most callers want the functions at the crate root. [`Parser`] is for
//! reading several values out of one string, or for checking exactly where a
//! value ended.

use nbtree::de::MAX_DEPTH;
use nbtree::error::{Error, Result};
use nbtree::{ByteArray, Compound, IntArray, List, LongArray, Tag, Value};

use crate::input::Input;
use crate::parser;

pub struct Parser<'a> {
    input: Input<'a>,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input: Input::new(input),
            depth: 0,
        }
    }

    /// Byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.input.pos()
    }

    /// Check that nothing but whitespace is left.
    pub fn finish(&mut self) -> Result<()> {
        self.input.skip_whitespace();
        if self.input.is_empty() {
            Ok(())
        } else {
            Err(self
                .input
                .error(format!("unexpected trailing input {:?}", self.input.rest())))
        }
    }

    /// Read a value of any kind, deciding the kind from its first character.
    pub fn read_value(&mut self) -> Result<Value> {
        match self.input.peek() {
            None => Err(Error::unexpected_eof()),
            Some('{') => Ok(Value::Compound(self.read_compound()?)),
            Some('[') => self.read_iterable(),
            Some(_) => self.read_literal(),
        }
    }

    /// Read `{key:value,...}`.
    pub fn read_compound(&mut self) -> Result<Compound> {
        self.nested(Self::read_entries)
    }

    /// Read `[value,...]`. The first element fixes the content tag of the
    /// list, `[]` is a list of End.
    pub fn read_list(&mut self) -> Result<List> {
        self.nested(Self::read_elements)
    }

    // Compounds and lists share the binary decoder's nesting limit.
    fn nested<T>(&mut self, read: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_DEPTH {
            return Err(self.input.error(format!(
                "nested deeper than {} compounds and lists",
                MAX_DEPTH
            )));
        }

        self.depth += 1;
        let value = read(self);
        self.depth -= 1;
        value
    }

    fn read_entries(&mut self) -> Result<Compound> {
        self.input.expect('{', "compound")?;
        let mut compound = Compound::new();

        while !self.closes('}') {
            let key = self.read_string()?;
            self.input.skip_whitespace();
            self.input.expect(':', "compound entry")?;
            self.input.skip_whitespace();

            let value = self.read_value()?;
            compound.insert(key, value);

            if self.entry_ends('}', "compound")? {
                break;
            }
        }

        Ok(compound)
    }

    fn read_elements(&mut self) -> Result<List> {
        self.input.expect('[', "list")?;
        let mut list: Option<List> = None;

        while !self.closes(']') {
            let value = self.read_value()?;

            let list = list.get_or_insert_with(|| List::new(value.tag()));
            if value.tag() != list.content_tag() {
                return Err(self.input.error(format!(
                    "list of {} cannot hold a {}",
                    list.content_tag(),
                    value.tag()
                )));
            }
            list.push(value)?;

            if self.entry_ends(']', "list")? {
                break;
            }
        }

        Ok(list.unwrap_or_else(List::empty))
    }

    /// Read `[B;...]`, `[I;...]` or `[L;...]`. Every element must be a literal
    /// of the array's element kind.
    pub fn read_primitive_array(&mut self) -> Result<Value> {
        self.input.expect('[', "array")?;
        let marker = self.input.next_or_eof()?;
        let element = match marker {
            'B' => Tag::Byte,
            'I' => Tag::Int,
            'L' => Tag::Long,
            other => return Err(self.input.error(format!("unknown array type '{}'", other))),
        };
        self.input.expect(';', "array")?;

        let mut values = Vec::new();
        while !self.closes(']') {
            let value = self.read_literal()?;
            if value.tag() != element {
                return Err(self.input.error(format!(
                    "{} array cannot hold a {}",
                    marker,
                    value.tag()
                )));
            }
            values.extend(value.as_i64());

            if self.entry_ends(']', "array")? {
                break;
            }
        }

        // every value was checked against the element tag, so the casts are
        // lossless.
        Ok(match element {
            Tag::Byte => {
                Value::ByteArray(values.into_iter().map(|v| v as i8).collect::<ByteArray>())
            }
            Tag::Int => {
                Value::IntArray(values.into_iter().map(|v| v as i32).collect::<IntArray>())
            }
            _ => Value::LongArray(LongArray::new(values)),
        })
    }

    /// Read a quoted or unquoted string. Unquoted strings are never
    /// interpreted as numbers here; that only happens for values.
    pub fn read_string(&mut self) -> Result<String> {
        let rest = self.input.rest();

        match self.input.peek() {
            None => Err(Error::unexpected_eof()),
            Some('"') | Some('\'') => match parser::quoted(rest) {
                Ok((remaining, s)) => {
                    self.input.advance(rest.len() - remaining.len());
                    Ok(s.into_owned())
                }
                Err(_) => Err(Error::unexpected_eof()),
            },
            Some(c) => match parser::unquoted(rest) {
                Ok((remaining, s)) => {
                    self.input.advance(rest.len() - remaining.len());
                    Ok(s.to_owned())
                }
                Err(_) => Err(self
                    .input
                    .error(format!("expected a string, found '{}'", c))),
            },
        }
    }

    // `[B;`, `[I;` and `[L;` start typed arrays. Anything else after `[` is
    // a list, including a quoted first element such as `[";"]`.
    fn read_iterable(&mut self) -> Result<Value> {
        let typed = matches!(self.input.peek_nth(1), Some('B' | 'I' | 'L'))
            && self.input.peek_nth(2) == Some(';');

        if typed {
            self.read_primitive_array()
        } else {
            Ok(Value::List(self.read_list()?))
        }
    }

    fn read_literal(&mut self) -> Result<Value> {
        let is_quoted = matches!(self.input.peek(), Some('"') | Some('\''));
        let literal = self.read_string()?;

        if is_quoted {
            Ok(Value::String(literal))
        } else {
            parser::classify(&literal)
        }
    }

    /// Skip whitespace, then consume `close` if it is next.
    fn closes(&mut self, close: char) -> bool {
        self.input.skip_whitespace();
        if self.input.peek() == Some(close) {
            self.input.next();
            true
        } else {
            false
        }
    }

    /// After an entry, consume the separator. True if it was `close`, false
    /// if it was a comma and more entries may follow.
    fn entry_ends(&mut self, close: char, what: &str) -> Result<bool> {
        self.input.skip_whitespace();
        match self.input.next_or_eof()? {
            ',' => Ok(false),
            c if c == close => Ok(true),
            c => Err(self.input.error(format!(
                "expected ',' or '{}' after {} entry, found '{}'",
                close, what, c
            ))),
        }
    }
}
