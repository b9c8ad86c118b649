//! `nom` recognizers for the pieces of SNBT below the structural level:
//! strings, and the numeric literals hidden among unquoted strings.

use std::borrow::Cow;
use std::str::FromStr;

use log::trace;
use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{all_consuming, opt, recognize},
    error::ErrorKind,
    sequence::{delimited, pair, terminated, tuple},
    IResult,
};

use nbtree::error::{Error, Result};
use nbtree::{Tag, Value};

/// Characters allowed in a string without quotes.
pub fn is_unquoted_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '+' | '_' | '.')
}

/// A non-empty run of unquoted characters.
pub fn unquoted(input: &str) -> IResult<&str, &str> {
    take_while1(is_unquoted_char)(input)
}

/// A string in double or single quotes. A backslash takes the next character
/// literally and is itself dropped.
pub fn quoted(input: &str) -> IResult<&str, Cow<'_, str>> {
    alt((
        delimited(char('"'), escaped_until('"'), char('"')),
        delimited(char('\''), escaped_until('\''), char('\'')),
    ))(input)
}

fn escaped_until<'a>(quote: char) -> impl FnMut(&'a str) -> IResult<&'a str, Cow<'a, str>> {
    move |input: &'a str| {
        let mut owned: Option<String> = None;
        let mut start = 0;
        let mut chars = input.char_indices();

        while let Some((i, c)) = chars.next() {
            if c == quote {
                let value = match owned {
                    Some(mut s) => {
                        s.push_str(&input[start..i]);
                        Cow::Owned(s)
                    }
                    None => Cow::Borrowed(&input[..i]),
                };
                return Ok((&input[i..], value));
            }

            if c == '\\' {
                let s = owned.get_or_insert_with(String::new);
                s.push_str(&input[start..i]);
                match chars.next() {
                    Some((j, escaped)) => {
                        s.push(escaped);
                        start = j + escaped.len_utf8();
                    }
                    None => break,
                }
            }
        }

        Err(nom::Err::Error(nom::error::Error::new(input, ErrorKind::Char)))
    }
}

// [+-]?\d+
fn integer(input: &str) -> IResult<&str, &str> {
    recognize(pair(opt(one_of("+-")), digit1))(input)
}

// [+-]?\d*\.?\d+
fn decimal(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        opt(one_of("+-")),
        alt((recognize(tuple((digit0, char('.'), digit1))), digit1)),
    ))(input)
}

fn whole<'a, F>(parser: F, literal: &'a str) -> Option<&'a str>
where
    F: FnMut(&'a str) -> IResult<&'a str, &'a str>,
{
    all_consuming(parser)(literal).ok().map(|(_, number)| number)
}

/// The numeric tag an unquoted literal spells, together with the number
/// without its suffix. The patterns are tried in a fixed order, the first to
/// match the whole literal wins.
pub fn numeric_kind(literal: &str) -> Option<(Tag, &str)> {
    whole(integer, literal)
        .map(|n| (Tag::Int, n))
        .or_else(|| whole(terminated(decimal, one_of("dD")), literal).map(|n| (Tag::Double, n)))
        .or_else(|| whole(terminated(integer, one_of("bB")), literal).map(|n| (Tag::Byte, n)))
        .or_else(|| whole(terminated(integer, one_of("sS")), literal).map(|n| (Tag::Short, n)))
        .or_else(|| whole(terminated(integer, one_of("lL")), literal).map(|n| (Tag::Long, n)))
        .or_else(|| whole(terminated(decimal, one_of("fF")), literal).map(|n| (Tag::Float, n)))
}

fn number<T: FromStr>(digits: &str, tag: Tag) -> Result<T> {
    digits
        .parse()
        .map_err(|_| Error::parse(format!("{} is out of range for {}", digits, tag)))
}

/// Turn an unquoted literal into a value: a number if it spells one, a string
/// otherwise.
pub fn classify(literal: &str) -> Result<Value> {
    let (tag, digits) = match numeric_kind(literal) {
        Some(kind) => kind,
        None => return Ok(Value::String(literal.to_owned())),
    };
    trace!("literal {:?} is a {}", literal, tag);

    Ok(match tag {
        Tag::Byte => Value::Byte(number(digits, tag)?),
        Tag::Short => Value::Short(number(digits, tag)?),
        Tag::Int => Value::Int(number(digits, tag)?),
        Tag::Long => Value::Long(number(digits, tag)?),
        Tag::Float => Value::Float(number(digits, tag)?),
        Tag::Double => Value::Double(number(digits, tag)?),
        _ => Value::String(literal.to_owned()),
    })
}
