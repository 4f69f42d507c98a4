//! Reading inline style blocks back out of generated sources.
//!
//! Only the subset the generator emits is understood: a `style={{ ... }}`
//! attribute holding `key: "text"` or `key: number` entries separated by
//! commas, with an optional trailing comma.

use indexmap::IndexMap;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_until, take_while, take_while1},
    character::complete::{char, multispace0},
    combinator::{map, map_res, opt, recognize},
    multi::separated_list0,
    sequence::{delimited, pair, preceded, separated_pair, terminated, tuple},
    IResult,
};
use tailor_core::StyleValue;

use crate::error::{CodegenError, Result};

/// Declarations of one style block, in source order.
pub type StyleMap = IndexMap<String, StyleValue>;

const OPEN: &str = "style={{";

/// Parse the first inline style block of `source`.
pub fn parse_inline_style(source: &str) -> Result<StyleMap> {
    let start = source
        .find(OPEN)
        .ok_or_else(|| CodegenError::InvalidInlineStyle("no style block".to_string()))?;
    block(&source[start..])
        .map(|(_, entries)| entries)
        .map_err(|err| CodegenError::InvalidInlineStyle(err.to_string()))
}

/// Parse every inline style block of `source`, in order.
pub fn parse_inline_styles(source: &str) -> Result<Vec<StyleMap>> {
    let mut blocks = Vec::new();
    let mut rest = source;
    loop {
        match preceded(take_until(OPEN), block)(rest) {
            Ok((remaining, entries)) => {
                blocks.push(entries);
                rest = remaining;
            }
            Err(nom::Err::Error(err)) if err.code == nom::error::ErrorKind::TakeUntil => break,
            Err(err) => return Err(CodegenError::InvalidInlineStyle(err.to_string())),
        }
    }
    Ok(blocks)
}

fn block(input: &str) -> IResult<&str, StyleMap> {
    map(
        delimited(
            tag(OPEN),
            terminated(separated_list0(char(','), entry), opt(ws(char(',')))),
            preceded(multispace0, tag("}}")),
        ),
        |entries: Vec<(&str, StyleValue)>| {
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect()
        },
    )(input)
}

fn entry(input: &str) -> IResult<&str, (&str, StyleValue)> {
    separated_pair(ws(key), char(':'), ws(value))(input)
}

fn key(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
    ))(input)
}

fn value(input: &str) -> IResult<&str, StyleValue> {
    alt((
        map(quoted, |text: &str| StyleValue::Text(text.to_string())),
        map(number, StyleValue::Number),
    ))(input)
}

fn quoted(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), take_while(|c: char| c != '"'), char('"'))(input)
}

fn number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(char('-')),
            take_while1(|c: char| c.is_ascii_digit()),
            opt(pair(char('.'), take_while1(|c: char| c.is_ascii_digit()))),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

fn ws<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}
