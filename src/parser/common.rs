use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_while},
    character::complete::{alpha1, char, multispace0, multispace1},
    combinator::{map, recognize},
    sequence::{delimited, pair},
    IResult,
};

pub fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

pub fn identifier(input: &str) -> IResult<&str, String> {
    map(
        recognize(pair(
            alt((alpha1, tag("_"))),
            take_while(|c: char| c.is_alphanumeric() || c == '_'),
        )),
        |s: &str| s.to_string(),
    )(input)
}

/// Identifier, optionally wrapped in backticks.
pub fn database_name(input: &str) -> IResult<&str, String> {
    alt((delimited(char('`'), identifier, char('`')), identifier))(input)
}

/// Matches a run of case-insensitive keywords separated by any whitespace,
/// e.g. `keywords(&["SHOW", "GLOBAL", "CLOCK", "RULE"])`.
pub fn keywords<'a>(words: &'a [&'a str]) -> impl FnMut(&'a str) -> IResult<&'a str, ()> {
    move |mut input: &'a str| -> IResult<&'a str, ()> {
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                let (rest, _) = multispace1(input)?;
                input = rest;
            }
            let (rest, _) = tag_no_case(*word)(input)?;
            input = rest;
        }
        Ok((input, ()))
    }
}
