use super::common::{database_name, keywords, ws};
use super::statement::Statement;
use nom::{
    bytes::complete::tag_no_case,
    character::complete::{multispace0, multispace1},
    combinator::opt,
    sequence::preceded,
    IResult,
};

pub fn show_transaction_rule(input: &str) -> IResult<&str, Statement> {
    let (input, ()) = ws(keywords(&["SHOW", "TRANSACTION", "RULE"]))(input)?;
    Ok((input, Statement::ShowTransactionRule))
}

pub fn show_sql_parser_rule(input: &str) -> IResult<&str, Statement> {
    let (input, ()) = ws(keywords(&["SHOW", "SQL_PARSER", "RULE"]))(input)?;
    Ok((input, Statement::ShowSqlParserRule))
}

pub fn show_global_clock_rule(input: &str) -> IResult<&str, Statement> {
    let (input, ()) = ws(keywords(&["SHOW", "GLOBAL", "CLOCK", "RULE"]))(input)?;
    Ok((input, Statement::ShowGlobalClockRule))
}

// SHOW READWRITE_SPLITTING RULES [FROM db]
pub fn show_readwrite_splitting_rules(input: &str) -> IResult<&str, Statement> {
    let (input, ()) = preceded(multispace0, keywords(&["SHOW", "READWRITE_SPLITTING", "RULES"]))(input)?;
    let (input, from_database) = opt(preceded(
        multispace1,
        preceded(tag_no_case("FROM"), preceded(multispace1, database_name)),
    ))(input)?;
    let (input, _) = multispace0(input)?;
    Ok((input, Statement::ShowReadwriteSplittingRules { from_database }))
}

// USE db
pub fn use_database(input: &str) -> IResult<&str, String> {
    let (input, _) = preceded(multispace0, tag_no_case("USE"))(input)?;
    let (input, _) = multispace1(input)?;
    ws(database_name)(input)
}
