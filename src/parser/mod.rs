// Module declarations
mod statement;
mod common;
mod show;

pub use statement::{Statement, StatementKind};

use nom::branch::alt;

/// Parses one DistSQL rule query. Keywords are case-insensitive and a
/// trailing `;` is ignored.
pub fn parse_statement(input: &str) -> Result<Statement, String> {
    let input = input.trim();
    let input = input.trim_end_matches(';');

    let result = alt((
        show::show_transaction_rule,
        show::show_sql_parser_rule,
        show::show_global_clock_rule,
        show::show_readwrite_splitting_rules,
    ))(input);

    match result {
        Ok((remaining, stmt)) => {
            if remaining.trim().is_empty() {
                Ok(stmt)
            } else {
                Err(format!("Unexpected input after statement: {remaining}"))
            }
        }
        Err(e) => Err(format!("Unsupported statement '{input}': {e:?}")),
    }
}

/// Recognizes the session command `USE <database>`; `None` for anything else.
pub fn parse_use_database(input: &str) -> Option<String> {
    let input = input.trim().trim_end_matches(';');
    match show::use_database(input) {
        Ok((remaining, name)) if remaining.trim().is_empty() => Some(name),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show_transaction_rule() {
        let stmt = parse_statement("SHOW TRANSACTION RULE").unwrap();
        assert_eq!(stmt, Statement::ShowTransactionRule);
        assert_eq!(stmt.kind(), StatementKind::ShowTransactionRule);
    }

    #[test]
    fn test_parse_is_case_insensitive_with_semicolon() {
        let stmt = parse_statement("  show transaction rule; ").unwrap();
        assert_eq!(stmt, Statement::ShowTransactionRule);
    }

    #[test]
    fn test_parse_show_sql_parser_rule() {
        assert_eq!(parse_statement("SHOW SQL_PARSER RULE").unwrap(), Statement::ShowSqlParserRule);
    }

    #[test]
    fn test_parse_show_global_clock_rule() {
        assert_eq!(parse_statement("Show Global Clock Rule;").unwrap(), Statement::ShowGlobalClockRule);
    }

    #[test]
    fn test_parse_show_readwrite_splitting_rules() {
        assert_eq!(
            parse_statement("SHOW READWRITE_SPLITTING RULES").unwrap(),
            Statement::ShowReadwriteSplittingRules { from_database: None }
        );
        assert_eq!(
            parse_statement("SHOW READWRITE_SPLITTING RULES FROM `sharding_db`;").unwrap(),
            Statement::ShowReadwriteSplittingRules { from_database: Some("sharding_db".to_string()) }
        );
        assert_eq!(
            parse_statement("show readwrite_splitting rules from db_1").unwrap().kind(),
            StatementKind::ShowReadwriteSplittingRules
        );
        assert_eq!(
            parse_statement("SHOW READWRITE_SPLITTING RULES\n  FROM sharding_db  ").unwrap(),
            Statement::ShowReadwriteSplittingRules { from_database: Some("sharding_db".to_string()) }
        );
    }

    #[test]
    fn test_parse_rejects_trailing_input() {
        assert!(parse_statement("SHOW TRANSACTION RULES").is_err());
        assert!(parse_statement("SHOW TRANSACTION RULE extra").is_err());
        assert!(parse_statement("SHOW READWRITE_SPLITTING RULESFROM sharding_db").is_err());
        assert!(parse_statement("SHOW READWRITE_SPLITTING RULES FROMsharding_db").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_statement() {
        assert!(parse_statement("SHOW AUTHORITY RULE").is_err());
        assert!(parse_statement("SELECT 1").is_err());
        assert!(parse_statement("").is_err());
    }

    #[test]
    fn test_parse_use_database() {
        assert_eq!(parse_use_database("USE sharding_db;"), Some("sharding_db".to_string()));
        assert_eq!(parse_use_database("use `db`"), Some("db".to_string()));
        assert_eq!(parse_use_database("USERS"), None);
        assert_eq!(parse_use_database("SHOW TRANSACTION RULE"), None);
    }
}
