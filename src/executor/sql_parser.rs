use crate::core::{DistSqlError, MetaDataContexts, QueryHeader, Row, SqlParserRuleConfiguration, Value};
use crate::parser::{Statement, StatementKind};
use super::context::ConnectionContext;
use super::DistSqlQueryExecutor;

const COLUMNS: &[&str] = &["parse_tree_cache", "sql_statement_cache"];

/// `SHOW SQL_PARSER RULE`
pub struct ShowSqlParserRuleExecutor;

impl DistSqlQueryExecutor for ShowSqlParserRuleExecutor {
    fn statement_kind(&self) -> StatementKind {
        StatementKind::ShowSqlParserRule
    }

    fn columns(&self) -> QueryHeader {
        QueryHeader::new(COLUMNS)
    }

    fn rows(
        &self,
        _statement: &Statement,
        _context: &ConnectionContext,
        metadata: &MetaDataContexts,
    ) -> Result<Vec<Row>, DistSqlError> {
        Ok(metadata
            .global_rule_metadata()
            .find_single::<SqlParserRuleConfiguration>()
            .map(|rule| {
                Row::new(vec![
                    Value::from(rule.parse_tree_cache.to_string()),
                    Value::from(rule.sql_statement_cache.to_string()),
                ])
            })
            .into_iter()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CacheOption, RuleMetaData};

    #[test]
    fn test_cache_options_rendered() {
        let rule = SqlParserRuleConfiguration {
            parse_tree_cache: CacheOption::new(64, 512),
            sql_statement_cache: CacheOption::new(1000, 4096),
        };
        let metadata = MetaDataContexts::with_global_rules(RuleMetaData::new(vec![rule.into()]).unwrap());
        let rows = ShowSqlParserRuleExecutor
            .rows(&Statement::ShowSqlParserRule, &ConnectionContext::new(), &metadata)
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].to_strings(),
            vec![
                "initialCapacity: 64, maximumSize: 512",
                "initialCapacity: 1000, maximumSize: 4096",
            ]
        );
    }

    #[test]
    fn test_no_rule_no_rows() {
        let rows = ShowSqlParserRuleExecutor
            .rows(&Statement::ShowSqlParserRule, &ConnectionContext::new(), &MetaDataContexts::default())
            .unwrap();
        assert!(rows.is_empty());
    }
}
