use crate::core::{DistSqlError, GlobalClockRuleConfiguration, MetaDataContexts, QueryHeader, Row, Value};
use crate::parser::{Statement, StatementKind};
use super::context::ConnectionContext;
use super::DistSqlQueryExecutor;

const COLUMNS: &[&str] = &["type", "provider", "enabled", "props"];

/// `SHOW GLOBAL CLOCK RULE`
pub struct ShowGlobalClockRuleExecutor;

impl ShowGlobalClockRuleExecutor {
    fn to_row(rule: &GlobalClockRuleConfiguration) -> Result<Row, DistSqlError> {
        let clock_type = rule.clock_type()?;
        Ok(Row::new(vec![
            Value::from(clock_type.name()),
            Value::from(rule.provider.as_str()),
            Value::from(rule.enabled),
            Value::from(rule.props.to_display_string()?),
        ]))
    }
}

impl DistSqlQueryExecutor for ShowGlobalClockRuleExecutor {
    fn statement_kind(&self) -> StatementKind {
        StatementKind::ShowGlobalClockRule
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
        metadata
            .global_rule_metadata()
            .find_single::<GlobalClockRuleConfiguration>()
            .map(Self::to_row)
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Properties, RuleMetaData};

    fn metadata_with(rule: GlobalClockRuleConfiguration) -> MetaDataContexts {
        MetaDataContexts::with_global_rules(RuleMetaData::new(vec![rule.into()]).unwrap())
    }

    #[test]
    fn test_tso_rule_row() {
        let rule = GlobalClockRuleConfiguration {
            clock_type: "TSO".to_string(),
            provider: "redis".to_string(),
            enabled: true,
            props: [("host", "127.0.0.1"), ("port", "6379")].into_iter().collect(),
        };
        let rows = ShowGlobalClockRuleExecutor
            .rows(&Statement::ShowGlobalClockRule, &ConnectionContext::new(), &metadata_with(rule))
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cell(3), Some(&Value::Boolean(true)));
        assert_eq!(
            rows[0].to_strings(),
            vec!["TSO", "redis", "true", r#"{"host":"127.0.0.1","port":"6379"}"#]
        );
    }

    #[test]
    fn test_unknown_clock_type_fails() {
        let rule = GlobalClockRuleConfiguration {
            clock_type: "HLC".to_string(),
            provider: "local".to_string(),
            enabled: false,
            props: Properties::new(),
        };
        let result = ShowGlobalClockRuleExecutor
            .rows(&Statement::ShowGlobalClockRule, &ConnectionContext::new(), &metadata_with(rule));
        assert!(matches!(result, Err(DistSqlError::MetadataInconsistency { .. })));
    }
}
