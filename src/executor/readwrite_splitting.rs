use crate::core::{
    DistSqlError, MetaDataContexts, QueryHeader, ReadwriteSplittingRuleConfiguration, Row, Value,
};
use crate::parser::{Statement, StatementKind};
use super::context::ConnectionContext;
use super::DistSqlQueryExecutor;

const COLUMNS: &[&str] = &[
    "name",
    "write_storage_unit_name",
    "read_storage_unit_names",
    "transactional_read_query_strategy",
    "load_balancer_type",
    "load_balancer_props",
];

/// `SHOW READWRITE_SPLITTING RULES [FROM db]`
///
/// Reads the rules of the `FROM` database, or of the session's current
/// database when the statement names none. One row per rule, ordered by name.
pub struct ShowReadwriteSplittingRulesExecutor;

impl ShowReadwriteSplittingRulesExecutor {
    fn to_row(rule: &ReadwriteSplittingRuleConfiguration) -> Result<Row, DistSqlError> {
        let strategy = rule.strategy()?;
        let (load_balancer_type, load_balancer_props) = match &rule.load_balancer {
            Some(algorithm) => (algorithm.algorithm_type.clone(), algorithm.props.to_display_string()?),
            None => (String::new(), String::new()),
        };
        Ok(Row::new(vec![
            Value::from(rule.name.as_str()),
            Value::from(rule.write_storage_unit.as_str()),
            // Unit names never contain a comma, the rules loader rejects them
            Value::from(rule.read_storage_units.join(",")),
            Value::from(strategy.name()),
            Value::from(load_balancer_type),
            Value::from(load_balancer_props),
        ]))
    }
}

impl DistSqlQueryExecutor for ShowReadwriteSplittingRulesExecutor {
    fn statement_kind(&self) -> StatementKind {
        StatementKind::ShowReadwriteSplittingRules
    }

    fn columns(&self) -> QueryHeader {
        QueryHeader::new(COLUMNS)
    }

    fn rows(
        &self,
        statement: &Statement,
        context: &ConnectionContext,
        metadata: &MetaDataContexts,
    ) -> Result<Vec<Row>, DistSqlError> {
        let Statement::ShowReadwriteSplittingRules { from_database } = statement else {
            return Err(DistSqlError::UnsupportedStatementKind(statement.kind().to_string()));
        };
        let database = from_database
            .as_deref()
            .or_else(|| context.database_name())
            .ok_or(DistSqlError::NoDatabaseSelected)?;
        let rules = metadata
            .database(database)
            .ok_or_else(|| DistSqlError::DatabaseNotFound(database.to_string()))?;

        let mut configs = rules.find_all::<ReadwriteSplittingRuleConfiguration>();
        configs.sort_by(|a, b| a.name.cmp(&b.name));
        configs.into_iter().map(Self::to_row).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AlgorithmConfiguration, Properties, RuleMetaData};
    use std::collections::HashMap;

    fn rule(name: &str, strategy: &str, load_balancer: Option<AlgorithmConfiguration>) -> ReadwriteSplittingRuleConfiguration {
        ReadwriteSplittingRuleConfiguration {
            name: name.to_string(),
            write_storage_unit: format!("{name}_write"),
            read_storage_units: vec![format!("{name}_read_0"), format!("{name}_read_1")],
            transactional_read_query_strategy: strategy.to_string(),
            load_balancer,
        }
    }

    fn metadata(rules: Vec<ReadwriteSplittingRuleConfiguration>) -> MetaDataContexts {
        let mut databases = HashMap::new();
        databases.insert(
            "sharding_db".to_string(),
            RuleMetaData::new(rules.into_iter().map(Into::into).collect()).unwrap(),
        );
        databases.insert("empty_db".to_string(), RuleMetaData::empty());
        MetaDataContexts::new(RuleMetaData::empty(), databases)
    }

    fn show(from: Option<&str>) -> Statement {
        Statement::ShowReadwriteSplittingRules {
            from_database: from.map(ToString::to_string),
        }
    }

    #[test]
    fn test_rows_sorted_by_name() {
        let weight = AlgorithmConfiguration {
            algorithm_type: "WEIGHT".to_string(),
            props: [("ms_group_0_read_0", "2")].into_iter().collect(),
        };
        let metadata = metadata(vec![rule("ms_group_1", "FIXED", Some(weight)), rule("ms_group_0", "PRIMARY", None)]);
        let rows = ShowReadwriteSplittingRulesExecutor
            .rows(&show(Some("sharding_db")), &ConnectionContext::new(), &metadata)
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0].to_strings(),
            vec!["ms_group_0", "ms_group_0_write", "ms_group_0_read_0,ms_group_0_read_1", "PRIMARY", "", ""]
        );
        assert_eq!(rows[1].cell(5), Some(&Value::from("WEIGHT")));
        assert_eq!(rows[1].cell(6), Some(&Value::from(r#"{"ms_group_0_read_0":"2"}"#)));
    }

    #[test]
    fn test_uses_session_database_without_from() {
        let metadata = metadata(vec![rule("ms_group_0", "DYNAMIC", None)]);
        let rows = ShowReadwriteSplittingRulesExecutor
            .rows(&show(None), &ConnectionContext::for_database("sharding_db"), &metadata)
            .unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_from_overrides_session_database() {
        let metadata = metadata(vec![rule("ms_group_0", "DYNAMIC", None)]);
        let rows = ShowReadwriteSplittingRulesExecutor
            .rows(&show(Some("empty_db")), &ConnectionContext::for_database("sharding_db"), &metadata)
            .unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_no_database_selected() {
        let result = ShowReadwriteSplittingRulesExecutor.rows(&show(None), &ConnectionContext::new(), &metadata(vec![]));
        assert_eq!(result, Err(DistSqlError::NoDatabaseSelected));
    }

    #[test]
    fn test_unknown_database() {
        let result = ShowReadwriteSplittingRulesExecutor.rows(&show(Some("missing")), &ConnectionContext::new(), &metadata(vec![]));
        assert_eq!(result, Err(DistSqlError::DatabaseNotFound("missing".to_string())));
    }

    #[test]
    fn test_unknown_strategy_fails() {
        let metadata = metadata(vec![rule("ms_group_0", "ROUND_ROBIN", None)]);
        let result = ShowReadwriteSplittingRulesExecutor.rows(&show(Some("sharding_db")), &ConnectionContext::new(), &metadata);
        assert!(matches!(result, Err(DistSqlError::MetadataInconsistency { .. })));
    }

    #[test]
    fn test_empty_algorithm_props() {
        let random = AlgorithmConfiguration {
            algorithm_type: "RANDOM".to_string(),
            props: Properties::new(),
        };
        let metadata = metadata(vec![rule("ms_group_0", "DYNAMIC", Some(random))]);
        let rows = ShowReadwriteSplittingRulesExecutor
            .rows(&show(Some("sharding_db")), &ConnectionContext::new(), &metadata)
            .unwrap();
        assert_eq!(rows[0].cell(5), Some(&Value::from("RANDOM")));
        assert_eq!(rows[0].cell(6), Some(&Value::from("")));
    }
}
