// Module declarations
pub mod error;
pub mod value;
pub mod row;
pub mod properties;
pub mod rule;
pub mod metadata;

// Re-exports for convenience
pub use error::DistSqlError;
pub use value::Value;
pub use row::{QueryHeader, Row};
pub use properties::Properties;
pub use rule::{
    AlgorithmConfiguration, CacheOption, GlobalClockRuleConfiguration, GlobalClockType,
    ReadwriteSplittingRuleConfiguration, RuleCategory, RuleConfiguration, RuleVariant,
    SqlParserRuleConfiguration, TransactionRuleConfiguration, TransactionType,
    TransactionalReadQueryStrategy,
};
pub use metadata::{ContextManager, MetaDataContexts, RuleMetaData, RuleScope};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Text("hello".to_string()).to_string(), "hello");
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::Text(String::new()).to_string(), "");
    }

    #[test]
    fn test_value_as_text() {
        assert_eq!(Value::Text("hello".to_string()).as_text(), Some("hello"));
        assert_eq!(Value::Boolean(true).as_text(), None);
    }

    #[test]
    fn test_value_as_bool() {
        assert_eq!(Value::Boolean(true).as_bool(), Some(true));
        assert_eq!(Value::Boolean(false).as_bool(), Some(false));
        assert_eq!(Value::from("true").as_bool(), None);
    }

    #[test]
    fn test_row_cells_are_one_based() {
        let row = Row::new(vec![Value::from("XA"), Value::from("Atomikos"), Value::from("")]);
        assert_eq!(row.len(), 3);
        assert!(row.cell(0).is_none());
        assert_eq!(row.cell(1), Some(&Value::from("XA")));
        assert_eq!(row.cell(3), Some(&Value::from("")));
        assert!(row.cell(4).is_none());
    }

    #[test]
    fn test_row_to_strings() {
        let row = Row::new(vec![Value::from("TSO"), Value::from(true), Value::from("")]);
        assert_eq!(row.to_strings(), vec!["TSO", "true", ""]);
    }

    #[test]
    fn test_header_display_indexes() {
        let header = QueryHeader::new(&["defaultType", "providerType", "props"]);
        let pairs: Vec<_> = header.iter().collect();
        assert_eq!(pairs, vec![("defaultType", 1), ("providerType", 2), ("props", 3)]);
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Value::from(false), Value::Boolean(false));
        assert_ne!(Value::from("LOCAL"), Value::from("XA"));
        assert_eq!(Value::from("hello"), "hello");
        assert_ne!(Value::from(true), "true");
    }
}
