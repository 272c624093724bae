use crate::core::{
    DistSqlError, MetaDataContexts, QueryHeader, Row, TransactionRuleConfiguration, TransactionType, Value,
};
use crate::parser::{Statement, StatementKind};
use super::context::ConnectionContext;
use super::DistSqlQueryExecutor;

const COLUMNS: &[&str] = &["defaultType", "providerType", "props"];

/// `SHOW TRANSACTION RULE`
pub struct ShowTransactionRuleExecutor;

impl ShowTransactionRuleExecutor {
    /// LOCAL transactions never show provider metadata, even when some was
    /// left behind in the stored rule.
    pub fn to_row(rule: &TransactionRuleConfiguration) -> Result<Row, DistSqlError> {
        let (provider_type, props) = match rule.transaction_type()? {
            TransactionType::Local => (String::new(), String::new()),
            TransactionType::Xa | TransactionType::Base => (
                rule.provider_type.clone().unwrap_or_default(),
                rule.props.to_display_string()?,
            ),
        };
        Ok(Row::new(vec![
            Value::from(rule.default_type.as_str()),
            Value::from(provider_type),
            Value::from(props),
        ]))
    }
}

impl DistSqlQueryExecutor for ShowTransactionRuleExecutor {
    fn statement_kind(&self) -> StatementKind {
        StatementKind::ShowTransactionRule
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
        let Some(rule) = metadata.global_rule_metadata().find_single::<TransactionRuleConfiguration>() else {
            return Ok(Vec::new());
        };
        Ok(vec![Self::to_row(rule)?])
    }
}
