use std::collections::HashMap;
use tracing::warn;
use crate::parser::StatementKind;
use super::DistSqlQueryExecutor;
use super::global_clock::ShowGlobalClockRuleExecutor;
use super::readwrite_splitting::ShowReadwriteSplittingRulesExecutor;
use super::sql_parser::ShowSqlParserRuleExecutor;
use super::transaction::ShowTransactionRuleExecutor;

/// Statement kind -> executor table, filled once at start-up.
#[derive(Default)]
pub struct ExecutorRegistry {
    executors: HashMap<StatementKind, Box<dyn DistSqlQueryExecutor>>,
}

impl ExecutorRegistry {
    /// Empty registry; every statement is unsupported until registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in rule query executor.
    pub fn with_default_executors() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ShowTransactionRuleExecutor));
        registry.register(Box::new(ShowSqlParserRuleExecutor));
        registry.register(Box::new(ShowGlobalClockRuleExecutor));
        registry.register(Box::new(ShowReadwriteSplittingRulesExecutor));
        registry
    }

    /// Registers an executor under its own statement kind, replacing any
    /// previous one.
    pub fn register(&mut self, executor: Box<dyn DistSqlQueryExecutor>) {
        let kind = executor.statement_kind();
        if self.executors.insert(kind, executor).is_some() {
            warn!(statement = %kind, "replaced previously registered executor");
        }
    }

    pub fn get(&self, kind: StatementKind) -> Option<&dyn DistSqlQueryExecutor> {
        self.executors.get(&kind).map(|executor| &**executor)
    }

    pub fn contains(&self, kind: StatementKind) -> bool {
        self.executors.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.executors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.executors.is_empty()
    }
}

impl std::fmt::Debug for ExecutorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.executors.keys()).finish()
    }
}
