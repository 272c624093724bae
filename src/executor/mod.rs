//! Executor module - answers DistSQL rule queries from rule metadata
//!
//! Structure:
//! - context: session state passed through to executors
//! - registry: statement kind -> executor table
//! - engine: per-statement execution handle
//! - transaction / sql_parser / global_clock / readwrite_splitting: one executor per SHOW statement

pub mod context;
pub mod registry;
pub mod engine;
pub mod transaction;
pub mod sql_parser;
pub mod global_clock;
pub mod readwrite_splitting;

use crate::core::{DistSqlError, MetaDataContexts, QueryHeader, Row};
use crate::parser::{Statement, StatementKind};

pub use context::ConnectionContext;
pub use registry::ExecutorRegistry;
pub use engine::{execute, ExecutionState, QueryExecuteEngine, QueryResult};
pub use transaction::ShowTransactionRuleExecutor;
pub use sql_parser::ShowSqlParserRuleExecutor;
pub use global_clock::ShowGlobalClockRuleExecutor;
pub use readwrite_splitting::ShowReadwriteSplittingRulesExecutor;

/// Maps rule metadata to rows for one statement kind.
///
/// Implementations are pure: they only read `metadata`. A category with no
/// configured rule yields zero rows, never an error.
pub trait DistSqlQueryExecutor: Send + Sync {
    fn statement_kind(&self) -> StatementKind;

    fn columns(&self) -> QueryHeader;

    fn rows(
        &self,
        statement: &Statement,
        context: &ConnectionContext,
        metadata: &MetaDataContexts,
    ) -> Result<Vec<Row>, DistSqlError>;
}
