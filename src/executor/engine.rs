use tracing::{debug, warn};
use crate::core::{ContextManager, DistSqlError, QueryHeader, Row};
use crate::parser::Statement;
use super::context::ConnectionContext;
use super::registry::ExecutorRegistry;

/// Rows and column schema of a completed rule query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    pub header: QueryHeader,
    pub rows: Vec<Row>,
}

/// Lifecycle of one execution: `Created -> Running -> Completed | Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionState {
    Created,
    Running,
    Completed(QueryResult),
    Failed(DistSqlError),
}

impl ExecutionState {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Running => "running",
            Self::Completed(_) => "completed",
            Self::Failed(_) => "failed",
        }
    }
}

/// Runs one rule query statement.
///
/// The executor is looked up by statement kind in the registry, reads a single
/// metadata snapshot taken at the start of the run, and either all rows or only
/// an error are exposed afterwards.
pub struct QueryExecuteEngine<'a> {
    statement: Statement,
    connection_context: ConnectionContext,
    context_manager: &'a ContextManager,
    registry: &'a ExecutorRegistry,
    state: ExecutionState,
}

impl<'a> QueryExecuteEngine<'a> {
    pub fn new(
        statement: Statement,
        connection_context: ConnectionContext,
        context_manager: &'a ContextManager,
        registry: &'a ExecutorRegistry,
    ) -> Self {
        Self {
            statement,
            connection_context,
            context_manager,
            registry,
            state: ExecutionState::Created,
        }
    }

    /// Executes the statement. Only valid once, from the `Created` state.
    pub fn execute_query(&mut self) -> Result<(), DistSqlError> {
        if !matches!(self.state, ExecutionState::Created) {
            return Err(DistSqlError::InvalidExecutionState(format!(
                "query already {}",
                self.state.name()
            )));
        }
        self.state = ExecutionState::Running;

        match self.run() {
            Ok(result) => {
                debug!(
                    statement = %self.statement.kind(),
                    rows = result.rows.len(),
                    "rule query completed"
                );
                self.state = ExecutionState::Completed(result);
                Ok(())
            }
            Err(err) => {
                warn!(statement = %self.statement.kind(), error = %err, "rule query failed");
                self.state = ExecutionState::Failed(err.clone());
                Err(err)
            }
        }
    }

    fn run(&self) -> Result<QueryResult, DistSqlError> {
        let kind = self.statement.kind();
        let executor = self
            .registry
            .get(kind)
            .ok_or_else(|| DistSqlError::UnsupportedStatementKind(kind.to_string()))?;

        let metadata = self.context_manager.snapshot();
        let header = executor.columns();
        let rows = executor.rows(&self.statement, &self.connection_context, &metadata)?;

        if let Some(row) = rows.iter().find(|row| row.len() != header.len()) {
            return Err(DistSqlError::RowArityMismatch {
                expected: header.len(),
                actual: row.len(),
            });
        }
        Ok(QueryResult { header, rows })
    }

    pub const fn state(&self) -> &ExecutionState {
        &self.state
    }

    /// Column schema, once the query has completed.
    pub fn columns(&self) -> Option<&QueryHeader> {
        match &self.state {
            ExecutionState::Completed(result) => Some(&result.header),
            _ => None,
        }
    }

    /// Result rows, once the query has completed.
    pub fn rows(&self) -> Option<&[Row]> {
        match &self.state {
            ExecutionState::Completed(result) => Some(&result.rows),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&DistSqlError> {
        match &self.state {
            ExecutionState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn into_result(self) -> Result<QueryResult, DistSqlError> {
        match self.state {
            ExecutionState::Completed(result) => Ok(result),
            ExecutionState::Failed(err) => Err(err),
            other => Err(DistSqlError::InvalidExecutionState(format!(
                "query not finished, state is {}",
                other.name()
            ))),
        }
    }
}

/// Runs `statement` to completion and returns its rows.
pub fn execute(
    statement: Statement,
    connection_context: ConnectionContext,
    context_manager: &ContextManager,
    registry: &ExecutorRegistry,
) -> Result<QueryResult, DistSqlError> {
    let mut engine = QueryExecuteEngine::new(statement, connection_context, context_manager, registry);
    engine.execute_query()?;
    engine.into_result()
}
