// distrule - DistSQL rule introspection engine
// Answers SHOW <RULE> queries from in-memory cluster rule metadata

// Clippy configuration - allow non-critical warnings
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::manual_let_else)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::multiple_crate_versions)]

// Rule metadata, rows, property serialization, errors
pub mod core;

// DistSQL SHOW statement parser
pub mod parser;

// Rule query executors and the dispatch engine
pub mod executor;

// Rules file loading and console settings
pub mod settings;

// Text table rendering of query results
pub mod display;

// Re-export commonly used types for convenience
pub use crate::core::{ContextManager, DistSqlError, MetaDataContexts, Properties, QueryHeader, Row, RuleMetaData, Value};
pub use parser::{Statement, StatementKind, parse_statement};
pub use executor::{ConnectionContext, ExecutorRegistry, QueryExecuteEngine, QueryResult};
pub use settings::{ConsoleSettings, LoadError, RulesFile, load_metadata};
