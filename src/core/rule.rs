use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use super::error::DistSqlError;
use super::properties::Properties;

/// Rule categories known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleCategory {
    Transaction,
    SqlParser,
    GlobalClock,
    ReadwriteSplitting,
}

impl RuleCategory {
    /// Multi-instance categories hold any number of named rules per scope,
    /// the others hold at most one.
    pub const fn is_multi_instance(self) -> bool {
        matches!(self, Self::ReadwriteSplitting)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Transaction => "transaction",
            Self::SqlParser => "sql_parser",
            Self::GlobalClock => "global_clock",
            Self::ReadwriteSplitting => "readwrite_splitting",
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One stored rule configuration, tagged by category.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleConfiguration {
    Transaction(TransactionRuleConfiguration),
    SqlParser(SqlParserRuleConfiguration),
    GlobalClock(GlobalClockRuleConfiguration),
    ReadwriteSplitting(ReadwriteSplittingRuleConfiguration),
}

impl RuleConfiguration {
    pub const fn category(&self) -> RuleCategory {
        match self {
            Self::Transaction(_) => RuleCategory::Transaction,
            Self::SqlParser(_) => RuleCategory::SqlParser,
            Self::GlobalClock(_) => RuleCategory::GlobalClock,
            Self::ReadwriteSplitting(_) => RuleCategory::ReadwriteSplitting,
        }
    }
}

/// Typed access to one [`RuleConfiguration`] case.
pub trait RuleVariant: Sized {
    const CATEGORY: RuleCategory;

    fn from_rule(rule: &RuleConfiguration) -> Option<&Self>;
}

macro_rules! rule_variant {
    ($ty:ty, $variant:ident) => {
        impl RuleVariant for $ty {
            const CATEGORY: RuleCategory = RuleCategory::$variant;

            fn from_rule(rule: &RuleConfiguration) -> Option<&Self> {
                match rule {
                    RuleConfiguration::$variant(config) => Some(config),
                    _ => None,
                }
            }
        }

        impl From<$ty> for RuleConfiguration {
            fn from(config: $ty) -> Self {
                Self::$variant(config)
            }
        }
    };
}

rule_variant!(TransactionRuleConfiguration, Transaction);
rule_variant!(SqlParserRuleConfiguration, SqlParser);
rule_variant!(GlobalClockRuleConfiguration, GlobalClock);
rule_variant!(ReadwriteSplittingRuleConfiguration, ReadwriteSplitting);

fn inconsistent(category: RuleCategory, kind: &str) -> DistSqlError {
    DistSqlError::MetadataInconsistency {
        category: category.to_string(),
        kind: kind.to_string(),
    }
}

// ===== Transaction =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Local,
    Xa,
    Base,
}

impl TransactionType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Local => "LOCAL",
            Self::Xa => "XA",
            Self::Base => "BASE",
        }
    }
}

impl FromStr for TransactionType {
    type Err = DistSqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOCAL" => Ok(Self::Local),
            "XA" => Ok(Self::Xa),
            "BASE" => Ok(Self::Base),
            other => Err(inconsistent(RuleCategory::Transaction, other)),
        }
    }
}

/// Cluster-wide transaction rule.
///
/// `default_type` keeps the stored text as-is; it is only interpreted when a
/// query reads it, so metadata written by a newer version surfaces as an error
/// instead of being rejected at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRuleConfiguration {
    pub default_type: String,
    #[serde(default)]
    pub provider_type: Option<String>,
    #[serde(default)]
    pub props: Properties,
}

impl TransactionRuleConfiguration {
    pub fn new(default_type: impl Into<String>, provider_type: Option<String>, props: Properties) -> Self {
        Self {
            default_type: default_type.into(),
            provider_type,
            props,
        }
    }

    pub fn transaction_type(&self) -> Result<TransactionType, DistSqlError> {
        self.default_type.parse()
    }
}

// ===== SQL parser =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheOption {
    pub initial_capacity: u32,
    pub maximum_size: u64,
}

impl CacheOption {
    pub const fn new(initial_capacity: u32, maximum_size: u64) -> Self {
        Self { initial_capacity, maximum_size }
    }
}

impl fmt::Display for CacheOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "initialCapacity: {}, maximumSize: {}", self.initial_capacity, self.maximum_size)
    }
}

const fn default_parse_tree_cache() -> CacheOption {
    CacheOption::new(128, 1024)
}

const fn default_sql_statement_cache() -> CacheOption {
    CacheOption::new(2000, 65535)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlParserRuleConfiguration {
    #[serde(default = "default_parse_tree_cache")]
    pub parse_tree_cache: CacheOption,
    #[serde(default = "default_sql_statement_cache")]
    pub sql_statement_cache: CacheOption,
}

impl Default for SqlParserRuleConfiguration {
    fn default() -> Self {
        Self {
            parse_tree_cache: default_parse_tree_cache(),
            sql_statement_cache: default_sql_statement_cache(),
        }
    }
}

// ===== Global clock =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalClockType {
    Tso,
}

impl GlobalClockType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tso => "TSO",
        }
    }
}

impl FromStr for GlobalClockType {
    type Err = DistSqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TSO" => Ok(Self::Tso),
            other => Err(inconsistent(RuleCategory::GlobalClock, other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalClockRuleConfiguration {
    #[serde(rename = "type")]
    pub clock_type: String,
    pub provider: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub props: Properties,
}

impl GlobalClockRuleConfiguration {
    pub fn clock_type(&self) -> Result<GlobalClockType, DistSqlError> {
        self.clock_type.parse()
    }
}

// ===== Readwrite splitting =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionalReadQueryStrategy {
    Primary,
    Fixed,
    Dynamic,
}

impl TransactionalReadQueryStrategy {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "PRIMARY",
            Self::Fixed => "FIXED",
            Self::Dynamic => "DYNAMIC",
        }
    }
}

impl FromStr for TransactionalReadQueryStrategy {
    type Err = DistSqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PRIMARY" => Ok(Self::Primary),
            "FIXED" => Ok(Self::Fixed),
            "DYNAMIC" => Ok(Self::Dynamic),
            other => Err(inconsistent(RuleCategory::ReadwriteSplitting, other)),
        }
    }
}

/// Pluggable algorithm reference (load balancers and the like).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmConfiguration {
    #[serde(rename = "type")]
    pub algorithm_type: String,
    #[serde(default)]
    pub props: Properties,
}

fn default_strategy() -> String {
    TransactionalReadQueryStrategy::Dynamic.name().to_string()
}

/// One named readwrite-splitting data source group of a logical database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadwriteSplittingRuleConfiguration {
    #[serde(default)]
    pub name: String,
    pub write_storage_unit: String,
    #[serde(default)]
    pub read_storage_units: Vec<String>,
    #[serde(default = "default_strategy")]
    pub transactional_read_query_strategy: String,
    #[serde(default)]
    pub load_balancer: Option<AlgorithmConfiguration>,
}

impl ReadwriteSplittingRuleConfiguration {
    pub fn strategy(&self) -> Result<TransactionalReadQueryStrategy, DistSqlError> {
        self.transactional_read_query_strategy.parse()
    }
}
