use config::{Config, Environment, File};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use thiserror::Error;
use tracing::info;
use crate::core::{
    DistSqlError, GlobalClockRuleConfiguration, MetaDataContexts, ReadwriteSplittingRuleConfiguration,
    RuleConfiguration, RuleMetaData, SqlParserRuleConfiguration, TransactionRuleConfiguration,
};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Rules file error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),
    #[error("Invalid rule metadata: {0}")]
    Metadata(#[from] DistSqlError),
    #[error("Readwrite splitting rule '{rule}': invalid storage unit name '{unit}'")]
    InvalidStorageUnit { rule: String, unit: String },
}

/// Config files checked in order; the first one that exists is used.
pub const DEFAULT_CONFIG_PATHS: &[&str] = &["/etc/distrule/distrule.toml", "./distrule.toml"];

fn default_rules_file() -> String { "./rules.toml".to_string() }
fn default_log_filter() -> String { "distrule=info".to_string() }

/// Console settings.
///
/// Priority: CLI args > `DISTRULE_*` environment > config file > defaults.
/// CLI args are applied by the binary on top of what `load` returns.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConsoleSettings {
    #[serde(default = "default_rules_file")]
    pub rules_file: String,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            rules_file: default_rules_file(),
            database: None,
            log_filter: default_log_filter(),
        }
    }
}

impl ConsoleSettings {
    pub fn load(config_paths: &[&str]) -> Result<Self, LoadError> {
        let mut builder = Config::builder();

        if let Some(path) = config_paths.iter().find(|path| Path::new(path).exists()) {
            builder = builder.add_source(File::with_name(path));
        }

        builder = builder.add_source(Environment::with_prefix("DISTRULE"));

        Ok(builder.build()?.try_deserialize()?)
    }
}

// Storage unit names end up comma-joined in query output
fn is_valid_storage_unit(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-')
}

fn check_storage_units(rule: &ReadwriteSplittingRuleConfiguration) -> Result<(), LoadError> {
    let units = std::iter::once(&rule.write_storage_unit).chain(&rule.read_storage_units);
    for unit in units {
        if !is_valid_storage_unit(unit) {
            return Err(LoadError::InvalidStorageUnit {
                rule: rule.name.clone(),
                unit: unit.clone(),
            });
        }
    }
    Ok(())
}

/// On-disk form of the cluster rule metadata.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesFile {
    #[serde(default)]
    pub transaction: Option<TransactionRuleConfiguration>,
    #[serde(default)]
    pub sql_parser: Option<SqlParserRuleConfiguration>,
    #[serde(default)]
    pub global_clock: Option<GlobalClockRuleConfiguration>,
    #[serde(default)]
    pub databases: BTreeMap<String, DatabaseRulesFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseRulesFile {
    /// Rules keyed by rule name.
    #[serde(default)]
    pub readwrite_splitting: BTreeMap<String, ReadwriteSplittingRuleConfiguration>,
}

impl RulesFile {
    pub fn parse(text: &str) -> Result<Self, LoadError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Builds an immutable metadata snapshot. Table keys become rule names.
    pub fn into_metadata(self) -> Result<MetaDataContexts, LoadError> {
        let mut global_rules: Vec<RuleConfiguration> = Vec::new();
        if let Some(rule) = self.transaction {
            global_rules.push(rule.into());
        }
        if let Some(rule) = self.sql_parser {
            global_rules.push(rule.into());
        }
        if let Some(rule) = self.global_clock {
            global_rules.push(rule.into());
        }

        let mut databases = HashMap::new();
        for (database_name, database) in self.databases {
            let rules = database
                .readwrite_splitting
                .into_iter()
                .map(|(name, mut rule)| -> Result<RuleConfiguration, LoadError> {
                    rule.name = name;
                    check_storage_units(&rule)?;
                    Ok(RuleConfiguration::from(rule))
                })
                .collect::<Result<Vec<_>, LoadError>>()?;
            databases.insert(database_name, RuleMetaData::new(rules)?);
        }

        let metadata = MetaDataContexts::new(RuleMetaData::new(global_rules)?, databases);
        info!(
            global_rules = metadata.global_rule_metadata().rules().len(),
            databases = metadata.database_names().len(),
            "rule metadata loaded"
        );
        Ok(metadata)
    }
}

/// Reads a rules file straight into a metadata snapshot.
pub fn load_metadata(path: impl AsRef<Path>) -> Result<MetaDataContexts, LoadError> {
    RulesFile::load(path)?.into_metadata()
}
