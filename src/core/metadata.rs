use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use super::error::DistSqlError;
use super::rule::{RuleCategory, RuleConfiguration, RuleVariant};

/// Where a rule lives: cluster-wide or inside one logical database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope<'a> {
    Global,
    Database(&'a str),
}

/// Active rules of one scope. Holds at most one rule per single-instance
/// category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleMetaData {
    rules: Vec<RuleConfiguration>,
}

impl RuleMetaData {
    pub fn new(rules: Vec<RuleConfiguration>) -> Result<Self, DistSqlError> {
        let mut seen = Vec::new();
        for rule in &rules {
            let category = rule.category();
            if category.is_multi_instance() {
                continue;
            }
            if seen.contains(&category) {
                return Err(DistSqlError::DuplicateRule {
                    category: category.to_string(),
                });
            }
            seen.push(category);
        }
        Ok(Self { rules })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> &[RuleConfiguration] {
        &self.rules
    }

    /// The rule of a single-instance category, if configured.
    pub fn get(&self, category: RuleCategory) -> Option<&RuleConfiguration> {
        self.rules.iter().find(|rule| rule.category() == category)
    }

    /// All rules of a category in stored order.
    pub fn list(&self, category: RuleCategory) -> Vec<&RuleConfiguration> {
        self.rules.iter().filter(|rule| rule.category() == category).collect()
    }

    pub fn find_single<T: RuleVariant>(&self) -> Option<&T> {
        self.get(T::CATEGORY).and_then(T::from_rule)
    }

    pub fn find_all<T: RuleVariant>(&self) -> Vec<&T> {
        self.rules.iter().filter_map(T::from_rule).collect()
    }
}

/// Immutable snapshot of all rule metadata of the cluster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaDataContexts {
    global_rule_metadata: RuleMetaData,
    databases: HashMap<String, RuleMetaData>,
}

impl MetaDataContexts {
    pub fn new(global_rule_metadata: RuleMetaData, databases: HashMap<String, RuleMetaData>) -> Self {
        Self { global_rule_metadata, databases }
    }

    pub fn with_global_rules(global_rule_metadata: RuleMetaData) -> Self {
        Self::new(global_rule_metadata, HashMap::new())
    }

    pub const fn global_rule_metadata(&self) -> &RuleMetaData {
        &self.global_rule_metadata
    }

    pub fn database(&self, name: &str) -> Option<&RuleMetaData> {
        self.databases.get(name)
    }

    pub fn contains_database(&self, name: &str) -> bool {
        self.databases.contains_key(name)
    }

    pub fn database_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.databases.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn scope(&self, scope: RuleScope<'_>) -> Option<&RuleMetaData> {
        match scope {
            RuleScope::Global => Some(&self.global_rule_metadata),
            RuleScope::Database(name) => self.databases.get(name),
        }
    }

    /// Absent scope or absent rule both yield `None`.
    pub fn get(&self, scope: RuleScope<'_>, category: RuleCategory) -> Option<&RuleConfiguration> {
        self.scope(scope).and_then(|rules| rules.get(category))
    }

    pub fn list(&self, scope: RuleScope<'_>, category: RuleCategory) -> Vec<&RuleConfiguration> {
        self.scope(scope).map(|rules| rules.list(category)).unwrap_or_default()
    }
}

/// Process-wide holder of the current metadata snapshot.
///
/// Readers clone the `Arc` and keep using it for a whole query; writers swap in
/// a complete new snapshot. A query never observes a half-applied change.
#[derive(Debug, Default)]
pub struct ContextManager {
    metadata_contexts: RwLock<Arc<MetaDataContexts>>,
}

impl ContextManager {
    pub fn new(metadata_contexts: MetaDataContexts) -> Self {
        Self {
            metadata_contexts: RwLock::new(Arc::new(metadata_contexts)),
        }
    }

    /// Current snapshot. The lock only guards an `Arc` swap, so a poisoned
    /// lock still holds a complete snapshot and is read through.
    pub fn snapshot(&self) -> Arc<MetaDataContexts> {
        let guard = self.metadata_contexts.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Replaces the whole snapshot.
    pub fn renew(&self, metadata_contexts: MetaDataContexts) {
        let mut guard = self.metadata_contexts.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(metadata_contexts);
    }
}
