/// Session state handed to executors unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionContext {
    database_name: Option<String>,
}

impl ConnectionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_database(database_name: impl Into<String>) -> Self {
        Self {
            database_name: Some(database_name.into()),
        }
    }

    /// Database selected by `USE`, if any.
    pub fn database_name(&self) -> Option<&str> {
        self.database_name.as_deref()
    }

    pub fn use_database(&mut self, database_name: impl Into<String>) {
        self.database_name = Some(database_name.into());
    }
}
