use super::value::Value;

/// One result row of a rule query. Cells are addressed 1-based, the way
/// clients count columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Returns the cell at a 1-based `index`, or `None` when out of range.
    pub fn cell(&self, index: usize) -> Option<&Value> {
        index.checked_sub(1).and_then(|i| self.values.get(i))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Renders every cell to text, in column order.
    pub fn to_strings(&self) -> Vec<String> {
        self.values.iter().map(ToString::to_string).collect()
    }
}

/// Column schema of a query kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryHeader {
    columns: Vec<&'static str>,
}

impl QueryHeader {
    pub fn new(columns: &[&'static str]) -> Self {
        Self { columns: columns.to_vec() }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn names(&self) -> &[&'static str] {
        &self.columns
    }

    /// `(name, display index)` pairs, display index starting at 1.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        self.columns.iter().enumerate().map(|(i, name)| (*name, i + 1))
    }
}
