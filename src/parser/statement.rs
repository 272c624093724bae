use std::fmt;

/// A parsed DistSQL rule query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    ShowTransactionRule,
    ShowSqlParserRule,
    ShowGlobalClockRule,
    ShowReadwriteSplittingRules {
        from_database: Option<String>,
    },
}

/// Statement discriminator used to look up executors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    ShowTransactionRule,
    ShowSqlParserRule,
    ShowGlobalClockRule,
    ShowReadwriteSplittingRules,
}

impl Statement {
    pub const fn kind(&self) -> StatementKind {
        match self {
            Self::ShowTransactionRule => StatementKind::ShowTransactionRule,
            Self::ShowSqlParserRule => StatementKind::ShowSqlParserRule,
            Self::ShowGlobalClockRule => StatementKind::ShowGlobalClockRule,
            Self::ShowReadwriteSplittingRules { .. } => StatementKind::ShowReadwriteSplittingRules,
        }
    }
}

impl StatementKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::ShowTransactionRule => "SHOW TRANSACTION RULE",
            Self::ShowSqlParserRule => "SHOW SQL_PARSER RULE",
            Self::ShowGlobalClockRule => "SHOW GLOBAL CLOCK RULE",
            Self::ShowReadwriteSplittingRules => "SHOW READWRITE_SPLITTING RULES",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
