use super::FlagSet;

/// Output format enumeration for the report
///
/// Both the CLI (which picks it from the flags) and the formatter factory
/// need to understand it, so it lives in the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Summary sentences and tables (default)
    Table,
    /// Machine-readable JSON document
    Json,
}

impl OutputFormat {
    pub fn from_flags(flags: &FlagSet) -> Self {
        if flags.json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
