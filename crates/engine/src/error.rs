use std::fmt;

#[derive(Debug)]
pub enum ReconError {
    /// Source file missing, unreadable, or not valid UTF-8.
    FileRead(String),
    /// Required email column absent from a source table.
    ColumnNotFound { table: String, detail: String },
    /// Report workbook could not be created or saved.
    Write(String),
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileRead(msg) => write!(f, "file read error: {msg}"),
            Self::ColumnNotFound { table, detail } => {
                write!(f, "table '{table}': email column not found ({detail})")
            }
            Self::Write(msg) => write!(f, "report write error: {msg}"),
        }
    }
}

impl std::error::Error for ReconError {}
