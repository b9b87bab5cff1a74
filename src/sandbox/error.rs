use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumError {
    #[error("Cannot list \"{requested}\" as it is outside the permitted working directory")]
    OutsideRoot { requested: String },

    #[error("\"{requested}\" is not a directory")]
    NotADirectory { requested: String },

    #[error("Invalid working directory \"{root}\": {reason}")]
    InvalidRoot { root: String, reason: String },

    #[error("I/O failure while listing directory: {0}")]
    Io(String),
}

impl EnumError {
    /// Stable machine-readable tag for this error kind
    pub fn kind(&self) -> &'static str {
        match self {
            EnumError::OutsideRoot { .. } => "outside_root",
            EnumError::NotADirectory { .. } => "not_a_directory",
            EnumError::InvalidRoot { .. } => "invalid_root",
            EnumError::Io(_) => "io",
        }
    }
}
