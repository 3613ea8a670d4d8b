use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown token kind: {token:?}")]
    UnknownTokenKind { token: String },
}

impl Error {
    pub fn get_error_name(&self) -> &str {
        match self {
            Error::UnknownTokenKind { .. } => "UnknownTokenKind",
        }
    }
}
