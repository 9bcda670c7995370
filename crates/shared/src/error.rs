#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Validate(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Validate(format!($fmt, $($arg)*)))
    };
}
