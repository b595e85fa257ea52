use thiserror::Error;

/// Domain errors raised by the screening and valuation computations.
///
/// List-producing operations never surface `MissingData`; they skip the
/// affected ticker instead. Single-ticker computations propagate it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScreenerError {
    #[error("{symbol}: required field `{field}` is not available")]
    MissingData { symbol: String, field: &'static str },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ScreenerError {
    pub fn missing(symbol: impl Into<String>, field: &'static str) -> Self {
        ScreenerError::MissingData {
            symbol: symbol.into(),
            field,
        }
    }
}
