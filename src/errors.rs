//! # Error Types Module
//!
//! Errors for the fallible edges of the shopping list engine: configuration,
//! recipe loading and plan persistence. The parsing and consolidation
//! pipeline itself never fails.

/// Custom error types for shopping list operations
#[derive(Debug, Clone, PartialEq)]
pub enum ShoppingListError {
    /// Invalid configuration value
    Config(String),
    /// Recipe input could not be read
    Input(String),
    /// JSON encoding or decoding failed
    Serialization(String),
    /// Plan storage failed
    Storage(String),
}

impl std::fmt::Display for ShoppingListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShoppingListError::Config(msg) => write!(f, "Configuration error: {msg}"),
            ShoppingListError::Input(msg) => write!(f, "Input error: {msg}"),
            ShoppingListError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            ShoppingListError::Storage(msg) => write!(f, "Storage error: {msg}"),
        }
    }
}

impl std::error::Error for ShoppingListError {}

impl From<std::io::Error> for ShoppingListError {
    fn from(err: std::io::Error) -> Self {
        ShoppingListError::Input(err.to_string())
    }
}

impl From<serde_json::Error> for ShoppingListError {
    fn from(err: serde_json::Error) -> Self {
        ShoppingListError::Serialization(err.to_string())
    }
}

impl From<sqlx::Error> for ShoppingListError {
    fn from(err: sqlx::Error) -> Self {
        ShoppingListError::Storage(err.to_string())
    }
}

impl From<anyhow::Error> for ShoppingListError {
    fn from(err: anyhow::Error) -> Self {
        ShoppingListError::Storage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShoppingListError>;
