use crate::model::PhoneCheck;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddrBookError {
    #[error("Invalid phone number: {value} (expected {})", .check.expectation())]
    InvalidPhone { value: String, check: PhoneCheck },

    #[error("Invalid contact name: name cannot be empty")]
    InvalidName,

    #[error("Contact not found: {0}")]
    RecordNotFound(String),

    #[error("Contact already exists: {0}")]
    RecordConflict(String),

    #[error("Phone not found: {0}")]
    PhoneNotFound(String),

    #[error("Contact {name} already has phone {phone}")]
    PhoneConflict { name: String, phone: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AddrBookError>;
