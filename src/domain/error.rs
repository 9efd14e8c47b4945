// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("You can only select up to 2 labels")]
    LabelLimit,
    #[error("Unknown label: {0}")]
    UnknownLabel(String),
}
