use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("Name is required")]
    MissingName,
    #[error("Invalid week day: {0}")]
    InvalidWeekDay(String),
}
