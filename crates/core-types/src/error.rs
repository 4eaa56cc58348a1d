use thiserror::Error;

use crate::structs::PointId;

#[derive(Error, Debug, PartialEq)]
pub enum CoreError {
    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),

    #[error("No equity point with id {0}")]
    PointNotFound(PointId),
}
