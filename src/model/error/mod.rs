pub mod comparison;
pub mod misc;
pub mod system;

use crate::model::error::comparison::ComparisonError;
use crate::model::error::misc::MiscError;
use crate::model::error::system::SystemError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum Error {
    #[error(transparent)]
    Comparison(ComparisonError),
    #[error(transparent)]
    Misc(MiscError),
    #[error(transparent)]
    System(SystemError),
}

impl Error {
    pub fn level(&self) -> tracing::Level {
        match self {
            Self::Comparison(error) => error.level(),
            Self::Misc(error) => error.level(),
            Self::System(error) => error.level(),
        }
    }
}

impl From<ComparisonError> for Error {
    fn from(error: ComparisonError) -> Self {
        Self::Comparison(error)
    }
}

impl From<MiscError> for Error {
    fn from(error: MiscError) -> Self {
        Self::Misc(error)
    }
}

impl From<SystemError> for Error {
    fn from(error: SystemError) -> Self {
        Self::System(error)
    }
}
