use thiserror::Error;

use crate::session::StorageKind;

/// Failures at the edges of the header: acquiring browser capabilities and
/// misusing the user store API. Sign-out itself never fails; adapters log
/// these and carry on without the capability.
#[derive(Debug, Error)]
pub enum Error {
    #[error("browser window is not available")]
    WindowUnavailable,

    #[error("document is not an HTML document")]
    DocumentUnavailable,

    #[error("{0} storage is not available")]
    StorageUnavailable(StorageKind),

    #[error("{operation} failed: {message}")]
    Js {
        operation: &'static str,
        message: String,
    },

    #[error("store state must be a JSON object, got {0}")]
    StateNotObject(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
