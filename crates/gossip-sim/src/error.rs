use gossip_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    InvalidInput(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
