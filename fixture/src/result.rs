use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("serializer error")]
    Serializer(#[from] bincode::Error),
}

pub type FixtureResult<T> = Result<T, FixtureError>;
