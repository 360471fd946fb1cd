use thiserror::Error;

pub type VisResult<T> = Result<T, VisError>;

#[derive(Debug, Error)]
pub enum VisError {
    #[error("no mount target: pass an element to `render_into` or configure one")]
    MissingMountTarget,

    #[error("unknown element: id={id}")]
    UnknownElement { id: u32 },

    #[error("invalid tree operation: {0}")]
    InvalidTree(String),

    #[error("child is already borrowed and cannot be rendered")]
    ChildBusy,

    #[error("backend error: {0}")]
    Backend(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
