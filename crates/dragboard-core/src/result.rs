use crate::error::DragboardError;

pub type DragboardResult<T> = Result<T, DragboardError>;
