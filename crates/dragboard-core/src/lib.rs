pub mod config;
pub mod error;
pub mod id;
pub mod result;

pub use config::AppConfig;
pub use error::DragboardError;
pub use id::Id;
pub use result::DragboardResult;
