pub mod store;
pub mod traits;
pub mod view_preference;

pub use store::*;
pub use traits::*;
pub use view_preference::{ViewPreference, CURRENT_VIEW_KEY};
