pub mod board;
pub mod outline;
pub mod view;
