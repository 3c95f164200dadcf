pub mod post_app;

pub use post_app::{AppMessageError, AppMessageResponse, post_app};
