pub mod auth;
pub mod icon;
pub mod pages;
pub mod theme;
pub mod typed_text;

pub use icon::{Icon, icons};
pub use typed_text::TypedText;
