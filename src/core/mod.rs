//! Core render model and animation logic for the home page

#[cfg(feature = "ssr")]
pub mod config;
pub mod error;
pub mod home;
pub mod typing;

pub use error::TypingError;
pub use home::*;
pub use typing::{AnimationDriver, ScopedAnimation, TypingConfig, TypingRun, TypingStep, Typewriter};
