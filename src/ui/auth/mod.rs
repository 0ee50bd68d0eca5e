//! Authentication UI module
//!
//! Provides the reactive auth context read by the pages.

mod context;

pub use context::{AuthContext, AuthState, provide_auth_context, use_auth_context};
