//! # Command System
//!
//! Text command (`/name args`) handling for direct and guild messages.
//!
//! - **Version**: 3.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 3.0.0: Text commands routed through CommandRouter with dialogue fallback
//! - 2.1.0: Add modular handler infrastructure (handler trait, context, registry)

pub mod context;
pub mod handler;
pub mod handlers;
pub mod registry;
pub mod router;

pub use context::CommandContext;
pub use handler::TextCommandHandler;
pub use registry::CommandRegistry;
pub use router::{CommandInvocation, CommandRouter};
