//! Core domain layer for Stencil.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O — reading templates, writing the target tree, spawning the
//! package installer — goes through ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror
//! - **Immutable values**: The render context is built once and never mutated
//!   during a scaffold run

// Public API - what the world sees
pub mod context;
pub mod error;
pub mod render;
pub mod request;
pub mod skip;

// Re-exports for convenience
pub use context::RenderContext;
pub use error::{DomainError, ErrorCategory};
pub use render::render;
pub use request::ScaffoldRequest;
