//! # Serum Registry
//!
//! A keyed binding registry for resolving values by type and name.
//! Currently designed for a register-then-resolve pattern inside one thread.
//!
//! Every binding is stored under a [`BindingKey`], the pair of a requested type
//! and a name (the empty name is the default binding). A binding describes
//! *how* to produce a value: a constant, a function, a resolver object, the
//! type's own constructor, or a singleton wrapping any of those.
//!
//! ## Quick Start
//!
//! ```rust
//! use serum_registry::Container;
//!
//! let mut container = Container::new();
//! container
//!     .bind_constant("Hello, World!".to_string())?
//!     .bind_named_constant("port", 8080u16)?;
//!
//! let message: String = container.get()?;
//! assert_eq!(message, "Hello, World!");
//! assert_eq!(container.get_named::<u16>("port")?, 8080);
//! # Ok::<(), serum_registry::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Keyed**: one type may be bound several times under different names
//! - **Nested resolution**: strategy bodies resolve their own dependencies and
//!   can inspect who requested them through [`ResolutionContext`]
//! - **Lazy singletons**: cached on first resolution, shared afterwards
//! - **Tracing support**: `tracing` spans plus an optional event callback
//!
//! ## Main Types
//!
//! - [`Container`] - the registry: `bind_*`, `get*`, `has_binding`, `count`
//! - [`BindingKey`] - the `(type, name)` identity of a binding
//! - [`ResolutionContext`] - the path of keys currently being resolved
//! - [`Resolver`] / [`Construct`] - user hooks for custom strategies
//! - [`Error`] - every failure the registry reports

mod any_binding;
mod binding;
mod binding_key;
mod binding_kind;
mod container;
mod container_config;
mod container_error;
mod container_event;
mod resolution_context;
pub mod strategy;

// Re-export the main public API
pub use any_binding::AnyBinding;
pub use binding::{Binding, Construct, Resolver};
pub use binding_key::BindingKey;
pub use binding_kind::BindingKind;
pub use container::{Container, TraceCallback};
pub use container_config::{ContainerConfig, CyclePolicy};
pub use container_error::{BoxError, Error, Result};
pub use container_event::ContainerEvent;
pub use resolution_context::ResolutionContext;
