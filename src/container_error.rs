use thiserror::Error;

use crate::{BindingKey, BindingKind};

/// Boxed error raised from inside a user-supplied strategy body.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced while registering or resolving bindings.
///
/// Every variant is terminal for the call that raised it; the container never
/// retries or swallows a failure.
#[derive(Debug, Error)]
pub enum Error {
    #[error("A binding already exists for {key}.")]
    DuplicateBinding { key: BindingKey },

    #[error("No binding registered for {key}.")]
    BindingNotFound { key: BindingKey },

    #[error(
        "Could not convert binding. Expected binding kind was {expected} but actual binding kind was {actual}."
    )]
    BindingKindMismatch {
        expected: BindingKind,
        actual: BindingKind,
    },

    /// The stored kind matched but the payload was built for another type.
    #[error("Failed to cast underlying {kind} binding to a binding of {expected_type}.")]
    BindingPayloadMismatch {
        kind: BindingKind,
        expected_type: &'static str,
    },

    #[error("Cannot get requesting binding - resolution path is empty.")]
    EmptyResolutionPath,

    #[error("Could not resolve binding {key}. Binding kind was unknown or invalid.")]
    UnknownBindingKind { key: BindingKey },

    #[error("Circular dependency detected while resolving {key}.")]
    CircularDependency {
        key: BindingKey,
        path: Vec<BindingKey>,
    },

    /// Failure reported by a bound function, resolver or construction hook.
    #[error(transparent)]
    Custom(BoxError),
}

impl Error {
    /// Wraps an arbitrary error raised by a strategy body.
    pub fn custom(error: impl Into<BoxError>) -> Self {
        Error::Custom(error.into())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
