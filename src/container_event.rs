use crate::{BindingKey, BindingKind};

/// Events emitted by a [`Container`](crate::Container).
///
/// These events are passed to the callback set via
/// [`Container::set_trace_callback`](crate::Container::set_trace_callback).
/// The `Clone` derive allows callbacks to store or forward events if needed.
///
/// # Examples
///
/// ```rust
/// use serum_registry::{BindingKey, BindingKind, ContainerEvent};
///
/// let event = ContainerEvent::Bind {
///     key: BindingKey::unnamed::<i32>(),
///     kind: BindingKind::Constant,
/// };
/// assert_eq!(event.to_string(), "bind { key: [i32, \"\"], kind: Constant }");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ContainerEvent {
    /// A binding was registered.
    Bind { key: BindingKey, kind: BindingKind },

    /// A top-level or nested `get` was made.
    Get {
        key: BindingKey,
        /// Whether a binding was registered under the key
        found: bool,
    },

    /// A `has_binding` check was performed.
    HasBinding { key: BindingKey, found: bool },
}

impl std::fmt::Display for ContainerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContainerEvent::Bind { key, kind } => {
                write!(f, "bind {{ key: {key}, kind: {kind} }}")
            }
            ContainerEvent::Get { key, found } => {
                write!(f, "get {{ key: {key}, found: {found} }}")
            }
            ContainerEvent::HasBinding { key, found } => {
                write!(f, "has_binding {{ key: {key}, found: {found} }}")
            }
        }
    }
}
