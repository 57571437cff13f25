//! Identity of a binding: the requested type plus an optional name.

use std::any::{type_name, TypeId};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Key under which a binding is registered and looked up.
///
/// Two keys are equal when both the request type and the name match. The
/// empty name is the default (unnamed) binding for a type.
///
/// # Examples
///
/// ```rust
/// use serum_registry::BindingKey;
///
/// let key = BindingKey::of::<i32>("port");
/// assert_eq!(key.to_string(), "[i32, \"port\"]");
/// assert_ne!(key, BindingKey::unnamed::<i32>());
/// ```
#[derive(Debug, Clone)]
pub struct BindingKey {
    request_type: TypeId,
    type_name: &'static str,
    name: String,
}

impl BindingKey {
    /// Builds a key from a raw type identity.
    ///
    /// `type_name` is only used for diagnostics; identity is `request_type`.
    pub fn new(request_type: TypeId, type_name: &'static str, name: impl Into<String>) -> Self {
        Self {
            request_type,
            type_name,
            name: name.into(),
        }
    }

    /// Key for request type `T` under `name`.
    pub fn of<T: ?Sized + 'static>(name: impl Into<String>) -> Self {
        Self::new(TypeId::of::<T>(), type_name::<T>(), name)
    }

    /// Key for the default (unnamed) binding of `T`.
    pub fn unnamed<T: ?Sized + 'static>() -> Self {
        Self::of::<T>("")
    }

    pub fn request_type(&self) -> TypeId {
        self.request_type
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this key names the default binding of its type.
    pub fn is_unnamed(&self) -> bool {
        self.name.is_empty()
    }
}

impl PartialEq for BindingKey {
    fn eq(&self, other: &Self) -> bool {
        self.request_type == other.request_type && self.name == other.name
    }
}

impl Eq for BindingKey {}

impl Hash for BindingKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.request_type.hash(state);
    }
}

// Both fields take part so that same-typed keys with different names are
// still strictly ordered.
impl Ord for BindingKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.request_type.cmp(&other.request_type))
    }
}

impl PartialOrd for BindingKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BindingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, \"{}\"]", self.type_name, self.name)
    }
}
