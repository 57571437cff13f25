use std::fmt;

/// The closed set of binding strategy shapes.
///
/// `Unknown` only describes an empty [`AnyBinding`](crate::AnyBinding); a
/// registered binding never carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BindingKind {
    #[default]
    Unknown,
    /// Always resolves a copy of one stored value.
    Constant,
    /// Resolves by calling a stored function.
    Function,
    /// Resolves by delegating to a [`Resolver`](crate::Resolver) object.
    Resolver,
    /// Resolves by constructing the requested type itself.
    Construct,
    /// Wraps another binding and caches its first result.
    Singleton,
}

impl fmt::Display for BindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BindingKind::Unknown => "Unknown",
            BindingKind::Constant => "Constant",
            BindingKind::Function => "Function",
            BindingKind::Resolver => "Resolver",
            BindingKind::Construct => "Construct",
            BindingKind::Singleton => "Singleton",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(BindingKind::Unknown.to_string(), "Unknown");
        assert_eq!(BindingKind::Function.to_string(), "Function");
        assert_eq!(BindingKind::Singleton.to_string(), "Singleton");
    }

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(BindingKind::default(), BindingKind::Unknown);
    }
}
