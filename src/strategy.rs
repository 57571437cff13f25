//! The concrete binding strategies.
//!
//! Each strategy stores its own [`BindingKey`] and a fixed [`BindingKind`].
//! Strategies that need to copy values (`Constant`, `Singleton`) capture
//! `T::clone` when they are built, so resolving them only needs `T: 'static`.

use std::fmt;
use std::rc::Rc;

use once_cell::unsync::OnceCell;
use tracing::debug;

use crate::binding::private::Sealed;
use crate::{
    Binding, BindingKey, BindingKind, Construct, Container, ResolutionContext, Resolver, Result,
};

/// Call target of a function binding.
pub type ResolveFn<T> = dyn Fn(&Container, &mut ResolutionContext) -> Result<T>;

// -------------------------------------------------------------------------------------------------
// Constant
// -------------------------------------------------------------------------------------------------

/// Always resolves a copy of one value.
pub struct ConstantBinding<T> {
    key: BindingKey,
    value: T,
    clone_value: fn(&T) -> T,
}

impl<T: Clone + 'static> ConstantBinding<T> {
    pub fn new(value: T, name: impl Into<String>) -> Self {
        Self {
            key: BindingKey::of::<T>(name),
            value,
            clone_value: T::clone,
        }
    }
}

impl<T: 'static> ConstantBinding<T> {
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T> Sealed for ConstantBinding<T> {}

impl<T: 'static> Binding<T> for ConstantBinding<T> {
    fn kind(&self) -> BindingKind {
        BindingKind::Constant
    }

    fn key(&self) -> &BindingKey {
        &self.key
    }

    fn resolve_core(&self, _: &Container, _: &mut ResolutionContext) -> Result<T> {
        Ok((self.clone_value)(&self.value))
    }

    fn clone_binding(&self) -> Box<dyn Binding<T>> {
        Box::new(Self {
            key: self.key.clone(),
            value: (self.clone_value)(&self.value),
            clone_value: self.clone_value,
        })
    }
}

// -------------------------------------------------------------------------------------------------
// Function
// -------------------------------------------------------------------------------------------------

/// Resolves by calling a function with the container and the context.
///
/// The function runs on every resolve; nothing is cached.
pub struct FunctionBinding<T> {
    key: BindingKey,
    function: Rc<ResolveFn<T>>,
}

impl<T: 'static> FunctionBinding<T> {
    pub fn new<F>(function: F, name: impl Into<String>) -> Self
    where
        F: Fn(&Container, &mut ResolutionContext) -> Result<T> + 'static,
    {
        Self {
            key: BindingKey::of::<T>(name),
            function: Rc::new(function),
        }
    }
}

impl<T> Clone for FunctionBinding<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            function: Rc::clone(&self.function),
        }
    }
}

impl<T> Sealed for FunctionBinding<T> {}

impl<T: 'static> Binding<T> for FunctionBinding<T> {
    fn kind(&self) -> BindingKind {
        BindingKind::Function
    }

    fn key(&self) -> &BindingKey {
        &self.key
    }

    fn resolve_core(&self, container: &Container, context: &mut ResolutionContext) -> Result<T> {
        (self.function)(container, context)
    }

    fn clone_binding(&self) -> Box<dyn Binding<T>> {
        Box::new(self.clone())
    }
}

// -------------------------------------------------------------------------------------------------
// Resolver
// -------------------------------------------------------------------------------------------------

/// Delegates to a [`Resolver`] object. Clones share the resolver.
pub struct ResolverBinding<T> {
    key: BindingKey,
    resolver: Rc<dyn Resolver<T>>,
}

impl<T: 'static> ResolverBinding<T> {
    pub fn new<R: Resolver<T>>(resolver: R, name: impl Into<String>) -> Self {
        Self {
            key: BindingKey::of::<T>(name),
            resolver: Rc::new(resolver),
        }
    }
}

impl<T> Clone for ResolverBinding<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            resolver: Rc::clone(&self.resolver),
        }
    }
}

impl<T> Sealed for ResolverBinding<T> {}

impl<T: 'static> Binding<T> for ResolverBinding<T> {
    fn kind(&self) -> BindingKind {
        BindingKind::Resolver
    }

    fn key(&self) -> &BindingKey {
        &self.key
    }

    fn resolve_core(&self, container: &Container, context: &mut ResolutionContext) -> Result<T> {
        self.resolver.resolve(container, context)
    }

    fn clone_binding(&self) -> Box<dyn Binding<T>> {
        Box::new(self.clone())
    }
}

// -------------------------------------------------------------------------------------------------
// Construct
// -------------------------------------------------------------------------------------------------

/// Builds a fresh `T` on every resolve, either through [`Default`] or through
/// the type's [`Construct`] hook.
pub struct ConstructorBinding<T> {
    key: BindingKey,
    construct: fn(&Container, &mut ResolutionContext) -> Result<T>,
}

impl<T: Default + 'static> ConstructorBinding<T> {
    pub fn from_default(name: impl Into<String>) -> Self {
        Self {
            key: BindingKey::of::<T>(name),
            construct: |_, _| Ok(T::default()),
        }
    }
}

impl<T: Construct> ConstructorBinding<T> {
    pub fn from_hook(name: impl Into<String>) -> Self {
        Self {
            key: BindingKey::of::<T>(name),
            construct: T::construct,
        }
    }
}

impl<T> Clone for ConstructorBinding<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            construct: self.construct,
        }
    }
}

impl<T> Sealed for ConstructorBinding<T> {}

impl<T: 'static> Binding<T> for ConstructorBinding<T> {
    fn kind(&self) -> BindingKind {
        BindingKind::Construct
    }

    fn key(&self) -> &BindingKey {
        &self.key
    }

    fn resolve_core(&self, container: &Container, context: &mut ResolutionContext) -> Result<T> {
        (self.construct)(container, context)
    }

    fn clone_binding(&self) -> Box<dyn Binding<T>> {
        Box::new(self.clone())
    }
}

// -------------------------------------------------------------------------------------------------
// Singleton
// -------------------------------------------------------------------------------------------------

/// Wraps another strategy and caches the value it produces first.
///
/// The cache moves from empty to cached exactly once. Once cached, the inner
/// strategy is never invoked again and every resolve returns a clone of the
/// cached value; for `Rc<_>` values that means the same allocation.
pub struct SingletonBinding<T> {
    key: BindingKey,
    inner: Box<dyn Binding<T>>,
    cache: OnceCell<T>,
    clone_value: fn(&T) -> T,
}

impl<T: Clone + 'static> SingletonBinding<T> {
    /// Wraps an independent copy of `inner` under the same key.
    pub fn new(inner: &dyn Binding<T>) -> Self {
        Self {
            key: inner.key().clone(),
            inner: inner.clone_binding(),
            cache: OnceCell::new(),
            clone_value: T::clone,
        }
    }
}

impl<T: 'static> SingletonBinding<T> {
    pub fn is_cached(&self) -> bool {
        self.cache.get().is_some()
    }

    pub fn cached(&self) -> Option<&T> {
        self.cache.get()
    }

    /// Kind of the wrapped strategy.
    pub fn inner_kind(&self) -> BindingKind {
        self.inner.kind()
    }
}

impl<T> Sealed for SingletonBinding<T> {}

impl<T: 'static> Binding<T> for SingletonBinding<T> {
    fn kind(&self) -> BindingKind {
        BindingKind::Singleton
    }

    fn key(&self) -> &BindingKey {
        &self.key
    }

    fn resolve_core(&self, container: &Container, context: &mut ResolutionContext) -> Result<T> {
        if let Some(cached) = self.cache.get() {
            return Ok((self.clone_value)(cached));
        }

        // Our key is already on top of the path and the inner strategy shares it.
        let value = self.inner.resolve_core(container, context)?;

        // A re-entrant resolve of this same binding may have filled the cell
        // first; the value already cached wins.
        let cached = match self.cache.try_insert(value) {
            Ok(cached) => {
                debug!(key = %self.key, "Cached singleton value");
                cached
            }
            Err((cached, _)) => cached,
        };

        Ok((self.clone_value)(cached))
    }

    fn clone_binding(&self) -> Box<dyn Binding<T>> {
        let cache = match self.cache.get() {
            Some(cached) => OnceCell::with_value((self.clone_value)(cached)),
            None => OnceCell::new(),
        };

        Box::new(Self {
            key: self.key.clone(),
            inner: self.inner.clone_binding(),
            cache,
            clone_value: self.clone_value,
        })
    }
}

macro_rules! impl_debug {
    ($($strategy:ident),* $(,)?) => {
        $(
            impl<T: 'static> fmt::Debug for $strategy<T> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.debug_struct(stringify!($strategy))
                        .field("key", &self.key)
                        .field("kind", &self.kind())
                        .finish_non_exhaustive()
                }
            }
        )*
    };
}

impl_debug!(
    ConstantBinding,
    FunctionBinding,
    ResolverBinding,
    ConstructorBinding,
    SingletonBinding,
);
