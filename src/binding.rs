//! Strategy contracts.
//!
//! [`Binding`] is the sealed contract every strategy in [`crate::strategy`]
//! implements. [`Resolver`] and [`Construct`] are the two extension points
//! open to callers: a resolver object that produces values, and a type that
//! knows how to build itself out of the container.

use crate::{BindingKey, BindingKind, Container, ResolutionContext, Result};

pub(crate) mod private {
    pub trait Sealed {}
}

/// A strategy for producing values of `T`.
///
/// Callers never implement this trait; they pick one of the strategies in
/// [`crate::strategy`] through the `bind_*` methods of [`Container`].
pub trait Binding<T>: private::Sealed + 'static {
    /// Kind of this strategy, fixed at construction.
    fn kind(&self) -> BindingKind;

    fn key(&self) -> &BindingKey;

    /// Produces a value. The strategy's own key is on top of `context` while
    /// this runs.
    fn resolve_core(&self, container: &Container, context: &mut ResolutionContext) -> Result<T>;

    /// Deep copy of the strategy.
    fn clone_binding(&self) -> Box<dyn Binding<T>>;

    /// Pushes the strategy's key, runs [`resolve_core`](Binding::resolve_core)
    /// and pops the key again, whether or not resolution succeeded.
    fn resolve(&self, container: &Container, context: &mut ResolutionContext) -> Result<T> {
        context.push_and_run(self.key().clone(), |context| {
            self.resolve_core(container, context)
        })
    }
}

/// User-supplied object that resolves values of `T`.
///
/// # Examples
///
/// ```rust
/// use serum_registry::{Container, ResolutionContext, Resolver, Result};
///
/// #[derive(Default)]
/// struct Greeting;
///
/// impl Resolver<String> for Greeting {
///     fn resolve(&self, container: &Container, context: &mut ResolutionContext) -> Result<String> {
///         let name: String = container.get_named_with(context, "user")?;
///         Ok(format!("Hello, {name}!"))
///     }
/// }
///
/// let mut container = Container::new();
/// container
///     .bind_named_constant("user", "Ada".to_string())?
///     .bind_resolver::<String, Greeting>()?;
///
/// assert_eq!(container.get::<String>()?, "Hello, Ada!");
/// # Ok::<(), serum_registry::Error>(())
/// ```
pub trait Resolver<T>: 'static {
    fn resolve(&self, container: &Container, context: &mut ResolutionContext) -> Result<T>;
}

/// Opt-in construction hook for types bound to themselves.
///
/// Types implementing `Construct` are built through
/// [`Container::bind_constructor`] and can pull their own dependencies out of
/// the container. Types without a hook bind through [`Default`] instead.
pub trait Construct: Sized + 'static {
    fn construct(container: &Container, context: &mut ResolutionContext) -> Result<Self>;
}
