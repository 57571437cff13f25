//! The binding registry.
//!
//! A [`Container`] owns one type-erased strategy per [`BindingKey`]. The
//! `bind_*` methods build a strategy, refuse keys that are already taken and
//! return the container so registrations chain. The `get*` methods look a key
//! up, recover the concrete strategy by its kind and resolve it, threading one
//! [`ResolutionContext`] through every nested `get` a strategy body makes.
//!
//! # Examples
//!
//! ```rust
//! use serum_registry::Container;
//! use std::rc::Rc;
//!
//! #[derive(Default)]
//! struct Database;
//!
//! struct Service {
//!     database: Rc<Database>,
//!     retries: u32,
//! }
//!
//! let mut container = Container::new();
//! container
//!     .bind_constant(3u32)?
//!     .bind_singleton_shared::<Database>()?
//!     .bind_function(|container, context| {
//!         Ok(Service {
//!             database: container.get_with(context)?,
//!             retries: container.get_with(context)?,
//!         })
//!     })?;
//!
//! let first: Service = container.get()?;
//! let second: Service = container.get()?;
//!
//! assert_eq!(first.retries, 3);
//! assert!(Rc::ptr_eq(&first.database, &second.database));
//! # Ok::<(), serum_registry::Error>(())
//! ```

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::strategy::{
    ConstantBinding, ConstructorBinding, FunctionBinding, ResolverBinding, SingletonBinding,
};
use crate::{
    AnyBinding, Binding, BindingKey, BindingKind, Construct, ContainerConfig, ContainerEvent,
    CyclePolicy, Error, ResolutionContext, Resolver, Result,
};

/// Type alias for the user-supplied tracing callback.
///
/// The callback receives a reference to a [`ContainerEvent`] every time the
/// container is interacted with.
pub type TraceCallback = dyn Fn(&ContainerEvent) + 'static;

/// Registry of bindings keyed by `(type, name)`.
///
/// The container is a plain single-owner value. It is not internally
/// synchronised; callers sharing it across threads must provide their own
/// exclusion.
pub struct Container {
    bindings: HashMap<BindingKey, AnyBinding>,
    config: ContainerConfig,
    trace: Option<Rc<TraceCallback>>,
}

impl Container {
    pub fn new() -> Self {
        Self::with_config(ContainerConfig::default())
    }

    pub fn with_config(config: ContainerConfig) -> Self {
        Self {
            bindings: HashMap::new(),
            config,
            trace: None,
        }
    }

    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Set a tracing callback invoked for every bind, get and has-binding call.
    ///
    /// Replaces any previous callback.
    pub fn set_trace_callback(&mut self, callback: impl Fn(&ContainerEvent) + 'static) {
        self.trace = Some(Rc::new(callback));
    }

    /// Clear the tracing callback.
    pub fn clear_trace_callback(&mut self) {
        self.trace = None;
    }

    fn emit_event(&self, event: ContainerEvent) {
        if let Some(callback) = self.trace.as_ref() {
            callback(&event);
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------------------------------

    /// Number of registered bindings.
    pub fn count(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Registered keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &BindingKey> {
        self.bindings.keys()
    }

    /// Whether the default binding of `T` exists. Never resolves anything.
    pub fn has_binding<T: ?Sized + 'static>(&self) -> bool {
        self.has_named_binding::<T>("")
    }

    pub fn has_named_binding<T: ?Sized + 'static>(&self, name: &str) -> bool {
        let key = BindingKey::of::<T>(name);
        let found = self.bindings.contains_key(&key);

        self.emit_event(ContainerEvent::HasBinding { key, found });

        found
    }

    // -------------------------------------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------------------------------------

    /// Bind `T` to a constant. Every `get` returns a clone of `value`.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateBinding`] if `T` already has a default binding.
    pub fn bind_constant<T: Clone + 'static>(&mut self, value: T) -> Result<&mut Self> {
        self.bind_named_constant("", value)
    }

    pub fn bind_named_constant<T: Clone + 'static>(
        &mut self,
        name: &str,
        value: T,
    ) -> Result<&mut Self> {
        self.bind_core::<T, _>(ConstantBinding::new(value, name))
    }

    /// Bind `T` to the result of `function`, called on every `get`.
    ///
    /// The function receives the container and the current context so it can
    /// resolve its own dependencies.
    pub fn bind_function<T, F>(&mut self, function: F) -> Result<&mut Self>
    where
        T: 'static,
        F: Fn(&Container, &mut ResolutionContext) -> Result<T> + 'static,
    {
        self.bind_named_function::<T, F>("", function)
    }

    pub fn bind_named_function<T, F>(&mut self, name: &str, function: F) -> Result<&mut Self>
    where
        T: 'static,
        F: Fn(&Container, &mut ResolutionContext) -> Result<T> + 'static,
    {
        self.bind_core::<T, _>(FunctionBinding::new(function, name))
    }

    /// Bind `T` to a default-constructed resolver of type `R`.
    pub fn bind_resolver<T, R>(&mut self) -> Result<&mut Self>
    where
        T: 'static,
        R: Resolver<T> + Default,
    {
        self.bind_named_resolver::<T, R>("")
    }

    pub fn bind_named_resolver<T, R>(&mut self, name: &str) -> Result<&mut Self>
    where
        T: 'static,
        R: Resolver<T> + Default,
    {
        self.bind_core::<T, _>(ResolverBinding::new(R::default(), name))
    }

    /// Bind `T` to the given resolver instance.
    pub fn bind_resolver_instance<T, R>(&mut self, resolver: R) -> Result<&mut Self>
    where
        T: 'static,
        R: Resolver<T>,
    {
        self.bind_named_resolver_instance::<T, R>("", resolver)
    }

    pub fn bind_named_resolver_instance<T, R>(
        &mut self,
        name: &str,
        resolver: R,
    ) -> Result<&mut Self>
    where
        T: 'static,
        R: Resolver<T>,
    {
        self.bind_core::<T, _>(ResolverBinding::new(resolver, name))
    }

    /// Bind `T` to itself: every `get` returns a fresh `T::default()`.
    pub fn bind_self<T: Default + 'static>(&mut self) -> Result<&mut Self> {
        self.bind_named_self::<T>("")
    }

    pub fn bind_named_self<T: Default + 'static>(&mut self, name: &str) -> Result<&mut Self> {
        self.bind_core::<T, _>(ConstructorBinding::<T>::from_default(name))
    }

    /// Bind `T` to itself through its [`Construct`] hook.
    pub fn bind_constructor<T: Construct>(&mut self) -> Result<&mut Self> {
        self.bind_named_constructor::<T>("")
    }

    pub fn bind_named_constructor<T: Construct>(&mut self, name: &str) -> Result<&mut Self> {
        self.bind_core::<T, _>(ConstructorBinding::<T>::from_hook(name))
    }

    /// Bind `Rc<T>` to a freshly allocated `T::default()` per `get`.
    ///
    /// To hand the value out behind a trait object instead, use
    /// [`bind_shared_as`](Container::bind_shared_as).
    pub fn bind_shared<T: Default + 'static>(&mut self) -> Result<&mut Self> {
        self.bind_named_shared::<T>("")
    }

    pub fn bind_named_shared<T: Default + 'static>(&mut self, name: &str) -> Result<&mut Self> {
        self.bind_core::<Rc<T>, _>(shared_default::<T>(name))
    }

    /// Bind `Rc<T>` to a freshly allocated `T` built by its [`Construct`] hook.
    pub fn bind_shared_constructor<T: Construct>(&mut self) -> Result<&mut Self> {
        self.bind_named_shared_constructor::<T>("")
    }

    pub fn bind_named_shared_constructor<T: Construct>(
        &mut self,
        name: &str,
    ) -> Result<&mut Self> {
        self.bind_core::<Rc<T>, _>(shared_hook::<T>(name))
    }

    /// Bind `Rc<T>` to one `T::default()` allocated on first `get` and shared
    /// by every later `get`.
    pub fn bind_singleton_shared<T: Default + 'static>(&mut self) -> Result<&mut Self> {
        self.bind_named_singleton_shared::<T>("")
    }

    pub fn bind_named_singleton_shared<T: Default + 'static>(
        &mut self,
        name: &str,
    ) -> Result<&mut Self> {
        self.bind_core::<Rc<T>, _>(SingletonBinding::<Rc<T>>::new(&shared_default::<T>(name)))
    }

    /// Like [`bind_singleton_shared`](Container::bind_singleton_shared), built
    /// through the [`Construct`] hook.
    pub fn bind_singleton_shared_constructor<T: Construct>(&mut self) -> Result<&mut Self> {
        self.bind_named_singleton_shared_constructor::<T>("")
    }

    pub fn bind_named_singleton_shared_constructor<T: Construct>(
        &mut self,
        name: &str,
    ) -> Result<&mut Self> {
        self.bind_core::<Rc<T>, _>(SingletonBinding::<Rc<T>>::new(&shared_hook::<T>(name)))
    }

    /// Bind `Rc<I>` (typically `Rc<dyn Trait>`) to a fresh `Impl::default()`
    /// per `get`.
    ///
    /// `coerce` turns the implementation pointer into the requested one;
    /// for trait objects it is the unsizing cast `|rc| rc as Rc<dyn Trait>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serum_registry::Container;
    /// use std::rc::Rc;
    ///
    /// trait Clock {
    ///     fn now(&self) -> u64;
    /// }
    ///
    /// #[derive(Default)]
    /// struct FixedClock;
    ///
    /// impl Clock for FixedClock {
    ///     fn now(&self) -> u64 {
    ///         42
    ///     }
    /// }
    ///
    /// let mut container = Container::new();
    /// container.bind_shared_as::<dyn Clock, FixedClock>(|clock| clock as Rc<dyn Clock>)?;
    ///
    /// assert_eq!(container.get_shared::<dyn Clock>()?.now(), 42);
    /// # Ok::<(), serum_registry::Error>(())
    /// ```
    pub fn bind_shared_as<I, Impl>(&mut self, coerce: fn(Rc<Impl>) -> Rc<I>) -> Result<&mut Self>
    where
        I: ?Sized + 'static,
        Impl: Default + 'static,
    {
        self.bind_named_shared_as::<I, Impl>("", coerce)
    }

    pub fn bind_named_shared_as<I, Impl>(
        &mut self,
        name: &str,
        coerce: fn(Rc<Impl>) -> Rc<I>,
    ) -> Result<&mut Self>
    where
        I: ?Sized + 'static,
        Impl: Default + 'static,
    {
        self.bind_core::<Rc<I>, _>(shared_default_as::<I, Impl>(name, coerce))
    }

    /// Like [`bind_shared_as`](Container::bind_shared_as), but one
    /// implementation instance is shared by every `get`.
    pub fn bind_singleton_shared_as<I, Impl>(
        &mut self,
        coerce: fn(Rc<Impl>) -> Rc<I>,
    ) -> Result<&mut Self>
    where
        I: ?Sized + 'static,
        Impl: Default + 'static,
    {
        self.bind_named_singleton_shared_as::<I, Impl>("", coerce)
    }

    pub fn bind_named_singleton_shared_as<I, Impl>(
        &mut self,
        name: &str,
        coerce: fn(Rc<Impl>) -> Rc<I>,
    ) -> Result<&mut Self>
    where
        I: ?Sized + 'static,
        Impl: Default + 'static,
    {
        self.bind_core::<Rc<I>, _>(SingletonBinding::<Rc<I>>::new(&shared_default_as::<I, Impl>(
            name, coerce,
        )))
    }

    /// Bind `T` to the result of `function`, called once on the first `get`
    /// and cached for every later one.
    pub fn bind_singleton_function<T, F>(&mut self, function: F) -> Result<&mut Self>
    where
        T: Clone + 'static,
        F: Fn(&Container, &mut ResolutionContext) -> Result<T> + 'static,
    {
        self.bind_named_singleton_function::<T, F>("", function)
    }

    pub fn bind_named_singleton_function<T, F>(
        &mut self,
        name: &str,
        function: F,
    ) -> Result<&mut Self>
    where
        T: Clone + 'static,
        F: Fn(&Container, &mut ResolutionContext) -> Result<T> + 'static,
    {
        self.bind_core::<T, _>(SingletonBinding::<T>::new(&FunctionBinding::new(
            function, name,
        )))
    }

    fn bind_core<T, B>(&mut self, binding: B) -> Result<&mut Self>
    where
        T: 'static,
        B: Binding<T>,
        AnyBinding: From<B>,
    {
        let key = binding.key().clone();
        if self.bindings.contains_key(&key) {
            return Err(Error::DuplicateBinding { key });
        }

        let kind = binding.kind();
        self.bindings.insert(key.clone(), AnyBinding::from(binding));

        debug!(key = %key, kind = %kind, "Registered binding");
        self.emit_event(ContainerEvent::Bind { key, kind });

        Ok(self)
    }

    // -------------------------------------------------------------------------------------------------
    // Resolution
    // -------------------------------------------------------------------------------------------------

    /// Resolve the default binding of `T` with a fresh context.
    ///
    /// # Errors
    ///
    /// - [`Error::BindingNotFound`] if nothing is bound for `T`
    /// - [`Error::CircularDependency`] under [`CyclePolicy::Reject`]
    /// - whatever the strategy body itself fails with
    pub fn get<T: 'static>(&self) -> Result<T> {
        self.get_named("")
    }

    pub fn get_named<T: 'static>(&self, name: &str) -> Result<T> {
        let mut context = ResolutionContext::new();
        self.get_core(&mut context, name)
    }

    /// Resolve the default binding of `T` inside an existing resolution.
    ///
    /// Strategy bodies use this to resolve their dependencies so that the
    /// nested keys land on the same path.
    pub fn get_with<T: 'static>(&self, context: &mut ResolutionContext) -> Result<T> {
        self.get_core(context, "")
    }

    pub fn get_named_with<T: 'static>(
        &self,
        context: &mut ResolutionContext,
        name: &str,
    ) -> Result<T> {
        self.get_core(context, name)
    }

    /// Shorthand for `get::<Rc<T>>()`.
    pub fn get_shared<T: ?Sized + 'static>(&self) -> Result<Rc<T>> {
        self.get::<Rc<T>>()
    }

    pub fn get_shared_named<T: ?Sized + 'static>(&self, name: &str) -> Result<Rc<T>> {
        self.get_named::<Rc<T>>(name)
    }

    fn get_core<T: 'static>(&self, context: &mut ResolutionContext, name: &str) -> Result<T> {
        let key = BindingKey::of::<T>(name);
        let binding = self.bindings.get(&key);

        self.emit_event(ContainerEvent::Get {
            key: key.clone(),
            found: binding.is_some(),
        });

        let Some(binding) = binding else {
            return Err(Error::BindingNotFound { key });
        };

        if self.config.cycle_policy == CyclePolicy::Reject && context.contains_key(&key) {
            warn!(key = %key, depth = context.depth(), "Rejected circular resolution");
            return Err(Error::CircularDependency {
                key,
                path: context.path().to_vec(),
            });
        }

        trace!(key = %key, kind = %binding.kind(), depth = context.depth(), "Resolving binding");

        match binding.kind() {
            BindingKind::Constant => binding.as_constant::<T>()?.resolve(self, context),
            BindingKind::Function => binding.as_function::<T>()?.resolve(self, context),
            BindingKind::Resolver => binding.as_resolver::<T>()?.resolve(self, context),
            BindingKind::Construct => binding.as_constructor::<T>()?.resolve(self, context),
            // The singleton caches inside its own cell, so the stored entry is
            // already up to date once this returns.
            BindingKind::Singleton => binding.as_singleton::<T>()?.resolve(self, context),
            BindingKind::Unknown => Err(Error::UnknownBindingKind { key }),
        }
    }
}

fn shared_default<T: Default + 'static>(name: &str) -> FunctionBinding<Rc<T>> {
    FunctionBinding::new(|_, _| Ok(Rc::new(T::default())), name)
}

fn shared_default_as<I, Impl>(name: &str, coerce: fn(Rc<Impl>) -> Rc<I>) -> FunctionBinding<Rc<I>>
where
    I: ?Sized + 'static,
    Impl: Default + 'static,
{
    FunctionBinding::new(move |_, _| Ok(coerce(Rc::new(Impl::default()))), name)
}

fn shared_hook<T: Construct>(name: &str) -> FunctionBinding<Rc<T>> {
    FunctionBinding::new(
        |container, context| T::construct(container, context).map(Rc::new),
        name,
    )
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("bindings", &self.bindings)
            .field("config", &self.config)
            .field("tracing", &self.trace.is_some())
            .finish()
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Default, Clone, PartialEq)]
    struct TestType {
        int_value: i32,
        bool_value: bool,
        string_value: String,
    }

    #[derive(Default)]
    struct TestResolver;

    impl<T: Default + 'static> Resolver<T> for TestResolver {
        fn resolve(&self, _: &Container, _: &mut ResolutionContext) -> Result<T> {
            Ok(T::default())
        }
    }

    #[test]
    fn test_count_follows_chained_bindings() -> Result<()> {
        let mut container = Container::new();
        container
            .bind_constant("hello".to_string())?
            .bind_constant(0i32)?
            .bind_constant(0f32)?
            .bind_constant(0f64)?;

        assert_eq!(container.count(), 4);
        Ok(())
    }

    #[test]
    fn test_has_binding() -> Result<()> {
        let mut container = Container::new();
        container
            .bind_named_constant("test-binding", 1.2345f64)?
            .bind_constant(4i32)?;

        assert!(container.has_named_binding::<f64>("test-binding"));
        assert!(!container.has_binding::<f64>());
        assert!(container.has_binding::<i32>());
        assert!(!container.has_binding::<f32>());
        Ok(())
    }

    #[test]
    fn test_duplicate_binding_is_rejected_and_leaves_count() -> Result<()> {
        let mut container = Container::new();
        container.bind_constant(4i32)?;

        let err = container
            .bind_function(|_, _| Ok(3i32))
            .map(|_| ())
            .unwrap_err();

        assert!(matches!(err, Error::DuplicateBinding { ref key } if *key == BindingKey::unnamed::<i32>()));
        assert_eq!(container.count(), 1);
        assert_eq!(container.get::<i32>()?, 4);
        Ok(())
    }

    #[test]
    fn test_get_unregistered_fails() {
        let container = Container::new();

        let err = container.get_named::<String>("missing").unwrap_err();

        assert!(matches!(err, Error::BindingNotFound { .. }));
        assert_eq!(
            err.to_string(),
            "No binding registered for [alloc::string::String, \"missing\"]."
        );
    }

    #[test]
    fn test_constant_binding() -> Result<()> {
        let mut container = Container::new();
        container.bind_constant(4i32)?;

        assert_eq!(container.get::<i32>()?, 4);
        assert_eq!(container.get::<i32>()?, 4);
        Ok(())
    }

    #[test]
    fn test_function_binding_is_not_cached() -> Result<()> {
        let value = Rc::new(RefCell::new("first".to_string()));
        let captured = Rc::clone(&value);

        let mut container = Container::new();
        container.bind_function(move |_, _| Ok(captured.borrow().clone()))?;

        assert_eq!(container.get::<String>()?, "first");
        *value.borrow_mut() = "second".to_string();
        assert_eq!(container.get::<String>()?, "second");
        Ok(())
    }

    #[test]
    fn test_resolver_bindings() -> Result<()> {
        let mut container = Container::new();
        container
            .bind_resolver::<f64, TestResolver>()?
            .bind_named_resolver_instance::<String, _>("instance", TestResolver)?;

        assert_eq!(container.get::<f64>()?, 0.0);
        assert_eq!(container.get_named::<String>("instance")?, "");
        assert!(matches!(
            container.bind_resolver::<f64, TestResolver>(),
            Err(Error::DuplicateBinding { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_bind_self() -> Result<()> {
        let mut container = Container::new();
        container.bind_self::<TestType>()?;

        assert_eq!(container.get::<TestType>()?, TestType::default());
        assert!(container.bind_self::<TestType>().is_err());
        Ok(())
    }

    #[test]
    fn test_singleton_shared_returns_same_instance() -> Result<()> {
        let mut container = Container::new();
        container
            .bind_singleton_shared::<TestType>()?
            .bind_named_shared::<TestType>("transient")?;

        let first = container.get_shared::<TestType>()?;
        let second = container.get_shared::<TestType>()?;
        assert!(Rc::ptr_eq(&first, &second));

        let third = container.get_shared_named::<TestType>("transient")?;
        let fourth = container.get_shared_named::<TestType>("transient")?;
        assert!(!Rc::ptr_eq(&third, &fourth));
        assert_eq!(*third, *fourth);
        Ok(())
    }

    #[test]
    fn test_singleton_function_runs_once() -> Result<()> {
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);

        let mut container = Container::new();
        container.bind_singleton_function(move |_, _| {
            counter.set(counter.get() + 1);
            Ok(format!("call #{}", counter.get()))
        })?;

        assert_eq!(container.get::<String>()?, "call #1");
        assert_eq!(container.get::<String>()?, "call #1");
        assert_eq!(calls.get(), 1);
        Ok(())
    }

    #[test]
    fn test_nested_resolution_sees_requesting_binding() -> Result<()> {
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);

        let mut container = Container::new();
        container
            .bind_function(move |_, context: &mut ResolutionContext| {
                *sink.borrow_mut() = Some(context.requesting_binding()?.clone());
                Ok(7u32)
            })?
            .bind_function(|container, context| {
                let inner: u32 = container.get_with(context)?;
                Ok(u64::from(inner) * 2)
            })?;

        let mut context = ResolutionContext::new();
        assert_eq!(container.get_with::<u64>(&mut context)?, 14);
        assert_eq!(*seen.borrow(), Some(BindingKey::unnamed::<u64>()));
        assert!(context.is_empty());
        Ok(())
    }

    #[test]
    fn test_failed_nested_resolution_unwinds_path() {
        let mut container = Container::new();
        container
            .bind_function(|_, _| -> Result<u32> { Err(Error::custom("inner failed")) })
            .unwrap()
            .bind_function(|container, context| container.get_with::<u32>(context).map(u64::from))
            .unwrap();

        let mut context = ResolutionContext::new();
        let err = container.get_with::<u64>(&mut context).unwrap_err();

        assert_eq!(err.to_string(), "inner failed");
        assert!(context.is_empty());
    }

    #[test]
    fn test_cycle_is_rejected_when_configured() {
        let mut container =
            Container::with_config(ContainerConfig::new().cycle_policy(CyclePolicy::Reject));
        container
            .bind_function(|container, context| container.get_with::<u64>(context).map(|v| v as u32))
            .unwrap()
            .bind_function(|container, context| container.get_with::<u32>(context).map(u64::from))
            .unwrap();

        let err = container.get::<u32>().unwrap_err();

        match err {
            Error::CircularDependency { key, path } => {
                assert_eq!(key, BindingKey::unnamed::<u32>());
                assert_eq!(
                    path,
                    vec![BindingKey::unnamed::<u32>(), BindingKey::unnamed::<u64>()]
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_keys_lists_registrations() -> Result<()> {
        let mut container = Container::new();
        container.bind_constant(1u8)?.bind_named_constant("b", 2u8)?;

        let mut names: Vec<&str> = container.keys().map(BindingKey::name).collect();
        names.sort_unstable();

        assert_eq!(names, vec!["", "b"]);
        Ok(())
    }

    #[test]
    fn test_trace_callback_receives_events() -> Result<()> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);

        let mut container = Container::new();
        container.set_trace_callback(move |event| sink.borrow_mut().push(event.to_string()));

        container.bind_constant(5u8)?;
        let _ = container.get::<u8>()?;
        let _ = container.has_binding::<u16>();

        container.clear_trace_callback();
        let _ = container.get::<u8>()?;

        let captured = events.borrow();
        assert_eq!(captured.len(), 3);
        assert_eq!(captured[0], "bind { key: [u8, \"\"], kind: Constant }");
        assert_eq!(captured[1], "get { key: [u8, \"\"], found: true }");
        assert_eq!(captured[2], "has_binding { key: [u16, \"\"], found: false }");
        Ok(())
    }
}
