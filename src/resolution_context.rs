//! Bookkeeping for one top-level resolution.
//!
//! A [`ResolutionContext`] records the stack of bindings currently being
//! resolved, outermost first. Every strategy pushes its own key before its body
//! runs and pops it afterwards, so a body can ask who requested it or whether
//! some type is already being resolved further up the chain. The context never
//! rejects anything on its own; cycle handling is left to the caller (or to
//! [`CyclePolicy::Reject`](crate::CyclePolicy::Reject)).

use std::any::TypeId;
use std::ops::{Deref, DerefMut};

use crate::{BindingKey, Error, Result};

/// Stack of binding keys for an in-progress resolution.
#[derive(Debug, Clone, Default)]
pub struct ResolutionContext {
    path: Vec<BindingKey>,
}

impl ResolutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes `key`, runs `resolve`, and pops `key` again on every exit path.
    pub fn push_and_run<T>(
        &mut self,
        key: BindingKey,
        resolve: impl FnOnce(&mut ResolutionContext) -> Result<T>,
    ) -> Result<T> {
        let mut scope = PathScope::enter(self, key);
        resolve(&mut *scope)
    }

    /// Key of the binding that requested the current resolution.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyResolutionPath`] when the current resolution is top-level
    /// (or nothing is being resolved at all).
    pub fn requesting_binding(&self) -> Result<&BindingKey> {
        self.path
            .len()
            .checked_sub(2)
            .and_then(|index| self.path.get(index))
            .ok_or(Error::EmptyResolutionPath)
    }

    /// Key of the binding currently being resolved.
    pub fn current(&self) -> Option<&BindingKey> {
        self.path.last()
    }

    /// Whether any binding of type `T`, under any name, is on the path.
    pub fn contains_type<T: ?Sized + 'static>(&self) -> bool {
        self.contains_type_id(TypeId::of::<T>())
    }

    pub fn contains_type_id(&self, request_type: TypeId) -> bool {
        self.path
            .iter()
            .any(|key| key.request_type() == request_type)
    }

    pub fn contains_key(&self, key: &BindingKey) -> bool {
        self.path.contains(key)
    }

    /// The full path, outermost binding first.
    pub fn path(&self) -> &[BindingKey] {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// Holds one pushed key for as long as it lives.
struct PathScope<'a> {
    context: &'a mut ResolutionContext,
}

impl<'a> PathScope<'a> {
    fn enter(context: &'a mut ResolutionContext, key: BindingKey) -> Self {
        context.path.push(key);
        Self { context }
    }
}

impl Deref for PathScope<'_> {
    type Target = ResolutionContext;

    fn deref(&self) -> &Self::Target {
        self.context
    }
}

impl DerefMut for PathScope<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.context
    }
}

impl Drop for PathScope<'_> {
    fn drop(&mut self) {
        self.context.path.pop();
    }
}
