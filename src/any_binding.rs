//! Type-erased storage for binding strategies.
//!
//! [`AnyBinding`] lets strategies for unrelated value types live in one map.
//! The variant records the strategy kind; the payload is the concrete strategy
//! behind `dyn Any`. Recovering a strategy checks the kind first and then the
//! concrete type, so asking for the wrong one is an error and never a
//! reinterpretation.

use std::any::{type_name, Any};
use std::fmt;

use crate::strategy::{
    ConstantBinding, ConstructorBinding, FunctionBinding, ResolverBinding, SingletonBinding,
};
use crate::{BindingKind, Error, Result};

/// A binding strategy of any kind and any value type.
#[derive(Default)]
pub enum AnyBinding {
    /// No binding.
    #[default]
    Unknown,
    Constant(Box<dyn Any>),
    Function(Box<dyn Any>),
    Resolver(Box<dyn Any>),
    Construct(Box<dyn Any>),
    Singleton(Box<dyn Any>),
}

impl AnyBinding {
    pub fn kind(&self) -> BindingKind {
        match self {
            AnyBinding::Unknown => BindingKind::Unknown,
            AnyBinding::Constant(_) => BindingKind::Constant,
            AnyBinding::Function(_) => BindingKind::Function,
            AnyBinding::Resolver(_) => BindingKind::Resolver,
            AnyBinding::Construct(_) => BindingKind::Construct,
            AnyBinding::Singleton(_) => BindingKind::Singleton,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, AnyBinding::Unknown)
    }

    pub fn as_constant<T: 'static>(&self) -> Result<&ConstantBinding<T>> {
        self.recover::<T, _>(BindingKind::Constant)
    }

    pub fn as_function<T: 'static>(&self) -> Result<&FunctionBinding<T>> {
        self.recover::<T, _>(BindingKind::Function)
    }

    pub fn as_resolver<T: 'static>(&self) -> Result<&ResolverBinding<T>> {
        self.recover::<T, _>(BindingKind::Resolver)
    }

    pub fn as_constructor<T: 'static>(&self) -> Result<&ConstructorBinding<T>> {
        self.recover::<T, _>(BindingKind::Construct)
    }

    pub fn as_singleton<T: 'static>(&self) -> Result<&SingletonBinding<T>> {
        self.recover::<T, _>(BindingKind::Singleton)
    }

    fn payload(&self) -> Option<&dyn Any> {
        match self {
            AnyBinding::Unknown => None,
            AnyBinding::Constant(payload)
            | AnyBinding::Function(payload)
            | AnyBinding::Resolver(payload)
            | AnyBinding::Construct(payload)
            | AnyBinding::Singleton(payload) => Some(payload.as_ref()),
        }
    }

    fn recover<T: 'static, B: 'static>(&self, expected: BindingKind) -> Result<&B> {
        let actual = self.kind();
        if actual != expected {
            return Err(Error::BindingKindMismatch { expected, actual });
        }

        self.payload()
            .and_then(|payload| payload.downcast_ref::<B>())
            .ok_or(Error::BindingPayloadMismatch {
                kind: expected,
                expected_type: type_name::<T>(),
            })
    }
}

impl<T: 'static> From<ConstantBinding<T>> for AnyBinding {
    fn from(binding: ConstantBinding<T>) -> Self {
        AnyBinding::Constant(Box::new(binding))
    }
}

impl<T: 'static> From<FunctionBinding<T>> for AnyBinding {
    fn from(binding: FunctionBinding<T>) -> Self {
        AnyBinding::Function(Box::new(binding))
    }
}

impl<T: 'static> From<ResolverBinding<T>> for AnyBinding {
    fn from(binding: ResolverBinding<T>) -> Self {
        AnyBinding::Resolver(Box::new(binding))
    }
}

impl<T: 'static> From<ConstructorBinding<T>> for AnyBinding {
    fn from(binding: ConstructorBinding<T>) -> Self {
        AnyBinding::Construct(Box::new(binding))
    }
}

impl<T: 'static> From<SingletonBinding<T>> for AnyBinding {
    fn from(binding: SingletonBinding<T>) -> Self {
        AnyBinding::Singleton(Box::new(binding))
    }
}

impl fmt::Debug for AnyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnyBinding").field(&self.kind()).finish()
    }
}
