//! Integration tests for resolution-path bookkeeping.
//!
//! Strategy bodies receive the live [`ResolutionContext`] and may inspect it;
//! these tests check what they see and that the path always unwinds.

use serum_registry::{
    BindingKey, Container, ContainerConfig, CyclePolicy, Error, ResolutionContext, Result,
};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
struct Logger {
    owner: String,
}

#[derive(Debug)]
struct Repository {
    logger: Logger,
}

#[derive(Debug)]
struct Controller {
    logger: Logger,
}

/// Container where `Logger` names whoever asked for it.
fn logger_container() -> Result<Container> {
    let mut container = Container::new();
    container
        .bind_function(|_, context| {
            let owner = match context.requesting_binding() {
                Ok(key) => key.type_name().rsplit("::").next().unwrap_or("").to_string(),
                Err(Error::EmptyResolutionPath) => "root".to_string(),
                Err(err) => return Err(err),
            };
            Ok(Logger { owner })
        })?
        .bind_function(|container, context| {
            Ok(Repository {
                logger: container.get_with(context)?,
            })
        })?
        .bind_function(|container, context| {
            Ok(Controller {
                logger: container.get_with(context)?,
            })
        })?;
    Ok(container)
}

#[test]
fn test_requesting_binding_is_the_parent() -> Result<()> {
    let container = logger_container()?;

    assert_eq!(container.get::<Repository>()?.logger.owner, "Repository");
    assert_eq!(container.get::<Controller>()?.logger.owner, "Controller");

    Ok(())
}

#[test]
fn test_top_level_get_has_no_requester() -> Result<()> {
    let container = logger_container()?;

    assert_eq!(container.get::<Logger>()?.owner, "root");
    Ok(())
}

#[test]
fn test_top_level_singleton_has_no_requester() -> Result<()> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);

    let mut container = Container::new();
    container.bind_singleton_function(move |_, context: &mut ResolutionContext| {
        sink.borrow_mut().extend(context.path().iter().cloned());
        assert!(matches!(
            context.requesting_binding(),
            Err(Error::EmptyResolutionPath)
        ));
        Ok(Rc::new(1u8))
    })?;

    let _: Rc<u8> = container.get()?;

    assert_eq!(*seen.borrow(), vec![BindingKey::unnamed::<Rc<u8>>()]);
    Ok(())
}

#[test]
fn test_nested_singleton_sees_parent_as_requester() -> Result<()> {
    let seen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);

    let mut container = Container::new();
    container
        .bind_singleton_function(move |_, context: &mut ResolutionContext| {
            *sink.borrow_mut() = Some(context.requesting_binding()?.clone());
            Ok(Rc::new(1u8))
        })?
        .bind_function(|container, context| {
            let shared: Rc<u8> = container.get_with(context)?;
            Ok(u16::from(*shared))
        })?;

    assert_eq!(container.get::<u16>()?, 1);
    assert_eq!(*seen.borrow(), Some(BindingKey::unnamed::<u16>()));
    Ok(())
}

#[test]
fn test_singleton_logger_names_its_owner() -> Result<()> {
    let mut container = Container::new();
    container
        .bind_singleton_function(|_, context| {
            let owner = context
                .requesting_binding()?
                .type_name()
                .rsplit("::")
                .next()
                .unwrap_or("")
                .to_string();
            Ok(Logger { owner })
        })?
        .bind_function(|container, context| {
            Ok(Repository {
                logger: container.get_with(context)?,
            })
        })?;

    assert_eq!(container.get::<Repository>()?.logger.owner, "Repository");
    Ok(())
}

#[test]
fn test_path_seen_inside_nested_strategy() -> Result<()> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);

    let mut container = Container::new();
    container
        .bind_named_function("leaf", move |_, context: &mut ResolutionContext| {
            sink.borrow_mut().extend(context.path().iter().cloned());
            Ok(1u8)
        })?
        .bind_function(|container, context| {
            let leaf: u8 = container.get_named_with(context, "leaf")?;
            Ok(u16::from(leaf))
        })?;

    let mut context = ResolutionContext::new();
    assert_eq!(container.get_with::<u16>(&mut context)?, 1);

    assert_eq!(
        *seen.borrow(),
        vec![BindingKey::unnamed::<u16>(), BindingKey::of::<u8>("leaf")]
    );
    assert!(context.is_empty());

    Ok(())
}

#[test]
fn test_path_is_empty_after_failure() {
    let mut container = Container::new();
    container
        .bind_function(|container, context| {
            let missing: String = container.get_named_with(context, "missing")?;
            Ok(missing.len())
        })
        .unwrap();

    let mut context = ResolutionContext::new();
    let err = container.get_with::<usize>(&mut context).unwrap_err();

    assert!(matches!(err, Error::BindingNotFound { .. }));
    assert!(context.is_empty());
    assert_eq!(context.depth(), 0);
}

#[test]
fn test_strategy_can_guard_against_cycles() -> Result<()> {
    let mut container = Container::new();
    container.bind_function(|container, context| {
        if context.depth() > 1 && context.contains_type::<u32>() {
            return Ok(0u32);
        }
        Ok(container.get_with::<u32>(context)? + 1)
    })?;

    assert_eq!(container.get::<u32>()?, 1);
    Ok(())
}

#[test]
fn test_reject_policy_reports_cycle() {
    let config = ContainerConfig::new().cycle_policy(CyclePolicy::Reject);
    let mut container = Container::with_config(config);
    container
        .bind_function(|container, context| container.get_with::<u32>(context))
        .unwrap();

    let err = container.get::<u32>().unwrap_err();

    match err {
        Error::CircularDependency { key, path } => {
            assert_eq!(key, BindingKey::unnamed::<u32>());
            assert_eq!(path, vec![BindingKey::unnamed::<u32>()]);
        }
        other => panic!("expected circular dependency, got {other}"),
    }
}

#[test]
fn test_requesting_binding_outside_resolution() {
    let context = ResolutionContext::new();

    assert!(matches!(
        context.requesting_binding(),
        Err(Error::EmptyResolutionPath)
    ));
    assert_eq!(context.current(), None);
}
