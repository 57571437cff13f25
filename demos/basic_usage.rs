//! Basic usage example for serum-registry.
//!
//! Demonstrates:
//! - Binding constants, named constants and functions
//! - Self-constructing types through `Default` and the `Construct` hook
//! - Lazy singletons shared through `Rc<T>`
//! - Checking registration status with `has_binding()`
//! - Inspecting the requesting binding from inside a nested resolution
//!
//! Run with: `cargo run --example basic_usage`

use serum_registry::{Construct, Container, ResolutionContext, Result};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
struct AppConfig {
    name: String,
    version: u32,
    debug_mode: bool,
}

#[derive(Debug, Default)]
struct Metrics {
    started: bool,
}

#[derive(Debug)]
struct Logger {
    prefix: String,
}

#[derive(Debug)]
struct Server {
    config: AppConfig,
    metrics: Rc<Metrics>,
    logger: Logger,
}

impl Construct for Server {
    fn construct(container: &Container, context: &mut ResolutionContext) -> Result<Self> {
        Ok(Server {
            config: container.get_with(context)?,
            metrics: container.get_with(context)?,
            logger: container.get_with(context)?,
        })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("serum_registry=debug")
        .init();

    println!("=== serum-registry: Basic Usage ===\n");

    let mut container = Container::new();

    // -------------------------------------------------------------------------
    // 1. Bind constants
    // -------------------------------------------------------------------------
    println!("1. Binding constants...");

    container
        .bind_constant(AppConfig {
            name: "MyApp".to_string(),
            version: 1,
            debug_mode: true,
        })?
        .bind_named_constant("greeting", "Hello, serum-registry!".to_string())?;

    println!("   Bound: AppConfig, String(\"greeting\")");

    // -------------------------------------------------------------------------
    // 2. Bind a function that knows who asked for it
    // -------------------------------------------------------------------------
    println!("\n2. Binding a function...");

    container.bind_function(|_, context| {
        let prefix = match context.requesting_binding() {
            Ok(key) => format!("[{}]", key.type_name()),
            Err(_) => "[root]".to_string(),
        };
        Ok(Logger { prefix })
    })?;

    println!("   Bound: Logger");

    // -------------------------------------------------------------------------
    // 3. Bind a singleton and a self-constructing type
    // -------------------------------------------------------------------------
    println!("\n3. Binding a singleton and a constructor...");

    container
        .bind_singleton_shared::<Metrics>()?
        .bind_constructor::<Server>()?;

    println!("   Bound: Rc<Metrics> (singleton), Server (construct hook)");

    // -------------------------------------------------------------------------
    // 4. Check registration status with has_binding()
    // -------------------------------------------------------------------------
    println!("\n4. Checking registration status with has_binding()...");

    println!("   has_binding::<AppConfig>()    = {}", container.has_binding::<AppConfig>());
    println!("   has_binding::<Rc<Metrics>>()  = {}", container.has_binding::<Rc<Metrics>>());
    println!("   has_binding::<String>()       = {}", container.has_binding::<String>()); // Only named
    println!("   count()                       = {}", container.count());

    // -------------------------------------------------------------------------
    // 5. Resolve values
    // -------------------------------------------------------------------------
    println!("\n5. Resolving values...");

    let greeting: String = container.get_named("greeting")?;
    let logger: Logger = container.get()?;
    let server: Server = container.get()?;

    println!("   String:         {}", greeting);
    println!("   Logger:         {}", logger.prefix);
    println!("   Server.config:  {:?}", server.config);
    println!("   Server.logger:  {}", server.logger.prefix);
    println!("   Server.metrics: started = {}", server.metrics.started);

    let metrics = container.get_shared::<Metrics>()?;
    println!(
        "   Same Metrics instance as the server's: {}",
        Rc::ptr_eq(&metrics, &server.metrics)
    );

    // -------------------------------------------------------------------------
    // 6. Handle missing and duplicate bindings gracefully
    // -------------------------------------------------------------------------
    println!("\n6. Handling errors...");

    match container.get::<Vec<u8>>() {
        Ok(value) => println!("   Found Vec<u8>: {:?}", value),
        Err(e) => println!("   Error (expected): {}", e),
    }

    if let Err(e) = container.bind_named_constant("greeting", "Hi again".to_string()) {
        println!("   Error (expected): {}", e);
    }
    if let Err(e) = container.bind_shared::<Metrics>() {
        println!("   Error (expected): {}", e);
    }

    // -------------------------------------------------------------------------
    // Summary
    // -------------------------------------------------------------------------
    println!("\n=== Example Complete ===");
    println!("The container now holds {} bindings.", container.count());

    Ok(())
}
