//! Guarded dispatch walkthrough.
//!
//! Run with `RUST_LOG=polyfn_dispatch=debug cargo run --example dispatch_demo`
//! to see registration and resolution logging.

use polyfn::prelude::*;
use polyfn::ActionSet;

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let registry = std::sync::Arc::new(Registry::new());
    let scope = Scope::new("demo");

    Overload::new()
        .arg(Pred::lt(0))
        .attach(&registry, &scope, "describe", |call| {
            Ok(Value::from(format!("{} is negative", call.args()[0])))
        });
    Overload::new()
        .arg(Pred::between(0, 10))
        .attach(&registry, &scope, "describe", |call| {
            Ok(Value::from(format!("{} is a small number", call.args()[0])))
        });
    Overload::new().attach(&registry, &scope, "describe", |call| {
        Ok(Value::from(format!("{} is large", call.args()[0])))
    });

    for n in [-5_i64, 0, 7, 99] {
        let described = registry
            .dispatch(&scope, "describe", &Call::new().arg(n))
            .expect("describe has a catch-all entry");
        println!("{}", described.as_str().unwrap_or_default());
    }

    // Drive the same dispatcher from a command table.
    let mut actions = ActionSet::new();
    let table_registry = std::sync::Arc::clone(&registry);
    let table_scope = scope.clone();
    actions.add("describe", "Describe a number", move |args| {
        let n: i64 = match args.first().and_then(|a| a.parse().ok()) {
            Some(n) => n,
            None => return "usage: describe <number>".to_string(),
        };
        match table_registry.dispatch(&table_scope, "describe", &Call::new().arg(n)) {
            Ok(value) => value.as_str().unwrap_or_default().to_string(),
            Err(err) => err.to_string(),
        }
    });

    for line in ["describe 42", "describe -1", "describe x"] {
        match actions.perform(line) {
            Ok(Some(output)) => println!("{line} -> {output}"),
            Ok(None) => {}
            Err(err) => println!("{line} -> {err}"),
        }
    }
}
