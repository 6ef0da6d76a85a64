use crate::cli::RunArgs;
use crate::config::DemoConfig;
use serde_json::{Value, json};
use std::fmt::Display;
use std::future::Future;
use std::process;
use std::sync::{Arc, Mutex, PoisonError};
use supply_demand_kernel::{DemandPath, Scope};
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "warn";

pub fn exit_with(err: impl Display) -> ! {
    eprintln!("error: {err}");
    process::exit(1);
}

pub fn config_or_exit(args: &RunArgs) -> DemoConfig {
    DemoConfig::resolve(args).unwrap_or_else(|e| exit_with(e))
}

/// Install the stderr log subscriber. `filter` wins over `RUST_LOG`.
pub fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directive) => EnvFilter::try_new(directive).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn block_on<F: Future>(future: F) -> F::Output {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap_or_else(|e| exit_with(format!("failed to create tokio runtime: {e}")));
    runtime.block_on(future)
}

/// Variant name of a resolution outcome; `missing` when no supplier ran.
pub fn value_kind(outcome: &Option<Value>) -> &'static str {
    match outcome {
        None => "missing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "bool",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

/// Shared by every demo supplier: prints progress lines (text mode only)
/// and records the path of each supplier invocation.
#[derive(Debug, Clone)]
pub struct Observer {
    announce: bool,
    visited: Arc<Mutex<Vec<DemandPath>>>,
}

impl Observer {
    pub fn new(announce: bool) -> Self {
        Self {
            announce,
            visited: Arc::default(),
        }
    }

    pub fn enter(&self, scope: &Scope, message: &str) {
        debug!(path = %scope.path(), type_name = scope.type_name(), "supplier entered");
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(scope.path().clone());
        self.say(message);
    }

    pub fn say(&self, message: impl Display) {
        if self.announce {
            println!("{message}");
        }
    }

    pub fn visited(&self) -> Vec<DemandPath> {
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

pub fn report(command: &str, outcome: &Option<Value>, observer: &Observer, json_output: bool) {
    if json_output {
        let payload = json!({
            "command": command,
            "result": outcome,
            "kind": value_kind(outcome),
            "paths": observer.visited(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload)
                .unwrap_or_else(|e| exit_with(format!("json serialization failed: {e}")))
        );
        return;
    }

    match outcome {
        Some(Value::String(s)) => println!("Final result: {s}"),
        Some(value) => println!("Final result: {value}"),
        None => println!("Final result: none (supplier not found)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_kind_distinguishes_missing_from_null() {
        assert_eq!(value_kind(&None), "missing");
        assert_eq!(value_kind(&Some(Value::Null)), "null");
        assert_eq!(value_kind(&Some(json!("x"))), "string");
        assert_eq!(value_kind(&Some(json!(2))), "number");
        assert_eq!(value_kind(&Some(json!({}))), "object");
    }

    #[test]
    fn observer_starts_with_no_visits() {
        let observer = Observer::new(false);
        assert!(observer.visited().is_empty());
    }
}
