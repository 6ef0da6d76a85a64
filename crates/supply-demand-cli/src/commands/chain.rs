//! Chained demo: `first` demands `second` and joins the two as `1&2`.
//!
//! When `second` has no supplier the join renders it as `<missing>`
//! (`1&<missing>`), the same word `--json` uses for the outcome kind.

use crate::cli::RunArgs;
use crate::support::{self, Observer};
use serde_json::{Value, json};
use std::time::Duration;
use supply_demand_kernel::{
    Scope, ScopedDemandRequest, Supplier, Suppliers, SupplyError, supply_demand,
};

fn first_supplier(observer: &Observer) -> Supplier {
    let observer = observer.clone();
    Supplier::new(move |_, scope: Scope| {
        let observer = observer.clone();
        async move {
            observer.enter(&scope, "First supplier function called.");
            let second = scope.demand(ScopedDemandRequest::new("second")).await;
            json!(join(second))
        }
    })
}

fn join(second: Option<Value>) -> String {
    match second {
        Some(Value::String(s)) => format!("1&{s}"),
        Some(other) => format!("1&{other}"),
        None => "1&<missing>".to_string(),
    }
}

fn second_supplier(observer: &Observer, delay: Duration) -> Supplier {
    let observer = observer.clone();
    Supplier::new(move |_, scope: Scope| {
        let observer = observer.clone();
        async move {
            observer.enter(&scope, "Second supplier function called.");
            tokio::time::sleep(delay).await;
            json!("2")
        }
    })
}

fn root_supplier(observer: &Observer) -> Supplier {
    let observer = observer.clone();
    Supplier::new(move |_, scope: Scope| {
        let observer = observer.clone();
        async move {
            observer.enter(&scope, "Root supplier function called.");
            scope
                .demand(ScopedDemandRequest::new("first"))
                .await
                .unwrap_or(Value::Null)
        }
    })
}

pub async fn resolve(delay: Duration, observer: &Observer) -> Result<Option<Value>, SupplyError> {
    let suppliers = Suppliers::new()
        .with("first", first_supplier(observer))?
        .with("second", second_supplier(observer, delay))?;
    Ok(supply_demand(root_supplier(observer), suppliers).await)
}

pub fn run(args: RunArgs) {
    let config = support::config_or_exit(&args);
    support::init_tracing(config.log.as_deref());

    let observer = Observer::new(!args.json);
    let outcome = support::block_on(resolve(config.delay(), &observer))
        .unwrap_or_else(|e| support::exit_with(e));
    support::report("chain", &outcome, &observer, args.json);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn chain_joins_first_and_second() {
        let observer = Observer::new(false);
        let outcome = resolve(Duration::ZERO, &observer).await.unwrap();
        assert_eq!(outcome, Some(json!("1&2")));
        assert_eq!(observer.visited().len(), 3);
    }

    #[test]
    fn join_renders_each_second_outcome() {
        assert_eq!(join(Some(json!("2"))), "1&2");
        assert_eq!(join(Some(json!(2))), "1&2");
        assert_eq!(join(Some(Value::Null)), "1&null");
        assert_eq!(join(None), "1&<missing>");
    }
}
