//! Three-level demo: the root adds `third` for its own subtree, `third`
//! demands `first` from the inherited suppliers.

use crate::cli::RunArgs;
use crate::support::{self, Observer};
use serde_json::{Value, json};
use std::time::Duration;
use supply_demand_kernel::{
    Scope, ScopedDemandRequest, Supplier, Suppliers, SuppliersMerge, SupplyError, supply_demand,
};

fn leaf(observer: &Observer, name: &'static str, delay: Duration, value: Value) -> Supplier {
    let observer = observer.clone();
    Supplier::new(move |_, scope: Scope| {
        let observer = observer.clone();
        let value = value.clone();
        async move {
            let message = format!("{name} supplier function called.");
            observer.enter(&scope, &message);
            tokio::time::sleep(delay).await;
            value
        }
    })
}

fn third_supplier(observer: &Observer) -> Supplier {
    let observer = observer.clone();
    Supplier::new(move |_, scope: Scope| {
        let observer = observer.clone();
        async move {
            observer.enter(&scope, "Third supplier function called.");
            scope
                .demand(ScopedDemandRequest::new("first"))
                .await
                .unwrap_or(Value::Null)
        }
    })
}

fn root_supplier(observer: &Observer) -> Result<Supplier, SupplyError> {
    let added = Suppliers::new().with("third", third_supplier(observer))?;
    let observer = observer.clone();
    Ok(Supplier::new(move |_, scope: Scope| {
        let observer = observer.clone();
        let merge = SuppliersMerge::new().adding(added.clone());
        async move {
            observer.enter(&scope, "Root supplier function called.");
            let result = scope
                .demand(ScopedDemandRequest::new("third").merge(merge))
                .await
                .unwrap_or(Value::Null);
            if let Value::String(s) = &result {
                observer.say(format!("Root supplier received result: {s}"));
            }
            result
        }
    }))
}

pub async fn resolve(delay: Duration, observer: &Observer) -> Result<Option<Value>, SupplyError> {
    let first = leaf(observer, "First", delay, json!("First result"));
    let second = leaf(observer, "Second", delay, json!(2));
    let suppliers = Suppliers::new()
        .with("first", first)?
        .with("second", second)?;
    Ok(supply_demand(root_supplier(observer)?, suppliers).await)
}

pub fn run(args: RunArgs) {
    let config = support::config_or_exit(&args);
    support::init_tracing(config.log.as_deref());

    let observer = Observer::new(!args.json);
    let outcome = support::block_on(resolve(config.delay(), &observer))
        .unwrap_or_else(|e| support::exit_with(e));
    support::report("demo", &outcome, &observer, args.json);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn demo_resolves_first_through_scoped_third() {
        let observer = Observer::new(false);
        let outcome = resolve(Duration::ZERO, &observer).await.unwrap();
        assert_eq!(outcome, Some(json!("First result")));

        let visited = observer.visited();
        let paths: Vec<String> = visited.iter().map(ToString::to_string).collect();
        assert_eq!(paths.len(), 3);
        assert_eq!(paths[0], "root");
        assert_eq!(paths[1], "root/root(third)");
        assert_eq!(paths[2], "root/root(third)/root(first)");
    }
}
