//! Missing-supplier demo: the nested demand completes with no value and the
//! root reports that instead of failing.

use crate::cli::RunArgs;
use crate::support::{self, Observer};
use serde_json::{Value, json};
use supply_demand_kernel::{
    Scope, ScopedDemandRequest, Supplier, Suppliers, SupplyError, supply_demand,
};

pub const MISSING_TYPE: &str = "does-not-exist";

fn root_supplier(observer: &Observer) -> Supplier {
    let observer = observer.clone();
    Supplier::new(move |_, scope: Scope| {
        let observer = observer.clone();
        async move {
            observer.enter(&scope, "Root supplier function called.");
            let outcome = scope.demand(ScopedDemandRequest::new(MISSING_TYPE)).await;
            let found = outcome.is_some();
            observer.say(format!(
                "Nested demand for `{MISSING_TYPE}`: {}",
                if found { "found" } else { "not found" }
            ));
            json!({ "type": MISSING_TYPE, "found": found })
        }
    })
}

pub async fn resolve(observer: &Observer) -> Result<Option<Value>, SupplyError> {
    let suppliers = Suppliers::new().with("first", Supplier::constant("first"))?;
    Ok(supply_demand(root_supplier(observer), suppliers).await)
}

pub fn run(args: RunArgs) {
    let config = support::config_or_exit(&args);
    support::init_tracing(config.log.as_deref());

    let observer = Observer::new(!args.json);
    let outcome = support::block_on(resolve(&observer))
        .unwrap_or_else(|e| support::exit_with(e));
    support::report("missing", &outcome, &observer, args.json);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn root_completes_when_nested_supplier_is_missing() {
        let observer = Observer::new(false);
        let outcome = resolve(&observer).await.unwrap();
        assert_eq!(
            outcome,
            Some(json!({ "type": "does-not-exist", "found": false }))
        );
    }
}
