//! Demand dispatch: run the supplier registered for a request's type on its
//! own task and deliver exactly one outcome.

use crate::request::DemandRequest;
use crate::scope::Scope;
use crate::supplier::{Supplier, Suppliers};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::task::JoinHandle;
use tracing::{Instrument, debug, debug_span, warn};

/// The pending outcome of one dispatched demand.
///
/// Resolves to `Some(value)` with whatever the supplier produced, or `None`
/// when no supplier is registered for the requested type. A supplier that
/// produced nothing yields `Some(Value::Null)`.
///
/// Dropping a `Demand` before it completes aborts its task, and with it
/// every nested demand the task still owns. A supplier panic is re-raised
/// in the task awaiting the demand.
///
/// # Panics
///
/// Polling a `Demand` again after it has yielded its outcome panics, as the
/// outcome has already been handed out.
#[must_use = "a dropped Demand cancels its resolution"]
#[derive(Debug)]
pub struct Demand {
    handle: Option<JoinHandle<Option<Value>>>,
}

impl Demand {
    /// Whether the resolution has finished (its value may still be unread).
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }
}

impl Future for Demand {
    type Output = Option<Value>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let handle = self
            .handle
            .as_mut()
            .expect("Demand polled after completion");
        let outcome = match Pin::new(handle).poll(cx) {
            Poll::Pending => return Poll::Pending,
            Poll::Ready(outcome) => outcome,
        };
        self.handle = None;
        match outcome {
            Ok(value) => Poll::Ready(value),
            Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            Err(err) => {
                debug!(error = %err, "demand task cancelled");
                Poll::Ready(None)
            }
        }
    }
}

impl Drop for Demand {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Dispatch `request` on a new task.
///
/// Must be called within a tokio runtime.
pub fn resolve(request: DemandRequest) -> Demand {
    let span = debug_span!("demand", path = %request.path);
    let handle = tokio::spawn(run(request).instrument(span));
    Demand {
        handle: Some(handle),
    }
}

async fn run(request: DemandRequest) -> Option<Value> {
    debug!(
        key = %request.key,
        type_name = %request.type_name,
        path = %request.path,
        "dispatching demand"
    );

    let Some(supplier) = request.suppliers.get(&request.type_name).cloned() else {
        warn!(
            type_name = %request.type_name,
            path = %request.path,
            "supplier not found"
        );
        return None;
    };

    let DemandRequest {
        key,
        type_name,
        path,
        data,
        suppliers,
    } = request;
    let scope = Scope::new(key, type_name, path, suppliers);
    Some(supplier.call(data, scope).await)
}

/// Resolve `root` with `suppliers` visible, starting from the root frame.
///
/// The root supplier is registered under [`crate::ROOT_TYPE`] in the owned
/// `suppliers`; this is the only externally reachable entry point.
pub fn supply_demand(root: Supplier, suppliers: Suppliers) -> Demand {
    resolve(DemandRequest::root(root, suppliers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::ScopedDemandRequest;
    use serde_json::json;

    #[tokio::test]
    async fn missing_type_resolves_to_none() {
        let request = DemandRequest {
            key: "k".to_string(),
            type_name: "absent".to_string(),
            path: crate::DemandPath::new("k"),
            data: Value::Null,
            suppliers: Suppliers::new(),
        };
        assert_eq!(resolve(request).await, None);
    }

    #[tokio::test]
    async fn supplier_receives_request_data() {
        let echo = Supplier::new(|data, _scope| async move { data });
        let suppliers = Suppliers::new().with("echo", echo).unwrap();
        let root = Supplier::new(|_, scope: Scope| async move {
            scope
                .demand(ScopedDemandRequest::new("echo").data(json!([1, 2])))
                .await
                .unwrap_or(Value::Null)
        });
        assert_eq!(supply_demand(root, suppliers).await, Some(json!([1, 2])));
    }

    #[tokio::test]
    async fn null_result_is_distinct_from_missing_supplier() {
        let root = Supplier::constant(Value::Null);
        let outcome = supply_demand(root, Suppliers::new()).await;
        assert_eq!(outcome, Some(Value::Null));
    }

    #[tokio::test]
    async fn is_finished_after_completion() {
        let mut demand = supply_demand(Supplier::constant(1), Suppliers::new());
        let value = (&mut demand).await;
        assert_eq!(value, Some(json!(1)));
        assert!(demand.is_finished());
    }

    #[tokio::test]
    #[should_panic(expected = "Demand polled after completion")]
    async fn polling_a_completed_demand_panics() {
        let mut demand = supply_demand(Supplier::constant(1), Suppliers::new());
        let _ = (&mut demand).await;
        let _ = (&mut demand).await;
    }
}
