//! Node entry point: per-item dispatch.

use serde_json::{json, Value};

use stripe_node_core::{NodeError, Operation, Resource, Result};

use crate::context::{ItemContext, ParameterSource, RequestTransport};
use crate::handlers;
use crate::options::OptionLoader;

/// Execution settings chosen by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeSettings {
    /// Record per-item failures as `{"error": message}` instead of aborting.
    pub continue_on_fail: bool,
}

/// The Stripe node.
///
/// Items are processed strictly in order; item `i + 1` starts only once every
/// request for item `i` has completed.
#[derive(Debug, Clone)]
pub struct StripeNode<T> {
    transport: T,
    settings: NodeSettings,
}

impl<T: RequestTransport> StripeNode<T> {
    /// Create a node with default settings.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self::with_settings(transport, NodeSettings::default())
    }

    /// Create a node with explicit settings.
    #[must_use]
    pub fn with_settings(transport: T, settings: NodeSettings) -> Self {
        Self {
            transport,
            settings,
        }
    }

    /// Settings in effect.
    #[must_use]
    pub fn settings(&self) -> NodeSettings {
        self.settings
    }

    /// Transport used for every request.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Option providers for the editor, using the given credential.
    #[must_use]
    pub fn options<'a>(&'a self, credential: Option<&'a str>) -> OptionLoader<'a> {
        OptionLoader::new(&self.transport, credential)
    }

    /// Run the node over `items`.
    ///
    /// `resource` and `operation` are read once, from item 0. The result has
    /// a single output branch.
    ///
    /// # Errors
    ///
    /// Without `continue_on_fail`, the first failing item aborts the run and
    /// its error is returned; no later item is processed.
    pub async fn execute(
        &self,
        items: &[Value],
        params: &dyn ParameterSource,
    ) -> Result<Vec<Vec<Value>>> {
        let mut output = Vec::with_capacity(items.len());
        if items.is_empty() {
            return Ok(vec![output]);
        }

        let (resource, operation) = match resolve_selection(params) {
            Ok(selection) => selection,
            Err(err) if self.settings.continue_on_fail => {
                tracing::warn!(error = %err, "Invalid node selection, recording error for every item");
                let message = err.to_string();
                output.extend(items.iter().map(|_| json!({ "error": message })));
                return Ok(vec![output]);
            }
            Err(err) => return Err(err),
        };

        tracing::info!(
            resource = %resource,
            operation = %operation,
            items = items.len(),
            "Executing Stripe node"
        );

        for item in 0..items.len() {
            match self.execute_item(params, item, resource, operation).await {
                Ok(result) => result.append_to(&mut output),
                Err(err) if self.settings.continue_on_fail => {
                    tracing::warn!(item, error = %err, "Item failed, continuing");
                    output.push(json!({ "error": err.to_string() }));
                }
                Err(err) => {
                    tracing::error!(item, error = %err, "Item failed, aborting execution");
                    return Err(err);
                }
            }
        }

        tracing::info!(results = output.len(), "Stripe node finished");
        Ok(vec![output])
    }

    async fn execute_item(
        &self,
        params: &dyn ParameterSource,
        item: usize,
        resource: Resource,
        operation: Operation,
    ) -> Result<handlers::HandlerOutput> {
        let ctx = ItemContext::new(params, &self.transport, item)?;
        handlers::execute(&ctx, resource, operation).await
    }
}

/// Read `resource` and `operation` from item 0.
fn resolve_selection(params: &dyn ParameterSource) -> Result<(Resource, Operation)> {
    let resource = selection_value(params, "resource")?.parse::<Resource>()?;
    let operation = selection_value(params, "operation")?.parse::<Operation>()?;
    if !resource.supports(operation) {
        return Err(NodeError::UnsupportedOperation {
            resource,
            operation,
        });
    }
    Ok((resource, operation))
}

fn selection_value(params: &dyn ParameterSource, name: &str) -> Result<String> {
    match params.parameter(name, 0) {
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(NodeError::InvalidParameter {
            name: name.to_string(),
            item: 0,
            expected: "a string",
        }),
        None => Err(NodeError::MissingParameter {
            name: name.to_string(),
            item: 0,
        }),
    }
}
