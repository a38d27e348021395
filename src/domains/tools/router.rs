//! Tool Router - builds the rmcp ToolRouter from the tool table.
//!
//! Every entry of [`ToolRegistry::entries`] becomes one dynamic route, so
//! the STDIO/TCP router and the HTTP dispatch always serve the same tools.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter};

use super::registry::{ToolEntry, ToolRegistry};
use crate::core::config::Config;

fn route<S>(entry: ToolEntry, config: Arc<Config>) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    let handler = entry.handler;
    ToolRoute::new_dyn(entry.tool, move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let config = config.clone();
        async move { handler(args, &config) }.boxed()
    })
}

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRegistry::entries()
        .into_iter()
        .fold(ToolRouter::new(), |router, entry| {
            router.with_route(route(entry, config.clone()))
        })
}
