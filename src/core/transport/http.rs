//! Stateless JSON-RPC 2.0 over POST.
//!
//! Each request is answered on its own, with no session and no server
//! notifications. `GET /` lists the tool table and `GET /health` reports
//! liveness with a timestamp.

use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};
use rmcp::ErrorData as McpError;
use rmcp::model::{
    ListPromptsResult, ListResourceTemplatesResult, ListResourcesResult, ListToolsResult,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;

const PROTOCOL_VERSION: &str = "2024-11-05";

const INVALID_REQUEST: i32 = -32600;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;
const INTERNAL_ERROR: i32 = -32603;

/// A single JSON-RPC 2.0 call. Batches are not accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl JsonRpcError {
    fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(INVALID_PARAMS, message)
    }
}

impl From<McpError> for JsonRpcError {
    fn from(err: McpError) -> Self {
        Self::new(err.code.0, err.message)
    }
}

impl JsonRpcResponse {
    fn from_result(id: Option<Value>, outcome: Result<Value, JsonRpcError>) -> Self {
        let (result, error) = match outcome {
            Ok(value) => (Some(value), None),
            Err(e) => (None, Some(e)),
        };
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result,
            error,
        }
    }
}

#[derive(Clone)]
struct AppState {
    server: McpServer,
    rpc_path: String,
}

/// Serve HTTP until the process stops.
pub async fn run(config: HttpConfig, server: McpServer) -> TransportResult<()> {
    let addr = config.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| TransportError::bind(&addr, e))?;

    if config.enable_cors {
        info!("CORS open to any origin");
    }

    axum::serve(listener, router(&config, server))
        .await
        .map_err(|e| TransportError::http(e.to_string()))
}

fn router(config: &HttpConfig, server: McpServer) -> Router {
    let state = AppState {
        server,
        rpc_path: config.rpc_path.clone(),
    };

    let app = Router::new()
        .route(&config.rpc_path, post(handle_rpc))
        .route("/health", get(health_check))
        .route("/", get(index))
        .with_state(state);

    if config.enable_cors {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        app
    }
}

async fn index(State(state): State<AppState>) -> impl IntoResponse {
    Json(service_summary(&state))
}

/// What `GET /` reports: identity, where to post, and the tool table.
fn service_summary(state: &AppState) -> Value {
    let tools: Vec<String> = state
        .server
        .tools()
        .into_iter()
        .map(|t| t.name.to_string())
        .collect();

    serde_json::json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "rpc": state.rpc_path,
        "health": "/health",
        "tools": tools
    })
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> impl IntoResponse {
    tracing::Span::current().record("method", &request.method);
    Json(process_request(&state.server, request).await)
}

/// Route one call to the server. Notifications get a `null` result.
async fn process_request(server: &McpServer, request: JsonRpcRequest) -> JsonRpcResponse {
    if request.jsonrpc != "2.0" {
        return JsonRpcResponse::from_result(
            request.id,
            Err(JsonRpcError::new(INVALID_REQUEST, "Invalid Request")),
        );
    }

    info!("JSON-RPC request: {}", request.method);
    let params = request.params.unwrap_or(Value::Null);

    let outcome = match request.method.as_str() {
        "initialize" => Ok(initialize_result(server)),
        "tools/list" => to_json(ListToolsResult {
            tools: server.tools(),
            next_cursor: None,
            meta: None,
        }),
        "tools/call" => call_tool(server, &params),
        "resources/list" => to_json(ListResourcesResult {
            resources: server.resources().await,
            next_cursor: None,
            meta: None,
        }),
        "resources/templates/list" => to_json(ListResourceTemplatesResult {
            resource_templates: server.resource_templates().await,
            next_cursor: None,
            meta: None,
        }),
        "resources/read" => read_resource(server, &params).await,
        "prompts/list" => to_json(ListPromptsResult {
            prompts: server.prompts().await,
            next_cursor: None,
            meta: None,
        }),
        "prompts/get" => get_prompt(server, &params).await,
        method if method.starts_with("notifications/") => {
            info!("Notification: {}", method);
            Ok(Value::Null)
        }
        method => {
            warn!("Unknown method: {}", method);
            Err(JsonRpcError::new(METHOD_NOT_FOUND, "Method not found"))
        }
    };

    JsonRpcResponse::from_result(request.id, outcome)
}

fn initialize_result(server: &McpServer) -> Value {
    use rmcp::ServerHandler;

    serde_json::json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {},
            "resources": {},
            "prompts": {}
        },
        "serverInfo": {
            "name": server.name(),
            "version": server.version()
        },
        "instructions": server.get_info().instructions
    })
}

fn to_json<T: Serialize>(value: T) -> Result<Value, JsonRpcError> {
    serde_json::to_value(value).map_err(|e| JsonRpcError::new(INTERNAL_ERROR, e.to_string()))
}

fn required_str<'a>(params: &'a Value, key: &str) -> Result<&'a str, JsonRpcError> {
    params
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| JsonRpcError::invalid_params(format!("Missing '{}'", key)))
}

fn call_tool(server: &McpServer, params: &Value) -> Result<Value, JsonRpcError> {
    let name = required_str(params, "name")?;
    let arguments = params
        .get("arguments")
        .cloned()
        .unwrap_or_else(|| serde_json::json!({}));

    server
        .call_tool_json(name, arguments)
        .map_err(JsonRpcError::invalid_params)
}

async fn read_resource(server: &McpServer, params: &Value) -> Result<Value, JsonRpcError> {
    let uri = required_str(params, "uri")?;
    to_json(server.read(uri).await?)
}

async fn get_prompt(server: &McpServer, params: &Value) -> Result<Value, JsonRpcError> {
    let name = required_str(params, "name")?;
    let arguments = params.get("arguments").and_then(Value::as_object);
    to_json(server.prompt(name, arguments).await?)
}
