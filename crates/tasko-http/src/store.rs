//! The HTTP implementation of `TodoStore`.

use crate::config::StoreConfig;
use crate::error::ConfigError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tasko_core::{Result, StoreError, TodoItem, TodoPatch, TodoStore};
use tracing::debug;

/// A stateless REST client for a remote to-do collection.
#[derive(Debug, Clone)]
pub struct HttpStore {
    http: Client,
    base_url: String,
}

impl HttpStore {
    /// Build a store client from the given configuration.
    ///
    /// # Errors
    /// Returns `ConfigError::Client` if the HTTP client cannot be built.
    pub fn new(config: &StoreConfig) -> std::result::Result<Self, ConfigError> {
        let http = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/todos/{id}", self.base_url)
    }
}

/// Request body for item creation.
#[derive(Debug, Serialize)]
struct CreateRequest<'a> {
    title: &'a str,
}

/// Error body shape used by the server for rejected requests.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

fn transport(err: reqwest::Error) -> StoreError {
    StoreError::Transport(err.to_string())
}

/// Map a non-2xx response onto the store error taxonomy.
async fn check(response: reqwest::Response, id: Option<&str>) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::NOT_FOUND => Err(StoreError::NotFound(
            id.unwrap_or("(unknown)").to_string(),
        )),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            let text = response.text().await.map_err(transport)?;
            let message =
                serde_json::from_str::<ErrorBody>(&text).map_or(text, |body| body.error);
            Err(StoreError::Validation(message))
        }
        _ => Err(StoreError::Transport(format!("unexpected status {status}"))),
    }
}

#[async_trait]
impl TodoStore for HttpStore {
    async fn list(&self) -> Result<Vec<TodoItem>> {
        let url = self.collection_url();
        debug!(%url, "fetching collection");

        let response = self.http.get(&url).send().await.map_err(transport)?;
        let response = check(response, None).await?;
        response.json().await.map_err(transport)
    }

    async fn create(&self, title: &str) -> Result<TodoItem> {
        let url = self.collection_url();
        debug!(%url, title, "creating item");

        let response = self
            .http
            .post(&url)
            .json(&CreateRequest { title })
            .send()
            .await
            .map_err(transport)?;
        let response = check(response, None).await?;
        response.json().await.map_err(transport)
    }

    async fn update(&self, id: &str, patch: &TodoPatch) -> Result<()> {
        let url = self.item_url(id);
        debug!(%url, "patching item");

        let response = self
            .http
            .patch(&url)
            .json(patch)
            .send()
            .await
            .map_err(transport)?;
        check(response, Some(id)).await?;
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<()> {
        let url = self.item_url(id);
        debug!(%url, "deleting item");

        let response = self.http.delete(&url).send().await.map_err(transport)?;
        check(response, Some(id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Path, State},
        response::IntoResponse,
        routing::{get, patch},
        Json, Router,
    };
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::net::TcpListener;

    #[derive(Clone, Default)]
    struct ServerState {
        items: Arc<Mutex<Vec<TodoItem>>>,
        next_id: Arc<AtomicU32>,
        patch_bodies: Arc<Mutex<Vec<Value>>>,
    }

    async fn list_todos(State(state): State<ServerState>) -> Json<Vec<TodoItem>> {
        Json(state.items.lock().unwrap().clone())
    }

    async fn create_todo(
        State(state): State<ServerState>,
        Json(body): Json<Value>,
    ) -> axum::response::Response {
        let title = body.get("title").and_then(Value::as_str).unwrap_or("");
        if title.trim().is_empty() {
            return (
                axum::http::StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": "title is required" })),
            )
                .into_response();
        }

        let id = state.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let item = TodoItem::new(format!("srv-{id}"), title);
        state.items.lock().unwrap().push(item.clone());
        (axum::http::StatusCode::CREATED, Json(item)).into_response()
    }

    async fn update_todo(
        State(state): State<ServerState>,
        Path(id): Path<String>,
        Json(body): Json<Value>,
    ) -> axum::response::Response {
        state.patch_bodies.lock().unwrap().push(body.clone());

        let mut items = state.items.lock().unwrap();
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return (
                axum::http::StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("no item {id}") })),
            )
                .into_response();
        };

        if let Some(title) = body.get("title").and_then(Value::as_str) {
            item.title = title.to_string();
        }
        if let Some(completed) = body.get("completed").and_then(Value::as_bool) {
            item.completed = completed;
        }
        axum::http::StatusCode::OK.into_response()
    }

    async fn delete_todo(
        State(state): State<ServerState>,
        Path(id): Path<String>,
    ) -> axum::http::StatusCode {
        let mut items = state.items.lock().unwrap();
        match items.iter().position(|item| item.id == id) {
            Some(pos) => {
                items.remove(pos);
                axum::http::StatusCode::NO_CONTENT
            }
            None => axum::http::StatusCode::NOT_FOUND,
        }
    }

    async fn spawn_store_server(state: ServerState) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new()
            .route("/todos", get(list_todos).post(create_todo))
            .route("/todos/{id}", patch(update_todo).delete(delete_todo))
            .with_state(state);
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{addr}")
    }

    fn store_for(base_url: &str) -> HttpStore {
        let config = StoreConfig::new(base_url)
            .unwrap()
            .with_timeout(Duration::from_secs(2));
        HttpStore::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_list_decodes_wire_ids() {
        // Raw body, so a broken `_id` rename cannot cancel out on the
        // server side.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().route(
            "/todos",
            get(|| async {
                Json(json!([{ "_id": "w1", "title": "milk", "completed": true }]))
            }),
        );
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let store = store_for(&format!("http://{addr}"));
        let items = store.list().await.unwrap();

        assert_eq!(items, vec![TodoItem::new("w1", "milk").with_completed(true)]);
    }

    #[tokio::test]
    async fn test_create_returns_assigned_item() {
        let state = ServerState::default();
        let base = spawn_store_server(state.clone()).await;
        let store = store_for(&base);

        let item = store.create("walk dog").await.unwrap();

        assert_eq!(item.id, "srv-1");
        assert_eq!(item.title, "walk dog");
        assert!(!item.completed);
        assert_eq!(state.items.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_rejection_maps_to_validation() {
        let base = spawn_store_server(ServerState::default()).await;
        let store = store_for(&base);

        let err = store.create("").await.unwrap_err();

        match err {
            StoreError::Validation(message) => assert_eq!(message, "title is required"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_sends_partial_body() {
        let state = ServerState::default();
        state
            .items
            .lock()
            .unwrap()
            .push(TodoItem::new("srv-1", "milk"));
        let base = spawn_store_server(state.clone()).await;
        let store = store_for(&base);

        store
            .update("srv-1", &TodoPatch::completed(true))
            .await
            .unwrap();

        let bodies = state.patch_bodies.lock().unwrap().clone();
        assert_eq!(bodies, vec![json!({ "completed": true })]);
        assert!(state.items.lock().unwrap()[0].completed);
    }

    #[tokio::test]
    async fn test_update_missing_id_maps_to_not_found() {
        let base = spawn_store_server(ServerState::default()).await;
        let store = store_for(&base);

        let err = store
            .update("ghost", &TodoPatch::title("x"))
            .await
            .unwrap_err();

        match err {
            StoreError::NotFound(id) => assert_eq!(id, "ghost"),
            other => panic!("expected not-found error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_remove_deletes_item() {
        let state = ServerState::default();
        state
            .items
            .lock()
            .unwrap()
            .push(TodoItem::new("srv-1", "milk"));
        let base = spawn_store_server(state.clone()).await;
        let store = store_for(&base);

        store.remove("srv-1").await.unwrap();

        assert!(state.items.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_missing_id_maps_to_not_found() {
        let base = spawn_store_server(ServerState::default()).await;
        let store = store_for(&base);

        let err = store.remove("ghost").await.unwrap_err();

        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_maps_to_transport() {
        // Bind then drop to get a port nothing listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let store = store_for(&format!("http://{addr}"));
        let err = store.list().await.unwrap_err();

        assert!(matches!(err, StoreError::Transport(_)));
    }
}
