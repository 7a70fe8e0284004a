//! Stateless GraphQL request builder and response parser.
//!
//! # Design
//! `TodoClient` holds only the endpoint URL and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual round-trip, keeping
//! the core deterministic and free of I/O dependencies.
//!
//! Each operation is a named GraphQL document posted to the single
//! endpoint. Parsing inspects the standard GraphQL envelope and maps
//! field errors to `ApiError` before touching `data`.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Todo, TodoFilter, TodoInput};

const GET_TODOS: &str =
    "query GetTodos($filter: TodoFilter) { getTodos(filter: $filter) { id task completed priority } }";
const ADD_TODO: &str =
    "mutation AddTodo($input: TodoInput!) { addTodo(input: $input) { id task completed priority } }";
const TOGGLE_TODO: &str =
    "mutation ToggleTodo($id: ID!) { toggleTodo(id: $id) { id task completed priority } }";
const DELETE_TODO: &str = "mutation DeleteTodo($id: ID!) { deleteTodo(id: $id) }";

/// The standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<WireError>,
}

#[derive(Debug, Deserialize)]
struct WireError {
    message: String,
    #[serde(default)]
    extensions: Option<Extensions>,
}

#[derive(Debug, Deserialize)]
struct Extensions {
    code: Option<String>,
}

impl From<WireError> for ApiError {
    fn from(err: WireError) -> Self {
        let code = err.extensions.and_then(|e| e.code);
        match code.as_deref() {
            Some("NOT_FOUND") => ApiError::NotFound,
            Some("BAD_USER_INPUT") => ApiError::Invalid(err.message),
            _ => ApiError::Graphql(err.message),
        }
    }
}

/// Synchronous, stateless client for the todo GraphQL API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the
/// HTTP round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct TodoClient {
    endpoint: String,
}

impl TodoClient {
    /// `base_url` is the server root; the GraphQL endpoint lives at
    /// `{base_url}/graphql`.
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoint: format!("{}/graphql", base_url.trim_end_matches('/')),
        }
    }

    pub fn build_get_todos(&self, filter: &TodoFilter) -> Result<HttpRequest, ApiError> {
        let filter = serde_json::to_value(filter)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(self.request(GET_TODOS, json!({ "filter": filter })))
    }

    pub fn build_add_todo(&self, input: &TodoInput) -> Result<HttpRequest, ApiError> {
        let input = serde_json::to_value(input)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(self.request(ADD_TODO, json!({ "input": input })))
    }

    pub fn build_toggle_todo(&self, id: &str) -> HttpRequest {
        self.request(TOGGLE_TODO, json!({ "id": id }))
    }

    pub fn build_delete_todo(&self, id: &str) -> HttpRequest {
        self.request(DELETE_TODO, json!({ "id": id }))
    }

    pub fn parse_get_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        parse_field(response, "getTodos")
    }

    pub fn parse_add_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_field(response, "addTodo")
    }

    pub fn parse_toggle_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_field(response, "toggleTodo")
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<bool, ApiError> {
        parse_field(response, "deleteTodo")
    }

    fn request(&self, query: &str, variables: Value) -> HttpRequest {
        HttpRequest {
            url: self.endpoint.clone(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: json!({ "query": query, "variables": variables }).to_string(),
        }
    }
}

/// Unwrap one field from the GraphQL envelope. Field errors win over
/// whatever partial `data` the server may have sent.
fn parse_field<T: DeserializeOwned>(
    response: HttpResponse,
    field: &'static str,
) -> Result<T, ApiError> {
    if response.status != 200 {
        return Err(ApiError::Http {
            status: response.status,
            body: response.body,
        });
    }
    let envelope: Envelope = serde_json::from_str(&response.body)
        .map_err(|e| ApiError::Deserialization(e.to_string()))?;
    if let Some(err) = envelope.errors.into_iter().next() {
        return Err(err.into());
    }
    let value = envelope
        .data
        .and_then(|mut data| data.get_mut(field).map(Value::take))
        .ok_or(ApiError::MissingData(field))?;
    serde_json::from_value(value).map_err(|e| ApiError::Deserialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Priority;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:4000")
    }

    fn ok_response(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    fn request_body(req: &HttpRequest) -> Value {
        serde_json::from_str(&req.body).unwrap()
    }

    #[test]
    fn endpoint_is_derived_from_base_url() {
        let req = client().build_delete_todo("x");
        assert_eq!(req.url, "http://localhost:4000/graphql");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:4000/");
        let req = client.build_delete_todo("x");
        assert_eq!(req.url, "http://localhost:4000/graphql");
    }

    #[test]
    fn build_get_todos_sends_filter_variables() {
        let filter = TodoFilter {
            completed: Some(false),
            priority: Some(Priority::High),
        };
        let req = client().build_get_todos(&filter).unwrap();
        let body = request_body(&req);
        assert!(body["query"].as_str().unwrap().contains("getTodos"));
        assert_eq!(
            body["variables"]["filter"],
            serde_json::json!({ "completed": false, "priority": "high" })
        );
    }

    #[test]
    fn build_get_todos_empty_filter_sends_empty_object() {
        let req = client().build_get_todos(&TodoFilter::default()).unwrap();
        let body = request_body(&req);
        assert_eq!(body["variables"]["filter"], serde_json::json!({}));
    }

    #[test]
    fn build_add_todo_omits_unset_priority() {
        let input = TodoInput {
            task: "Buy milk".to_string(),
            priority: None,
        };
        let req = client().build_add_todo(&input).unwrap();
        let body = request_body(&req);
        assert_eq!(body["variables"]["input"]["task"], "Buy milk");
        assert!(body["variables"]["input"].get("priority").is_none());
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn build_toggle_todo_sends_id() {
        let req = client().build_toggle_todo("abc-123");
        let body = request_body(&req);
        assert!(body["query"].as_str().unwrap().contains("toggleTodo"));
        assert_eq!(body["variables"]["id"], "abc-123");
    }

    #[test]
    fn parse_get_todos_success() {
        let resp = ok_response(
            r#"{"data":{"getTodos":[{"id":"1","task":"Coding","completed":false,"priority":"high"}]}}"#,
        );
        let todos = client().parse_get_todos(resp).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].task, "Coding");
        assert_eq!(todos[0].priority, Priority::High);
    }

    #[test]
    fn parse_add_todo_success() {
        let resp = ok_response(
            r#"{"data":{"addTodo":{"id":"1","task":"New","completed":false,"priority":"medium"}}}"#,
        );
        let todo = client().parse_add_todo(resp).unwrap();
        assert_eq!(todo.task, "New");
        assert!(!todo.completed);
    }

    #[test]
    fn parse_delete_todo_returns_bool() {
        let resp = ok_response(r#"{"data":{"deleteTodo":false}}"#);
        assert!(!client().parse_delete_todo(resp).unwrap());
    }

    #[test]
    fn parse_maps_not_found_code() {
        let resp = ok_response(
            r#"{"data":null,"errors":[{"message":"todo not found: x","extensions":{"code":"NOT_FOUND"}}]}"#,
        );
        let err = client().parse_toggle_todo(resp).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_maps_bad_user_input_code() {
        let resp = ok_response(
            r#"{"data":null,"errors":[{"message":"task must not be empty","extensions":{"code":"BAD_USER_INPUT"}}]}"#,
        );
        let err = client().parse_add_todo(resp).unwrap_err();
        assert!(matches!(err, ApiError::Invalid(msg) if msg == "task must not be empty"));
    }

    #[test]
    fn parse_keeps_unrecognized_errors_verbatim() {
        let resp = ok_response(r#"{"errors":[{"message":"something broke"}]}"#);
        let err = client().parse_get_todos(resp).unwrap_err();
        assert!(matches!(err, ApiError::Graphql(msg) if msg == "something broke"));
    }

    #[test]
    fn parse_non_200_is_http_error() {
        let resp = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: "internal error".to_string(),
        };
        let err = client().parse_get_todos(resp).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }

    #[test]
    fn parse_bad_json_is_deserialization_error() {
        let err = client().parse_get_todos(ok_response("not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_missing_field_is_reported() {
        let err = client().parse_get_todos(ok_response(r#"{"data":{}}"#)).unwrap_err();
        assert!(matches!(err, ApiError::MissingData("getTodos")));
    }
}
