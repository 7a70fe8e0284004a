//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP traffic as plain data. The core builds
//! `HttpRequest` values and parses `HttpResponse` values without ever
//! touching the network — the caller (host) is responsible for executing
//! the actual I/O. GraphQL-over-HTTP needs only one verb here: every
//! operation is a POST of a JSON document to the single endpoint, so a
//! request is a URL, headers and a mandatory body.
//!
//! All fields use owned types so values can move freely between threads
//! and host callbacks.

/// An HTTP POST request described as plain data.
///
/// Built by `TodoClient::build_*` methods. The caller executes this
/// request against the network and returns the corresponding
/// `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then
/// passed to `TodoClient::parse_*` methods for deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
