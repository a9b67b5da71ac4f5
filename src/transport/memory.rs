//! # In-Memory Server Request
//!
//! A transport request assembled from already-decoded parts. Hosts that
//! decode HTTP themselves hand the results over through this type.

use super::request::{ParsedBody, ServerRequest};
use crate::input::{InputMap, Value};

/// Server request backed by owned maps
#[derive(Debug, Clone, Default)]
pub struct MemoryRequest {
    query: InputMap,
    body: ParsedBody,
    cookies: InputMap,
    files: InputMap,
    attributes: InputMap,
}

impl MemoryRequest {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: InputMap) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: ParsedBody) -> Self {
        self.body = body;
        self
    }

    pub fn with_cookies(mut self, cookies: InputMap) -> Self {
        self.cookies = cookies;
        self
    }

    pub fn with_files(mut self, files: InputMap) -> Self {
        self.files = files;
        self
    }

    pub fn with_attributes(mut self, attributes: InputMap) -> Self {
        self.attributes = attributes;
        self
    }

    /// Attach a single attribute, keeping the others
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

impl ServerRequest for MemoryRequest {
    fn query_params(&self) -> &InputMap {
        &self.query
    }

    fn parsed_body(&self) -> &ParsedBody {
        &self.body
    }

    fn cookie_params(&self) -> &InputMap {
        &self.cookies
    }

    fn uploaded_files(&self) -> &InputMap {
        &self.files
    }

    fn attributes(&self) -> &InputMap {
        &self.attributes
    }
}
