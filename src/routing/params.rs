//! Request parameter extraction
//!
//! Builds the per-request [`RequestParams`] bag from the path, query string,
//! headers and (when it is JSON) the body. Nothing here fails: a malformed
//! body or query simply contributes nothing.

use std::collections::BTreeMap;
use std::fmt;

use axum::http::{header, HeaderMap, Method, Uri};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// A path segment, typed as an integer when the whole segment is numeric
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PathParam {
    Int(i64),
    Str(String),
}

impl PathParam {
    pub fn parse(segment: &str) -> Self {
        match segment.parse::<i64>() {
            Ok(n) => Self::Int(n),
            Err(_) => Self::Str(segment.to_string()),
        }
    }
}

impl fmt::Display for PathParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Str(s) => write!(f, "{}", s),
        }
    }
}

/// Split a path on `/`, dropping empty components
pub fn path_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Key under which the segment at `index` is stored
pub fn segment_key(index: usize) -> String {
    format!("segment_{}", index)
}

/// Index path segments as `segment_<i>` → integer or string
pub fn extract_path_params(path: &str) -> BTreeMap<String, PathParam> {
    path_segments(path)
        .into_iter()
        .enumerate()
        .map(|(i, segment)| (segment_key(i), PathParam::parse(segment)))
        .collect()
}

/// Everything the routing demo knows about one request
#[derive(Debug, Clone, Serialize)]
pub struct RequestParams {
    pub path_params: BTreeMap<String, PathParam>,
    pub query_params: BTreeMap<String, Vec<String>>,
    pub body_params: Map<String, Value>,
    pub headers: BTreeMap<String, String>,
    #[serde(serialize_with = "serialize_method")]
    pub method: Method,
    pub full_url: String,
    pub path: String,
}

impl RequestParams {
    /// Gather path, query, header and body parameters
    pub fn aggregate(method: &Method, uri: &Uri, headers: &HeaderMap, body: &[u8]) -> Self {
        let path = uri.path().to_string();
        let full_url = uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| path.clone());

        Self {
            path_params: extract_path_params(&path),
            query_params: parse_query(uri.query()),
            body_params: parse_body(headers, body),
            headers: collect_headers(headers),
            method: method.clone(),
            full_url,
            path,
        }
    }

    /// First value of a query parameter
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query_params
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn path_param(&self, index: usize) -> Option<&PathParam> {
        self.path_params.get(&segment_key(index))
    }
}

fn serialize_method<S: Serializer>(method: &Method, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(method.as_str())
}

fn parse_query(query: Option<&str>) -> BTreeMap<String, Vec<String>> {
    let mut params: BTreeMap<String, Vec<String>> = BTreeMap::new();

    if let Some(query) = query {
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            params
                .entry(key.into_owned())
                .or_default()
                .push(value.into_owned());
        }
    }

    params
}

fn is_json_content(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false)
}

fn parse_body(headers: &HeaderMap, body: &[u8]) -> Map<String, Value> {
    if body.is_empty() || !is_json_content(headers) {
        return Map::new();
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            tracing::debug!("JSON body is not an object, ignoring");
            Map::new()
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to parse JSON body, ignoring");
            Map::new()
        }
    }
}

/// Header names are lower-case; repeated headers are joined with `, `
fn collect_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut collected: BTreeMap<String, String> = BTreeMap::new();

    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        collected
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }

    collected
}
