//! Network request rows that the filter bar narrows down.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filter::FilterState;

/// A single entry in the network request list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestEntry {
	pub method: String,
	pub url: String,
	pub status: u16,
	/// Response content type, possibly carrying parameters such as `charset`.
	pub mime_type: String,
	/// How the request was issued (`document`, `fetch`, `xhr`, `script`, ...).
	pub kind: String,
}

impl RequestEntry {
	pub fn new(
		method: impl Into<String>,
		url: impl Into<String>,
		status: u16,
		mime_type: impl Into<String>,
		kind: impl Into<String>,
	) -> Self {
		Self {
			method: method.into(),
			url: url.into(),
			status,
			mime_type: mime_type.into(),
			kind: kind.into(),
		}
	}

	/// The MIME type lowercased and stripped of parameters.
	#[must_use]
	pub fn essence(&self) -> String {
		self.mime_type
			.split(';')
			.next()
			.unwrap_or_default()
			.trim()
			.to_ascii_lowercase()
	}
}

#[derive(Debug, Error)]
pub enum RequestsError {
	#[error("failed to read request list {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("failed to parse request list {path}")]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}

/// Load a JSON array of [`RequestEntry`] values from `path`.
pub fn load_requests(path: &Path) -> Result<Vec<RequestEntry>, RequestsError> {
	let contents = fs::read_to_string(path).map_err(|source| RequestsError::Read {
		path: path.to_path_buf(),
		source,
	})?;
	let entries: Vec<RequestEntry> =
		serde_json::from_str(&contents).map_err(|source| RequestsError::Parse {
			path: path.to_path_buf(),
			source,
		})?;
	log::info!("loaded {} requests from {}", entries.len(), path.display());
	Ok(entries)
}

/// Indices of the entries accepted by `filter`, in their original order.
#[must_use]
pub fn filter_requests(entries: &[RequestEntry], filter: &FilterState) -> Vec<usize> {
	entries
		.iter()
		.enumerate()
		.filter(|(_, entry)| filter.matches(entry))
		.map(|(index, _)| index)
		.collect()
}

/// Built-in request list used when no file is supplied.
#[must_use]
pub fn sample_requests() -> Vec<RequestEntry> {
	vec![
		RequestEntry::new(
			"GET",
			"https://example.com/",
			200,
			"text/html; charset=utf-8",
			"document",
		),
		RequestEntry::new("GET", "https://example.com/app.js", 200, "application/javascript", "script"),
		RequestEntry::new("GET", "https://example.com/vendor.js", 200, "text/javascript", "script"),
		RequestEntry::new("GET", "https://example.com/site.css", 200, "text/css", "stylesheet"),
		RequestEntry::new("GET", "https://fonts.example.com/inter.woff2", 200, "font/woff2", "font"),
		RequestEntry::new("GET", "https://example.com/logo.png", 200, "image/png", "image"),
		RequestEntry::new("GET", "https://example.com/hero.svg", 304, "image/svg+xml", "image"),
		RequestEntry::new(
			"POST",
			"https://api.example.com/v1/login",
			201,
			"application/json",
			"fetch",
		),
		RequestEntry::new("GET", "https://api.example.com/v1/items", 200, "application/json", "xhr"),
		RequestEntry::new(
			"GET",
			"https://api.example.com/v1/missing",
			404,
			"application/json",
			"fetch",
		),
	]
}
