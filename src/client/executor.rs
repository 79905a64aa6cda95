//! Query execution against the graph endpoint.
//!
//! Two entry points share one outcome policy: a successful response becomes a
//! full-replacement write of the render dataset, any failure becomes a
//! transient notification, and the dataset is left untouched.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use gloo_net::http::Request;
use leptos::prelude::*;
use log::{debug, warn};
use url::form_urlencoded;
use wasm_bindgen_futures::spawn_local;

use super::convert::convert;
use super::error::ClientError;
use super::wire::RawGraphResult;
use crate::components::force_graph::GraphDataset;
use crate::components::toast::Notifier;

const ASSETS_ENDPOINT: &str = "/assets/json";

/// Form field the backend reads the query text from.
pub const QUERY_FIELD: &str = "cypher";

/// Monotonic token source for in-flight requests. Only the most recently
/// started request may write its outcome; responses that lost the race are
/// dropped, which makes the overlapping-query case deterministic.
///
/// Atomics rather than `Cell` so the executor stays `Send`, which view
/// closures capturing it must be.
#[derive(Clone, Default)]
struct FlightSequence(Arc<AtomicU64>);

impl FlightSequence {
	fn begin(&self) -> u64 {
		self.0.fetch_add(1, Ordering::Relaxed) + 1
	}

	fn is_current(&self, token: u64) -> bool {
		self.0.load(Ordering::Relaxed) == token
	}
}

/// Issues graph queries and routes each outcome to the render dataset or the
/// notification sink. Both sinks are injected; the executor owns no display
/// state of its own.
#[derive(Clone)]
pub struct QueryExecutor {
	dataset: WriteSignal<GraphDataset>,
	notifier: Notifier,
	flights: FlightSequence,
}

impl QueryExecutor {
	pub fn new(dataset: WriteSignal<GraphDataset>, notifier: Notifier) -> Self {
		Self {
			dataset,
			notifier,
			flights: FlightSequence::default(),
		}
	}

	/// Fetch the entire graph. The read path performs no status check; a
	/// non-JSON body surfaces as a transport failure.
	pub fn fetch_full_graph(&self) {
		let token = self.flights.begin();
		let executor = self.clone();
		spawn_local(async move {
			let outcome = request_full_graph().await;
			executor.finish(token, outcome);
		});
	}

	/// Run a user-supplied query, posted as a single `cypher` form field.
	pub fn run_query(&self, query: String) {
		let token = self.flights.begin();
		let executor = self.clone();
		spawn_local(async move {
			let outcome = request_query(&query).await;
			executor.finish(token, outcome);
		});
	}

	fn finish(&self, token: u64, outcome: Result<RawGraphResult, ClientError>) {
		if !self.flights.is_current(token) {
			debug!("dropping response for superseded request {token}");
			return;
		}
		match outcome.and_then(|raw| Ok(convert(raw)?)) {
			Ok(dataset) => self.dataset.set(dataset),
			Err(err) => {
				warn!("query failed: {err}");
				self.notifier.notify(err.user_message());
			}
		}
	}
}

async fn request_full_graph() -> Result<RawGraphResult, ClientError> {
	let response = Request::get(ASSETS_ENDPOINT)
		.send()
		.await
		.map_err(transport)?;
	response.json().await.map_err(transport)
}

async fn request_query(query: &str) -> Result<RawGraphResult, ClientError> {
	let response = Request::post(ASSETS_ENDPOINT)
		.header("Content-Type", "application/x-www-form-urlencoded")
		.body(form_body(query))
		.map_err(transport)?
		.send()
		.await
		.map_err(transport)?;

	if response.ok() {
		response.json().await.map_err(transport)
	} else {
		let message = response.text().await.map_err(transport)?;
		Err(ClientError::Http {
			status: response.status(),
			message,
		})
	}
}

pub(crate) fn form_body(query: &str) -> String {
	form_urlencoded::Serializer::new(String::new())
		.append_pair(QUERY_FIELD, query)
		.finish()
}

fn transport(err: gloo_net::Error) -> ClientError {
	ClientError::Transport(err.to_string())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn form_body_encodes_the_query_field() {
		assert_eq!(form_body("n:*"), "cypher=n%3A*");
		assert_eq!(
			form_body("match (n) return n"),
			"cypher=match+%28n%29+return+n"
		);
	}

	#[test]
	fn only_the_latest_flight_is_current() {
		let flights = FlightSequence::default();
		let first = flights.begin();
		assert!(flights.is_current(first));

		let second = flights.begin();
		assert!(!flights.is_current(first));
		assert!(flights.is_current(second));
	}

	#[test]
	fn flight_tokens_are_monotonic() {
		let flights = FlightSequence::default();
		let a = flights.begin();
		let b = flights.begin();
		assert!(b > a);
	}

	#[test]
	fn executor_can_be_captured_by_view_closures() {
		fn assert_send<T: Send>() {}
		assert_send::<FlightSequence>();
		assert_send::<QueryExecutor>();
	}
}
