//! Stats endpoint polling.

use gloo_net::http::Request;
use leptos::prelude::*;
use log::error;
use wasm_bindgen_futures::spawn_local;

use super::wire::StatsSnapshot;

const STATS_ENDPOINT: &str = "/stats/json";

/// Fetch one stats snapshot and overwrite the display signal with it.
///
/// There is deliberately no notification path here: a failed poll is logged
/// to the console and the panel keeps whatever it last showed.
pub fn poll_stats(stats: WriteSignal<Option<StatsSnapshot>>) {
	spawn_local(async move {
		match request_stats().await {
			Ok(snapshot) => stats.set(Some(snapshot)),
			Err(err) => error!("stats poll failed: {err}"),
		}
	});
}

async fn request_stats() -> Result<StatsSnapshot, gloo_net::Error> {
	Request::get(STATS_ENDPOINT).send().await?.json().await
}
