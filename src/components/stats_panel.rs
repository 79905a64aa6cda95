//! Server statistics panel.

use leptos::prelude::*;

use crate::client::wire::StatsSnapshot;

/// Shows the latest stats snapshot. Every field is copied into its label
/// verbatim; formatting is the server's problem.
#[component]
pub fn StatsPanel(#[prop(into)] stats: Signal<Option<StatsSnapshot>>) -> impl IntoView {
	view! {
		<dl class="stats-panel">
			{move || {
				stats
					.get()
					.map(|s| {
						view! {
							<dt>"Start time"</dt>
							<dd>{s.start_time}</dd>
							<dt>"CPUs"</dt>
							<dd>{s.num_cpu}</dd>
							<dt>"Goroutines"</dt>
							<dd>{s.num_goroutines}</dd>
							<dt>"Memory allocated"</dt>
							<dd>{s.total_memory_alloc}</dd>
							<dt>"Nodes"</dt>
							<dd>{s.node_count}</dd>
							<dt>"Edges"</dt>
							<dd>{s.edge_count}</dd>
						}
					})
			}}
		</dl>
	}
}
