use leptos::prelude::*;

use crate::client::executor::QueryExecutor;
use crate::client::stats::poll_stats;
use crate::client::wire::StatsSnapshot;
use crate::components::force_graph::{ForceGraphCanvas, GraphDataset};
use crate::components::stats_panel::StatsPanel;
use crate::components::toast::{Notification, Notifier, Toast};

/// Graph explorer page: query input, canvas, stats panel, toast.
#[component]
pub fn Home() -> impl IntoView {
	let (dataset, set_dataset) = signal(GraphDataset::default());
	let (message, set_message) = signal(None::<Notification>);
	let (stats, set_stats) = signal(None::<StatsSnapshot>);
	let (query, set_query) = signal(String::new());

	let executor = QueryExecutor::new(set_dataset, Notifier::new(set_message));

	// One stats snapshot per page load.
	Effect::new(move |_| poll_stats(set_stats));

	let run = {
		let executor = executor.clone();
		move |_| executor.run_query(query.get_untracked())
	};
	let load_all = {
		let executor = executor.clone();
		move |_| executor.fetch_full_graph()
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				<ForceGraphCanvas data=dataset fullscreen=true />
				<div class="graph-overlay">
					<h1>"Graph Explorer"</h1>
					<textarea
						id="cypher"
						name="cypher"
						placeholder="n:*"
						prop:value=move || query.get()
						on:input:target=move |ev| set_query.set(ev.target().value())
					/>
					<div class="query-actions">
						<button on:click=run>"Run query"</button>
						<button on:click=load_all>"Load full graph"</button>
					</div>
					<StatsPanel stats=stats />
				</div>
				<Toast message=message />
			</div>
		</ErrorBoundary>
	}
}
