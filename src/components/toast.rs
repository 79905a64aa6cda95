//! Transient notification toast.

use leptos::prelude::*;

/// How long a message stays visible.
const DISMISS_MS: u32 = 4000;

/// One notification. The sequence number distinguishes repeated identical
/// messages so each one re-triggers the toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
	pub seq: u64,
	pub text: String,
}

/// Write half of the notification sink, injected into whatever needs to
/// surface a message to the user.
#[derive(Clone, Copy)]
pub struct Notifier {
	sink: WriteSignal<Option<Notification>>,
	seq: RwSignal<u64>,
}

impl Notifier {
	pub fn new(sink: WriteSignal<Option<Notification>>) -> Self {
		Self {
			sink,
			seq: RwSignal::new(0),
		}
	}

	/// Display `text` transiently. Fire-and-forget; nothing is returned.
	pub fn notify(&self, text: String) {
		let seq = self.seq.get_untracked() + 1;
		self.seq.set(seq);
		self.sink.set(Some(Notification { seq, text }));
	}
}

/// Snackbar-style toast that shows the latest notification and dismisses
/// itself after a few seconds.
#[component]
pub fn Toast(#[prop(into)] message: Signal<Option<Notification>>) -> impl IntoView {
	let (visible, set_visible) = signal(None::<Notification>);

	Effect::new(move |_| {
		let Some(notification) = message.get() else {
			return;
		};
		let seq = notification.seq;
		set_visible.set(Some(notification));

		leptos::task::spawn_local(async move {
			gloo_timers::future::TimeoutFuture::new(DISMISS_MS).await;
			// A newer notification restarts the clock; only the one that
			// armed this timer may clear the toast.
			set_visible.update(|current| {
				if current.as_ref().is_some_and(|n| n.seq == seq) {
					*current = None;
				}
			});
		});
	});

	view! {
		<Show when=move || visible.get().is_some()>
			<div class="toast" role="status">
				{move || visible.get().map(|n| n.text)}
			</div>
		</Show>
	}
}
