use seek_domain::QueryMatcher;

use crate::{SourceId, controller::Shared, gate::Ticket};

impl Shared {
	pub(crate) async fn run_memos(&self, ticket: Ticket) {
		if ticket.is_blank() {
			self.commit(&ticket, SourceId::Memos, |presented| presented.memos.clear());

			return;
		}

		// Let queued keystrokes land before filtering.
		tokio::task::yield_now().await;

		if !self.gate.is_current(&ticket) {
			return;
		}

		let memos = self.collaborators.notes.memos();
		let matched = QueryMatcher::new(ticket.text()).filter(&memos, self.settings.max_results);

		self.commit(&ticket, SourceId::Memos, move |presented| presented.memos = matched);
	}
}
