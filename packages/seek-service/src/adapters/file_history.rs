use seek_domain::{FileHistoryMatch, QueryMatcher};

use crate::{SourceId, controller::Shared, gate::Ticket};

impl Shared {
	pub(crate) async fn run_file_history(&self, ticket: Ticket) {
		if ticket.is_blank() {
			self.commit(&ticket, SourceId::FileHistory, |presented| {
				presented.file_history.clear()
			});

			return;
		}

		let history = self
			.load_cached(SourceId::FileHistory, &self.caches.file_history, || {
				self.collaborators.history.get_all_file_history()
			})
			.await
			.unwrap_or_default();
		let hits = QueryMatcher::new(ticket.text()).filter(&history, self.settings.max_results);
		let mut matched = Vec::with_capacity(hits.len());

		for item in hits {
			// Icon lookups are the slow part; stop once the query has moved on.
			if !self.gate.is_current(&ticket) {
				return;
			}

			let icon = self.caches.icons.resolve(self.collaborators.icons.as_ref(), &item.path).await;

			matched.push(FileHistoryMatch { item, icon });
			tokio::task::yield_now().await;
		}

		self.commit(&ticket, SourceId::FileHistory, move |presented| {
			presented.file_history = matched
		});
	}
}
