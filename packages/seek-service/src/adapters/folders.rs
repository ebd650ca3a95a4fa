use seek_domain::QueryMatcher;

use crate::{SourceId, controller::Shared, gate::Ticket};

impl Shared {
	pub(crate) async fn run_folders(&self, ticket: Ticket) {
		if ticket.is_blank() {
			self.commit(&ticket, SourceId::Folders, |presented| presented.folders.clear());

			return;
		}

		let folders = self
			.load_cached(SourceId::Folders, &self.caches.folders, || {
				self.collaborators.folders.list_system_folders()
			})
			.await;
		let matched = folders
			.map(|folders| {
				QueryMatcher::new(ticket.text()).filter(&folders, self.settings.max_results)
			})
			.unwrap_or_default();

		self.commit(&ticket, SourceId::Folders, move |presented| presented.folders = matched);
	}
}
