use seek_domain::{AppInfo, QueryMatcher};

use crate::{SourceId, controller::Shared, gate::Ticket};

impl Shared {
	pub(crate) async fn run_applications(&self, ticket: Ticket) {
		if ticket.is_blank() {
			self.commit(&ticket, SourceId::Applications, |presented| {
				presented.applications.clear()
			});

			return;
		}

		let apps = self
			.load_cached(SourceId::Applications, &self.caches.applications, || {
				self.collaborators.applications.scan_applications()
			})
			.await
			.unwrap_or_default();
		let matcher = QueryMatcher::new(ticket.text());
		let matched: Vec<AppInfo> = apps
			.iter()
			.filter(|app| !self.settings.is_excluded(app))
			.filter(|app| matcher.matches(*app))
			.take(self.settings.max_results)
			.cloned()
			.collect();

		self.commit(&ticket, SourceId::Applications, move |presented| {
			presented.applications = matched
		});
	}
}
