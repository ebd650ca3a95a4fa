use crate::{SourceId, controller::Shared, gate::Ticket};

impl Shared {
	/// Synchronous: the registry is in memory and never fails.
	pub(crate) fn run_plugins(&self, ticket: &Ticket) {
		let matched = self.plugins.search(ticket.text());

		self.commit(ticket, SourceId::Plugins, move |presented| presented.plugins = matched);
	}
}
