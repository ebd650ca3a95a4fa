use seek_domain::DirectPathResult;

use crate::{SourceId, controller::Shared, gate::Ticket};

impl Shared {
	/// The raw, untrimmed text is the candidate path. Errors count as "not found".
	pub(crate) async fn run_direct_path(&self, ticket: Ticket) {
		if ticket.is_blank() {
			self.commit(&ticket, SourceId::DirectPath, |presented| {
				presented.direct_path = DirectPathResult::absent()
			});

			return;
		}

		let result = match self.collaborators.paths.check_path_exists(ticket.text()).await {
			Ok(Some(record)) => DirectPathResult::found(record),
			Ok(None) => DirectPathResult::absent(),
			Err(err) => {
				tracing::debug!(error = %err, "Path resolution failed.");

				DirectPathResult::absent()
			},
		};

		self.commit(&ticket, SourceId::DirectPath, move |presented| {
			presented.direct_path = result
		});
	}
}
