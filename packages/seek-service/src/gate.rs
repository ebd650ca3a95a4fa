use std::sync::Mutex;

/// The query an adapter was invoked for.
///
/// A ticket stays valid only while both its generation and its trimmed text equal the live
/// query. The generation rejects a slow result from an earlier query whose text happens to
/// equal the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ticket {
	generation: u64,
	text: String,
}
impl Ticket {
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Raw text as typed, untrimmed.
	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn is_blank(&self) -> bool {
		self.text.trim().is_empty()
	}

	fn admits(&self, live: &Ticket) -> bool {
		self.generation == live.generation && self.text.trim() == live.text.trim()
	}
}

#[derive(Debug, Default)]
pub struct CommitGate {
	live: Mutex<Ticket>,
}
impl CommitGate {
	/// Makes `text` the live query under a fresh generation.
	pub fn begin(&self, text: &str) -> Ticket {
		let mut live = self.live.lock().unwrap_or_else(|err| err.into_inner());

		live.generation += 1;
		live.text = text.to_string();

		live.clone()
	}

	/// Builds a ticket for a direct per-source call. It carries the live generation, so it
	/// commits only if `text` is also the live text.
	pub fn capture(&self, text: &str) -> Ticket {
		let live = self.live.lock().unwrap_or_else(|err| err.into_inner());

		Ticket { generation: live.generation, text: text.to_string() }
	}

	pub fn current(&self) -> Ticket {
		self.live.lock().unwrap_or_else(|err| err.into_inner()).clone()
	}

	pub fn is_current(&self, ticket: &Ticket) -> bool {
		ticket.admits(&self.live.lock().unwrap_or_else(|err| err.into_inner()))
	}

	/// Runs `apply` iff `ticket` is still current. The live query cannot change while
	/// `apply` runs.
	pub fn commit<F>(&self, ticket: &Ticket, apply: F) -> bool
	where
		F: FnOnce(),
	{
		let live = self.live.lock().unwrap_or_else(|err| err.into_inner());

		if !ticket.admits(&live) {
			return false;
		}

		apply();

		true
	}
}
