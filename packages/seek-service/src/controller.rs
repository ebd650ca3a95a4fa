use std::sync::Arc;

use tokio::{sync::watch, task::JoinHandle};

use seek_config::Config;
use seek_domain::{AppInfo, FileHistoryItem, SystemFolderItem};

use crate::{
	Collaborators, PluginRegistry, PresentedResults, Result, SearchSettings, SourceId,
	cache::{CacheStore, IconCache},
	gate::{CommitGate, Ticket},
};

/// Sources that resolve asynchronously. Plugins resolve inline.
const SPAWNED_SOURCES: [SourceId; 5] = [
	SourceId::Memos,
	SourceId::Folders,
	SourceId::Applications,
	SourceId::FileHistory,
	SourceId::DirectPath,
];

pub(crate) struct Caches {
	pub(crate) folders: CacheStore<SystemFolderItem>,
	pub(crate) applications: CacheStore<AppInfo>,
	pub(crate) file_history: CacheStore<FileHistoryItem>,
	pub(crate) icons: IconCache,
}
impl Caches {
	fn new() -> Self {
		Self {
			folders: CacheStore::new("folders"),
			applications: CacheStore::new("applications"),
			file_history: CacheStore::new("file_history"),
			icons: IconCache::default(),
		}
	}
}

pub(crate) struct Shared {
	pub(crate) settings: SearchSettings,
	pub(crate) collaborators: Collaborators,
	pub(crate) plugins: PluginRegistry,
	pub(crate) gate: CommitGate,
	pub(crate) caches: Caches,
	presented: watch::Sender<PresentedResults>,
}
impl Shared {
	/// Publishes a source's result through the gate. Returns whether it was applied.
	pub(crate) fn commit<F>(&self, ticket: &Ticket, source: SourceId, apply: F) -> bool
	where
		F: FnOnce(&mut PresentedResults),
	{
		let applied = self.gate.commit(ticket, || self.presented.send_modify(apply));

		if !applied {
			tracing::debug!(
				source = source.as_str(),
				generation = ticket.generation(),
				"Discarded result for a superseded query."
			);
		}

		applied
	}

	async fn run(&self, source: SourceId, ticket: Ticket) {
		match source {
			SourceId::Memos => self.run_memos(ticket).await,
			SourceId::Folders => self.run_folders(ticket).await,
			SourceId::Applications => self.run_applications(ticket).await,
			SourceId::FileHistory => self.run_file_history(ticket).await,
			SourceId::Plugins => self.run_plugins(&ticket),
			SourceId::DirectPath => self.run_direct_path(ticket).await,
		}
	}
}

/// Handle to the adapters started by one [`SearchController::set_query`] call. Dropping it
/// detaches them; they still run to completion and commit through the gate.
#[derive(Debug)]
pub struct FanOut {
	generation: u64,
	tasks: Vec<JoinHandle<()>>,
}
impl FanOut {
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Waits until every adapter of this fan-out has committed or been discarded.
	pub async fn settled(self) {
		for task in self.tasks {
			if let Err(err) = task.await {
				tracing::error!(error = %err, generation = self.generation, "Source adapter task failed.");
			}
		}
	}
}

/// The single owner of the live query and of the presented results.
#[derive(Clone)]
pub struct SearchController {
	shared: Arc<Shared>,
}
impl SearchController {
	pub fn new(
		settings: SearchSettings,
		collaborators: Collaborators,
		plugins: PluginRegistry,
	) -> Self {
		let (presented, _) = watch::channel(PresentedResults::default());

		Self {
			shared: Arc::new(Shared {
				settings,
				collaborators,
				plugins,
				gate: CommitGate::default(),
				caches: Caches::new(),
				presented,
			}),
		}
	}

	pub fn from_config(cfg: &Config, collaborators: Collaborators) -> Result<Self> {
		let settings = SearchSettings::from_config(cfg)?;
		let plugins = PluginRegistry::builtin().without(&cfg.plugins.disabled);

		Ok(Self::new(settings, collaborators, plugins))
	}

	/// Makes `text` the live query and consults every source for it. Must be called from
	/// within a tokio runtime.
	pub fn set_query(&self, text: &str) -> FanOut {
		let ticket = self.shared.gate.begin(text);

		tracing::trace!(generation = ticket.generation(), query = text, "Query changed.");

		self.shared.run_plugins(&ticket);

		let tasks = SPAWNED_SOURCES
			.into_iter()
			.map(|source| {
				let shared = self.shared.clone();
				let ticket = ticket.clone();

				tokio::spawn(async move { shared.run(source, ticket).await })
			})
			.collect();

		FanOut { generation: ticket.generation(), tasks }
	}

	pub async fn search_memos(&self, text: &str) {
		self.shared.run_memos(self.shared.gate.capture(text)).await;
	}

	pub async fn search_folders(&self, text: &str) {
		self.shared.run_folders(self.shared.gate.capture(text)).await;
	}

	pub async fn search_applications(&self, text: &str) {
		self.shared.run_applications(self.shared.gate.capture(text)).await;
	}

	pub async fn search_file_history(&self, text: &str) {
		self.shared.run_file_history(self.shared.gate.capture(text)).await;
	}

	pub fn search_plugins(&self, text: &str) {
		self.shared.run_plugins(&self.shared.gate.capture(text));
	}

	pub async fn lookup_direct_path(&self, text: &str) {
		self.shared.run_direct_path(self.shared.gate.capture(text)).await;
	}

	/// Re-reads the whole file history, replacing the cache even if it was already loaded.
	/// On failure the previous contents stay.
	pub async fn refresh_file_history_cache(&self) {
		let shared = &self.shared;
		let refreshed = shared
			.caches
			.file_history
			.refresh(|| shared.collaborators.history.get_all_file_history())
			.await;

		match refreshed {
			Ok(items) => tracing::info!(count = items.len(), "File history cache refreshed."),
			Err(err) => tracing::warn!(error = %err, "File history refresh failed."),
		}
	}

	pub fn current_query(&self) -> Ticket {
		self.shared.gate.current()
	}

	pub fn snapshot(&self) -> PresentedResults {
		self.shared.presented.borrow().clone()
	}

	/// Notified after every applied commit.
	pub fn subscribe(&self) -> watch::Receiver<PresentedResults> {
		self.shared.presented.subscribe()
	}

	pub fn cached_file_history(&self) -> Option<Arc<Vec<FileHistoryItem>>> {
		self.shared.caches.file_history.snapshot()
	}

	pub fn is_cache_loaded(&self, source: SourceId) -> bool {
		let caches = &self.shared.caches;

		match source {
			SourceId::Folders => caches.folders.is_loaded(),
			SourceId::Applications => caches.applications.is_loaded(),
			SourceId::FileHistory => caches.file_history.is_loaded(),
			SourceId::Memos | SourceId::Plugins | SourceId::DirectPath => false,
		}
	}

	pub fn cached_icon_count(&self) -> usize {
		self.shared.caches.icons.len()
	}
}
