use super::{Harness, SpyStore, history_item};

#[tokio::test]
async fn refresh_is_idempotent_and_picks_up_new_entries() {
	let mut harness = Harness::new();

	harness.history = SpyStore::new(vec![history_item("alpha.txt", 2)]);

	let controller = harness.controller();

	assert!(controller.cached_file_history().is_none());

	controller.refresh_file_history_cache().await;
	controller.refresh_file_history_cache().await;

	let cached = controller.cached_file_history().expect("Cache should be loaded.");

	assert_eq!(cached.len(), 1);
	assert_eq!(harness.history.calls(), 2);

	harness.history.set_items(vec![history_item("beta.txt", 3), history_item("alpha.txt", 2)]);
	controller.refresh_file_history_cache().await;
	controller.set_query("beta").settled().await;

	let presented = controller.snapshot();

	assert_eq!(presented.file_history.len(), 1);
	assert_eq!(presented.file_history[0].item.name, "beta.txt");
	// The query used the refreshed cache.
	assert_eq!(harness.history.calls(), 3);
}

#[tokio::test]
async fn refresh_replaces_a_cache_filled_by_a_query() {
	let mut harness = Harness::new();

	harness.history = SpyStore::new(vec![history_item("alpha.txt", 2)]);

	let controller = harness.controller();

	controller.set_query("beta").settled().await;

	assert!(controller.snapshot().file_history.is_empty());

	harness.history.set_items(vec![history_item("beta.txt", 3)]);
	controller.refresh_file_history_cache().await;
	controller.set_query("beta").settled().await;

	assert_eq!(controller.snapshot().file_history.len(), 1);
}

#[tokio::test]
async fn failed_refresh_keeps_previous_contents() {
	let mut harness = Harness::new();

	harness.history = SpyStore::new(vec![history_item("alpha.txt", 2)]);

	let controller = harness.controller();

	controller.refresh_file_history_cache().await;
	harness.history.set_items(Vec::new());
	harness.history.fail_next(1);
	controller.refresh_file_history_cache().await;

	let cached = controller.cached_file_history().expect("Cache should stay loaded.");

	assert_eq!(cached.len(), 1);
	assert_eq!(cached[0].name, "alpha.txt");
}

#[tokio::test]
async fn failed_first_refresh_leaves_cache_unloaded() {
	let mut harness = Harness::new();

	harness.history = SpyStore::failing(vec![history_item("alpha.txt", 2)], 1);

	let controller = harness.controller();

	controller.refresh_file_history_cache().await;

	assert!(controller.cached_file_history().is_none());

	controller.set_query("alpha").settled().await;

	assert_eq!(controller.snapshot().file_history.len(), 1);
}
