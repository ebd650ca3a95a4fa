use seek_service::SourceId;

use super::{Gate, Harness, SpyIcons, SpyStore, app, folder, history_item};

#[tokio::test]
async fn back_to_back_queries_fetch_each_store_once() {
	let mut harness = Harness::new();

	harness.folders = SpyStore::new(vec![folder("下载", "Downloads")]);
	harness.applications = SpyStore::new(vec![app("Firefox")]);
	harness.history = SpyStore::new(vec![history_item("notes.txt", 10)]);

	let controller = harness.controller();
	let fan_outs = vec![
		controller.set_query("f"),
		controller.set_query("fi"),
		controller.set_query("fir"),
	];

	for fan_out in fan_outs {
		fan_out.settled().await;
	}

	assert_eq!(harness.folders.calls(), 1);
	assert_eq!(harness.applications.calls(), 1);
	assert_eq!(harness.history.calls(), 1);
	assert_eq!(controller.snapshot().applications[0].name, "Firefox");
}

#[tokio::test]
async fn query_during_fill_waits_for_the_same_fetch() {
	let gate = Gate::new();
	let mut harness = Harness::new();

	harness.applications = SpyStore::gated(vec![app("Firefox"), app("Files")], gate.clone());

	let controller = harness.controller();
	let first = controller.set_query("fi");

	gate.wait_entered().await;

	let second = controller.set_query("fire");

	tokio::task::yield_now().await;
	gate.release(1);
	first.settled().await;
	second.settled().await;

	let names: Vec<_> =
		controller.snapshot().applications.into_iter().map(|app| app.name).collect();

	assert_eq!(harness.applications.calls(), 1);
	assert_eq!(names, vec!["Firefox".to_string()]);
	assert!(controller.is_cache_loaded(SourceId::Applications));
}

#[tokio::test]
async fn failed_fetch_commits_empty_and_retries_next_query() {
	let mut harness = Harness::new();

	harness.folders = SpyStore::failing(vec![folder("文档", "Documents")], 1);

	let controller = harness.controller();

	controller.set_query("doc").settled().await;

	assert!(controller.snapshot().folders.is_empty());
	assert!(!controller.is_cache_loaded(SourceId::Folders));

	controller.set_query("docu").settled().await;

	assert_eq!(controller.snapshot().folders.len(), 1);
	assert!(controller.is_cache_loaded(SourceId::Folders));
	assert_eq!(harness.folders.calls(), 2);
}

#[tokio::test]
async fn history_is_capped_and_icons_resolve_once_per_extension() {
	let mut harness = Harness::new();
	let mut items: Vec<_> =
		(1..=8).map(|n| history_item(&format!("report-{n:02}.pdf"), 100 - n)).collect();

	items.extend((1..=4).map(|n| history_item(&format!("report-tool-{n}.exe"), 50 - n)));
	harness.history = SpyStore::new(items);

	let controller = harness.controller();

	controller.set_query("report").settled().await;

	let presented = controller.snapshot();

	assert_eq!(presented.file_history.len(), 10);
	assert_eq!(presented.file_history[0].item.name, "report-01.pdf");
	assert!(presented.file_history.iter().all(|hit| hit.icon.is_some()));
	// One lookup for every pdf, one per executable.
	assert_eq!(harness.icons.calls(), 3);
	assert_eq!(controller.cached_icon_count(), 3);

	controller.set_query("report-0").settled().await;

	assert_eq!(harness.icons.calls(), 3);
}

#[tokio::test]
async fn icon_failures_are_not_cached() {
	let mut harness = Harness::new();

	harness.history =
		SpyStore::new(vec![history_item("a.pdf", 2), history_item("b.pdf", 1)]);
	harness.icons = SpyIcons::failing();

	let controller = harness.controller();

	controller.set_query(".pdf").settled().await;

	let presented = controller.snapshot();

	assert_eq!(presented.file_history.len(), 2);
	assert!(presented.file_history.iter().all(|hit| hit.icon.is_none()));
	assert_eq!(harness.icons.calls(), 2);
	assert_eq!(controller.cached_icon_count(), 0);
}

#[tokio::test]
async fn custom_cap_applies_to_every_source() {
	let mut harness = Harness::new();

	harness.applications =
		SpyStore::new((1..=15).map(|n| app(&format!("Tool {n}"))).collect());

	let controller = harness.controller();

	controller.set_query("tool").settled().await;

	assert_eq!(controller.snapshot().applications.len(), 10);

	let settings = seek_service::SearchSettings { max_results: 3, ..Default::default() };
	let capped = harness.controller_with(settings);

	capped.set_query("tool").settled().await;

	assert_eq!(capped.snapshot().applications.len(), 3);
}
