use super::{Gate, Harness, SpyStore, folder};

#[tokio::test]
async fn slow_result_for_an_older_query_is_discarded() {
	let gate = Gate::new();
	let mut harness = Harness::new();

	harness.folders = SpyStore::gated(
		vec![folder("文档", "Documents"), folder("图片", "Pictures")],
		gate.clone(),
	);

	let controller = harness.controller();
	let first = controller.set_query("doc");

	gate.wait_entered().await;

	let second = controller.set_query("pic");

	gate.release(1);
	first.settled().await;
	second.settled().await;

	let presented = controller.snapshot();
	let names: Vec<_> = presented.folders.iter().map(|item| item.name.as_str()).collect();

	assert_eq!(names, vec!["图片"]);
	assert_eq!(harness.folders.calls(), 1);
	assert_eq!(controller.current_query().text(), "pic");
}

#[tokio::test]
async fn each_query_gets_a_fresh_generation() {
	let harness = Harness::new();
	let controller = harness.controller();
	let first = controller.set_query("alpha");
	let second = controller.set_query("alpha");

	assert!(second.generation() > first.generation());
	assert_eq!(controller.current_query().generation(), second.generation());

	first.settled().await;
	second.settled().await;
}

#[tokio::test]
async fn direct_call_commits_only_for_the_live_text() {
	let mut harness = Harness::new();

	harness.folders =
		SpyStore::new(vec![folder("文档", "Documents"), folder("图片", "Pictures")]);

	let controller = harness.controller();

	controller.set_query("doc").settled().await;
	controller.search_folders("pic").await;

	let presented = controller.snapshot();

	assert_eq!(presented.folders.len(), 1);
	assert_eq!(presented.folders[0].name, "文档");

	controller.search_folders("doc ").await;

	assert_eq!(controller.snapshot().folders[0].name, "文档");
}

#[tokio::test]
async fn blank_query_clears_results_without_consulting_sources() {
	let mut harness = Harness::new();

	harness.folders = SpyStore::new(vec![folder("文档", "Documents")]);

	let controller = harness.controller();

	controller.set_query("doc").settled().await;

	assert_eq!(controller.snapshot().folders.len(), 1);

	let calls_before = harness.backend_calls();

	controller.set_query("   ").settled().await;

	assert_eq!(harness.backend_calls(), calls_before);
	assert!(controller.snapshot().is_empty());
}

#[tokio::test]
async fn blank_first_query_touches_nothing() {
	let harness = Harness::new();
	let controller = harness.controller();

	controller.set_query("").settled().await;

	assert_eq!(harness.backend_calls(), 0);
	assert!(controller.snapshot().is_empty());
}
