use super::Harness;

#[tokio::test]
async fn plugin_results_land_before_set_query_returns() {
	let harness = Harness::new();
	let controller = harness.controller();
	let fan_out = controller.set_query("memo");
	let ids: Vec<_> = controller.snapshot().plugins.into_iter().map(|plugin| plugin.id).collect();

	assert_eq!(ids, vec!["memo".to_string()]);

	fan_out.settled().await;
}

#[tokio::test]
async fn unmatched_and_blank_queries_present_no_plugins() {
	let harness = Harness::new();
	let controller = harness.controller();

	controller.set_query("zzz-no-match").settled().await;

	assert!(controller.snapshot().plugins.is_empty());

	controller.set_query("memo").settled().await;

	assert_eq!(controller.snapshot().plugins.len(), 1);

	controller.set_query("").settled().await;

	assert!(controller.snapshot().plugins.is_empty());
}

#[tokio::test]
async fn direct_plugin_search_ignores_stale_text() {
	let harness = Harness::new();
	let controller = harness.controller();

	controller.set_query("calc").settled().await;
	controller.search_plugins("memo");

	let ids: Vec<_> = controller.snapshot().plugins.into_iter().map(|plugin| plugin.id).collect();

	assert_eq!(ids, vec!["calculator".to_string()]);
}
