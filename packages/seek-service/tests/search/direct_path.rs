use std::sync::Arc;

use super::{Gate, Harness, ScriptedPaths};

#[tokio::test]
async fn existing_path_is_presented() {
	let mut harness = Harness::new();

	harness.paths = Arc::new(ScriptedPaths::existing(&["/tmp/report.pdf"]));

	let controller = harness.controller();

	controller.set_query("/tmp/report.pdf").settled().await;

	let presented = controller.snapshot();
	let record = presented.direct_path.record.expect("Direct path should be present.");

	assert_eq!(record.path, "/tmp/report.pdf");
	assert_eq!(record.name, "report.pdf");
}

#[tokio::test]
async fn missing_or_failing_path_is_absent() {
	let mut harness = Harness::new();

	harness.paths = Arc::new(ScriptedPaths::existing(&[]).with_failing("/root/secret"));

	let controller = harness.controller();

	controller.set_query("/nope").settled().await;

	assert!(!controller.snapshot().direct_path.is_present());

	controller.set_query("/root/secret").settled().await;

	assert!(!controller.snapshot().direct_path.is_present());
	assert_eq!(harness.paths.calls(), 2);
}

#[tokio::test]
async fn blank_query_commits_absent_without_resolving() {
	let mut harness = Harness::new();

	harness.paths = Arc::new(ScriptedPaths::existing(&["/tmp/a.txt"]));

	let controller = harness.controller();

	controller.set_query("/tmp/a.txt").settled().await;

	assert!(controller.snapshot().direct_path.is_present());

	controller.set_query("").settled().await;

	assert!(!controller.snapshot().direct_path.is_present());
	assert_eq!(harness.paths.calls(), 1);
}

#[tokio::test]
async fn retyped_identical_query_rejects_the_older_lookup() {
	let gate = Gate::new();
	let mut harness = Harness::new();

	harness.paths =
		Arc::new(ScriptedPaths::existing(&["/tmp/a.txt"]).with_gate("/tmp/a.txt", gate.clone()));

	let controller = harness.controller();
	let first = controller.set_query("/tmp/a.txt");

	gate.wait_entered().await;

	let second = controller.set_query("/tmp/a.txt");

	second.settled().await;

	let record = controller.snapshot().direct_path.record.expect("Direct path should be present.");

	assert_eq!(record.use_count, 2);

	gate.release(1);
	first.settled().await;

	let record = controller.snapshot().direct_path.record.expect("Direct path should be present.");

	assert_eq!(record.use_count, 2);
}

#[tokio::test]
async fn lookup_finishing_after_query_cleared_changes_nothing() {
	let gate = Gate::new();
	let mut harness = Harness::new();

	harness.paths =
		Arc::new(ScriptedPaths::existing(&["/tmp/a.txt"]).with_gate("/tmp/a.txt", gate.clone()));

	let controller = harness.controller();
	let mut rx = controller.subscribe();
	let pending = controller.set_query("/tmp/a.txt");

	gate.wait_entered().await;
	controller.set_query("").settled().await;
	rx.borrow_and_update();

	gate.release(1);
	pending.settled().await;

	assert!(!rx.has_changed().expect("Controller should still be alive."));
	assert!(!controller.snapshot().direct_path.is_present());
}

#[tokio::test]
async fn direct_lookup_uses_raw_text() {
	let mut harness = Harness::new();

	harness.paths = Arc::new(ScriptedPaths::existing(&["/tmp/a.txt"]));

	let controller = harness.controller();

	controller.set_query(" /tmp/a.txt").settled().await;

	assert!(!controller.snapshot().direct_path.is_present());

	controller.lookup_direct_path("/tmp/a.txt").await;

	assert!(controller.snapshot().direct_path.is_present());
}
