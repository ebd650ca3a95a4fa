use seek_service::SearchSettings;

use super::{Harness, SpyNotes, SpyStore, app, folder, memo};

#[tokio::test]
async fn memos_match_title_or_content() {
	let mut harness = Harness::new();

	harness.notes = SpyNotes::new(vec![
		memo("1", "Groceries", "milk and eggs"),
		memo("2", "Trip", "book flights"),
	]);

	let controller = harness.controller();

	controller.set_query("MILK").settled().await;

	let presented = controller.snapshot();

	assert_eq!(presented.memos.len(), 1);
	assert_eq!(presented.memos[0].id, "1");

	controller.set_query("trip").settled().await;

	assert_eq!(controller.snapshot().memos[0].id, "2");
}

#[tokio::test]
async fn folders_match_pinyin_aliases() {
	let mut harness = Harness::new();

	harness.folders = SpyStore::new(vec![folder("下载", "Downloads"), folder("文档", "Documents")]);

	let controller = harness.controller();

	controller.set_query("xiazai").settled().await;

	assert_eq!(controller.snapshot().folders[0].name, "下载");

	controller.set_query("wd").settled().await;

	let names: Vec<_> =
		controller.snapshot().folders.into_iter().map(|item| item.name).collect();

	assert_eq!(names, vec!["文档".to_string()]);
}

#[tokio::test]
async fn excluded_applications_never_surface() {
	let mut harness = Harness::new();

	harness.applications = SpyStore::new(vec![app("Uninstall Firefox"), app("Firefox")]);

	let settings = SearchSettings::default()
		.with_app_excludes(["(?i)uninstall"])
		.expect("Exclude pattern should compile.");
	let controller = harness.controller_with(settings);

	controller.set_query("firefox").settled().await;

	let names: Vec<_> =
		controller.snapshot().applications.into_iter().map(|app| app.name).collect();

	assert_eq!(names, vec!["Firefox".to_string()]);
}

#[tokio::test]
async fn applications_match_word_acronyms() {
	let mut harness = Harness::new();

	harness.applications = SpyStore::new(vec![app("Visual Studio Code"), app("Vim")]);

	let controller = harness.controller();

	controller.set_query("vsc").settled().await;

	let names: Vec<_> =
		controller.snapshot().applications.into_iter().map(|app| app.name).collect();

	assert_eq!(names, vec!["Visual Studio Code".to_string()]);
}

#[tokio::test]
async fn subscribers_see_committed_results() {
	let mut harness = Harness::new();

	harness.notes = SpyNotes::new(vec![memo("1", "Groceries", "milk")]);

	let controller = harness.controller();
	let mut rx = controller.subscribe();

	controller.set_query("groc").settled().await;

	assert!(rx.has_changed().expect("Controller should still be alive."));
	assert_eq!(rx.borrow_and_update().memos.len(), 1);
}
