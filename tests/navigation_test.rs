//! Tests for breadcrumb navigation
//!
//! The path holds the folders (and possibly one trailing file) between the
//! root and the current location. Jumping to segment N keeps the first N
//! path elements; segment 0 is the root.

use backuptui::api::parse_listing;
use backuptui::model::{EntryTree, NavigationModel};

fn tree() -> EntryTree {
    EntryTree::from_remote(
        &parse_listing(
            r#"[
                {"id": "1", "name": "Documents", "data": [
                    {"id": "1", "name": "Work", "type": "folder", "data": [
                        {"id": "1", "name": "report.pdf"}
                    ]},
                    {"id": "2", "name": "todo.txt"}
                ]},
                {"id": "2", "name": "Pictures", "data": []}
            ]"#,
        )
        .unwrap(),
    )
}

fn names(tree: &EntryTree, nav: &NavigationModel) -> Vec<String> {
    nav.visible_entries(tree)
        .iter()
        .filter_map(|id| tree.get(*id))
        .map(|e| e.name.clone())
        .collect()
}

#[test]
fn test_drill_down_and_back() {
    let tree = tree();
    let mut nav = NavigationModel::new("Home");
    assert_eq!(names(&tree, &nav), vec!["Documents", "Pictures"]);

    let documents = tree.roots()[0];
    nav.enter_folder(&tree, documents);
    assert_eq!(names(&tree, &nav), vec!["Work", "todo.txt"]);

    let work = tree.children(documents)[0];
    nav.enter_folder(&tree, work);
    assert_eq!(nav.path_labels(&tree), vec!["Home", "Documents", "Work"]);
    assert_eq!(names(&tree, &nav), vec!["report.pdf"]);

    nav.navigate_to(&tree, 1);
    assert_eq!(nav.path_labels(&tree), vec!["Home", "Documents"]);
    assert_eq!(names(&tree, &nav), vec!["Work", "todo.txt"]);
}

#[test]
fn test_navigate_to_root_from_any_depth() {
    let tree = tree();
    let documents = tree.roots()[0];
    let work = tree.children(documents)[0];

    for depth in 1..=3 {
        let mut nav = NavigationModel::new("Home");
        if depth >= 2 {
            nav.enter_folder(&tree, documents);
        }
        if depth >= 3 {
            nav.enter_folder(&tree, work);
        }
        nav.navigate_to(&tree, 0);
        assert!(nav.is_root());
        assert_eq!(nav.path_labels(&tree), vec!["Home"]);
        assert_eq!(names(&tree, &nav), vec!["Documents", "Pictures"]);
    }
}

#[test]
fn test_opening_a_file_appends_segment_and_empties_view() {
    let tree = tree();
    let mut nav = NavigationModel::new("Home");
    let documents = tree.roots()[0];
    nav.enter_folder(&tree, documents);

    let todo = tree.children(documents)[1];
    nav.enter_file(todo);
    assert_eq!(nav.path_labels(&tree), vec!["Home", "Documents", "todo.txt"]);
    assert!(names(&tree, &nav).is_empty());
}

#[test]
fn test_navigate_past_end_is_noop() {
    let tree = tree();
    let mut nav = NavigationModel::new("Home");
    nav.enter_folder(&tree, tree.roots()[0]);
    nav.navigate_to(&tree, 7);
    assert_eq!(nav.path_labels(&tree), vec!["Home", "Documents"]);
}

#[test]
fn test_empty_folder_shows_nothing() {
    let tree = tree();
    let mut nav = NavigationModel::new("Home");
    nav.enter_folder(&tree, tree.roots()[1]);
    assert!(names(&tree, &nav).is_empty());
    assert_eq!(nav.depth(), 2);
}
