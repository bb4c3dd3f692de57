use projboard::app::Board;
use projboard::config::BoardConfig;
use projboard::model::{Project, ProjectStatus};

fn mount() -> Board {
    Board::mount(BoardConfig::default()).unwrap()
}

fn add(board: &Board, title: &str, description: &str, effort: &str) {
    board.fill("title", title).unwrap();
    board.fill("description", description).unwrap();
    board.fill("manday", effort).unwrap();
    board.submit().unwrap();
}

fn titles(projects: Vec<Project>) -> Vec<String> {
    projects.into_iter().map(|p| p.title).collect()
}

#[test]
fn test_submit_lands_in_active_lane() {
    let board = mount();
    add(&board, "A", "", "10");

    let active = board.lane_items(ProjectStatus::Active).unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].title, "A");
    assert_eq!(active[0].effort, 10.0);
    assert_eq!(active[0].status, ProjectStatus::Active);
    assert!(board.lane_items(ProjectStatus::Finished).unwrap().is_empty());
    assert!(board.take_alerts().is_empty());
}

#[test]
fn test_rejected_submissions_change_nothing() {
    let board = mount();
    add(&board, "", "", "10");
    add(&board, "A", &"d".repeat(1001), "10");
    add(&board, "A", "", "100.5");

    assert!(board.store().is_empty());
    assert_eq!(board.take_alerts().len(), 3);
    let values: Vec<String> = board
        .form_values()
        .unwrap()
        .into_iter()
        .map(|(_, v)| v)
        .collect();
    assert_eq!(values, vec!["A".to_string(), String::new(), "100.5".to_string()]);
}

#[test]
fn test_drag_preserves_relative_order() {
    let board = mount();
    for title in ["A", "B", "C", "D"] {
        add(&board, title, "", "1");
    }
    let ids: Vec<String> = board.store().snapshot().into_iter().map(|p| p.id).collect();

    assert!(board.drag(&ids[2], ProjectStatus::Finished).unwrap());
    assert!(board.drag(&ids[0], ProjectStatus::Finished).unwrap());

    assert_eq!(
        titles(board.lane_items(ProjectStatus::Active).unwrap()),
        vec!["D", "B"]
    );
    assert_eq!(
        titles(board.lane_items(ProjectStatus::Finished).unwrap()),
        vec!["C", "A"]
    );

    assert!(board.drag(&ids[2], ProjectStatus::Active).unwrap());
    assert_eq!(
        titles(board.lane_items(ProjectStatus::Active).unwrap()),
        vec!["D", "C", "B"]
    );
}

#[test]
fn test_newest_project_is_listed_first() {
    let board = mount();
    for title in ["A", "B", "C"] {
        add(&board, title, "", "1");
    }
    assert_eq!(
        titles(board.lane_items(ProjectStatus::Active).unwrap()),
        vec!["C", "B", "A"]
    );
    assert_eq!(board.lanes().unwrap()[0].cards[0].title, "C");
}

#[test]
fn test_every_project_rendered_exactly_once() {
    let board = mount();
    for title in ["A", "B", "C"] {
        add(&board, title, "", "2");
    }
    let id = board.store().snapshot()[1].id.clone();
    board.drag(&id, ProjectStatus::Finished).unwrap();

    let lanes = board.lanes().unwrap();
    let mut shown: Vec<String> = lanes
        .iter()
        .flat_map(|l| l.cards.iter().map(|c| c.id.clone()))
        .collect();
    shown.sort();
    let mut stored: Vec<String> = board.store().snapshot().into_iter().map(|p| p.id).collect();
    stored.sort();
    assert_eq!(shown, stored);
}

#[test]
fn test_configured_labels() {
    let config = BoardConfig {
        active_title: "Doing".into(),
        effort_max: 400.0,
        ..BoardConfig::default()
    };
    let board = Board::mount(config).unwrap();
    add(&board, "Big", "", "200");

    let lanes = board.lanes().unwrap();
    assert_eq!(lanes[0].title, "Doing");
    assert_eq!(lanes[0].cards[0].effort, "10man-month");
}
