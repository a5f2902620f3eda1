//! Widget-level tests for `PagedTable`.
//!
//! The fixture keeps the window static and records every event the
//! widget emits, so each test can assert the exact emission semantics:
//! at most one event per interaction and none on a plain render.
//!
//! Row action buttons live inside `egui_extras` table rows, where
//! kittest clicks do not propagate reliably; those are covered at the
//! page level via state simulation instead (see `users_page_test.rs`).

use egui::accesskit::Role;
use egui_kittest::Harness;
use gamedesk_business::{ColumnSpec, PageQuery, PageWindow, Record};
use gamedesk_ui::widgets::{PagedTable, RowActions, TableEvent, TableUiState};
use kittest::{By, NodeT, Queryable};

struct Fixture {
    columns: Vec<ColumnSpec>,
    rows: Vec<Record>,
    window: PageWindow,
    table: TableUiState,
    events: Vec<TableEvent>,
}

impl Fixture {
    fn new(current_page: u32, total_pages: u32) -> Self {
        let columns = vec![
            ColumnSpec::text("Username", "Username"),
            ColumnSpec::gender("Gender", "Gender"),
            ColumnSpec::action("Action"),
        ];
        let rows = (1..=3)
            .map(|i| {
                Record::new()
                    .with("Username", format!("User{i}").as_str())
                    .with("Gender", "M")
            })
            .collect();
        Self {
            columns,
            rows,
            window: PageWindow {
                current_page,
                total_pages,
                rows_per_page: 10,
            },
            table: TableUiState::new(10),
            events: Vec::new(),
        }
    }
}

fn harness(fixture: Fixture) -> Harness<'static, Fixture> {
    let _ = env_logger::builder().is_test(true).try_init();
    Harness::new_ui_state(
        |ui, fixture: &mut Fixture| {
            let event = PagedTable::new(&fixture.columns, &fixture.rows, fixture.window)
                .add_label("Add User")
                .actions(RowActions {
                    password: true,
                    edit: true,
                    delete: true,
                })
                .show(&mut fixture.table, ui);
            if let Some(event) = event {
                fixture.events.push(event);
            }
        },
        fixture,
    )
}

fn search_field<'h>(harness: &'h Harness<'_, Fixture>) -> egui_kittest::Node<'h> {
    harness
        .query_all_by_label_contains("Search")
        .find(|node| node.accesskit_node().role() == Role::TextInput)
        .expect("search field should exist")
}

#[test]
fn plain_render_emits_nothing() {
    let mut harness = harness(Fixture::new(1, 100));
    for _ in 0..5 {
        harness.step();
    }
    assert!(harness.state().events.is_empty(), "render must not emit");
}

#[test]
fn numbered_button_emits_a_page_request() {
    let mut harness = harness(Fixture::new(1, 100));

    harness.get_by_label("3").click();
    harness.step();

    assert_eq!(
        harness.state().events,
        [TableEvent::PageRequest(PageQuery::new(3, 10, ""))]
    );
}

#[test]
fn next_and_prev_step_one_page() {
    let mut harness = harness(Fixture::new(5, 100));

    harness.get_by_label("➡").click();
    harness.step();
    harness.get_by_label("⬅").click();
    harness.step();

    assert_eq!(
        harness.state().events,
        [
            TableEvent::PageRequest(PageQuery::new(6, 10, "")),
            TableEvent::PageRequest(PageQuery::new(4, 10, "")),
        ]
    );
}

#[test]
fn prev_is_inert_on_the_first_page() {
    let mut harness = harness(Fixture::new(1, 100));

    harness.get_by_label("⬅").click();
    harness.step();

    assert!(
        harness.state().events.is_empty(),
        "disabled prev must not emit"
    );
}

#[test]
fn next_is_inert_on_the_last_page() {
    let mut harness = harness(Fixture::new(100, 100));

    harness.get_by_label("➡").click();
    harness.step();

    assert!(
        harness.state().events.is_empty(),
        "disabled next must not emit"
    );
}

#[test]
fn ellipsis_is_not_clickable() {
    let mut harness = harness(Fixture::new(50, 100));

    harness
        .get_all_by_label("…")
        .next()
        .expect("strip should contain an ellipsis")
        .click();
    harness.step();

    assert!(harness.state().events.is_empty(), "ellipsis must not emit");
}

#[test]
fn rows_per_page_change_resets_to_page_one() {
    let mut harness = harness(Fixture::new(7, 100));

    harness
        .get(By::new().role(Role::ComboBox).value("10"))
        .click();
    harness.step();
    harness.get_by_label("20").click();
    harness.step();

    assert_eq!(
        harness.state().events,
        [TableEvent::PageRequest(PageQuery::new(1, 20, ""))]
    );
}

#[test]
fn typing_in_the_search_box_does_not_emit() {
    let mut harness = harness(Fixture::new(1, 100));

    search_field(&harness).click();
    harness.step();
    search_field(&harness).type_text("user100");
    for _ in 0..3 {
        harness.step();
    }

    assert!(
        harness.state().events.is_empty(),
        "uncommitted input must not emit"
    );
    assert_eq!(harness.state().table.committed_search(), "");
}

#[test]
fn enter_commits_the_search_exactly_once() {
    let mut harness = harness(Fixture::new(4, 100));

    search_field(&harness).click();
    harness.step();
    search_field(&harness).type_text("user100");
    harness.step();
    harness.key_press(egui::Key::Enter);
    harness.step();
    for _ in 0..3 {
        harness.step();
    }

    // One request, for the current page, carrying the committed term.
    assert_eq!(
        harness.state().events,
        [TableEvent::PageRequest(PageQuery::new(4, 10, "user100"))]
    );
    assert_eq!(harness.state().table.committed_search(), "user100");
}

#[test]
fn committed_search_rides_along_with_pagination() {
    let mut harness = harness(Fixture::new(4, 100));

    search_field(&harness).click();
    harness.step();
    search_field(&harness).type_text("puzzle");
    harness.step();
    harness.key_press(egui::Key::Enter);
    harness.step();

    harness.get_by_label("➡").click();
    harness.step();

    let events = &harness.state().events;
    assert_eq!(events.len(), 2, "one commit plus one next click");
    assert_eq!(
        events[1],
        TableEvent::PageRequest(PageQuery::new(5, 10, "puzzle"))
    );
}

#[test]
fn add_button_emits_add() {
    let mut harness = harness(Fixture::new(1, 100));

    harness.get_by_label_contains("Add User").click();
    harness.step();

    assert_eq!(harness.state().events, [TableEvent::Add]);
}

#[test]
fn refresh_requests_the_first_page() {
    let mut harness = harness(Fixture::new(42, 100));

    harness.get_by_label_contains("Refresh").click();
    harness.step();

    assert_eq!(
        harness.state().events,
        [TableEvent::PageRequest(PageQuery::new(1, 10, ""))]
    );
}

#[test]
fn empty_columns_render_a_benign_placeholder() {
    let mut fixture = Fixture::new(1, 1);
    fixture.columns.clear();
    let mut harness = harness(fixture);
    harness.step();

    assert!(harness.query_by_label_contains("No columns configured").is_some());
    assert!(harness.state().events.is_empty());
}

#[test]
fn page_footer_shows_position() {
    let harness = harness(Fixture::new(6, 12));
    assert!(harness.query_by_label_contains("Page 6 of 12").is_some());
}
