//! Page-level tests for the users screen: the page serves the table's
//! requests from its `SampleProvider`, clamps out-of-range pages, and
//! keeps exactly one overlay active at a time.
//!
//! Row action buttons sit inside `egui_extras` table rows, where kittest
//! clicks do not propagate; overlay flows are entered by setting the
//! overlay state directly, then driven through their dialog buttons,
//! which live in ordinary windows and click fine.

use egui::accesskit::Role;
use egui_kittest::Harness;
use gamedesk_business::{PageQuery, SampleProvider, UserForm};
use gamedesk_ui::pages::{UsersOverlay, UsersPage};
use kittest::{NodeT, Queryable};

fn harness() -> Harness<'static, UsersPage> {
    let _ = env_logger::builder().is_test(true).try_init();
    Harness::new_ui_state(
        |ui, page: &mut UsersPage| page.show(ui),
        UsersPage::with_provider(SampleProvider::users(1000)),
    )
}

#[test]
fn first_page_is_loaded_up_front() {
    let harness = harness();

    assert!(harness.query_by_label_contains("Page 1 of 100").is_some());
    assert!(harness.query_by_label_contains("User1").is_some());
    assert_eq!(harness.state().data.rows.len(), 10);
}

#[test]
fn next_advances_and_renders_the_next_slice() {
    let mut harness = harness();

    harness.get_by_label("➡").click();
    harness.step();
    harness.step();

    assert_eq!(harness.state().data.window.current_page, 2);
    assert_eq!(harness.state().data.rows[0].display("Username"), "User11");
    assert!(harness.query_by_label_contains("Page 2 of 100").is_some());
}

#[test]
fn jumping_to_the_last_page_shows_the_tail() {
    let mut harness = harness();

    harness.get_by_label("100").click();
    harness.step();
    harness.step();

    let rows = &harness.state().data.rows;
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0].display("Username"), "User991");
    assert_eq!(rows[9].display("Username"), "User1000");
}

#[test]
fn out_of_range_request_is_clamped_by_the_page() {
    let mut harness = harness();

    harness
        .state_mut()
        .data
        .request(PageQuery::new(101, 10, ""));
    harness.step();

    assert_eq!(harness.state().data.window.current_page, 100);
    assert!(harness.query_by_label_contains("Page 100 of 100").is_some());
}

#[test]
fn search_round_trip_narrows_and_renders() {
    let mut harness = harness();

    harness
        .query_all_by_label_contains("Search")
        .find(|node| node.accesskit_node().role() == Role::TextInput)
        .expect("search field should exist")
        .click();
    harness.step();
    harness
        .query_all_by_label_contains("Search")
        .find(|node| node.accesskit_node().role() == Role::TextInput)
        .expect("search field should exist")
        .type_text("user100");
    harness.step();
    harness.key_press(egui::Key::Enter);
    for _ in 0..3 {
        harness.step();
    }

    assert!(harness.query_by_label_contains("Page 1 of 1").is_some());
    let names: Vec<String> = harness
        .state()
        .data
        .rows
        .iter()
        .map(|row| row.display("Username"))
        .collect();
    assert_eq!(names, ["User100", "User1000"]);
}

#[test]
fn delete_flow_removes_the_row_after_confirmation() {
    let mut harness = harness();

    let victim = harness.state().data.rows[4].clone();
    assert_eq!(victim.display("Username"), "User5");
    harness.state_mut().overlay = UsersOverlay::ConfirmDelete(victim);
    harness.step();

    harness.get_by_label("Yes").click();
    harness.step();
    harness.step();

    let state = harness.state();
    assert_eq!(state.data.provider.len(), 999);
    assert!(
        state
            .data
            .rows
            .iter()
            .all(|row| row.display("Username") != "User5"),
        "deleted row must not be re-served"
    );
    assert!(matches!(state.overlay, UsersOverlay::None));
}

#[test]
fn cancelling_delete_keeps_the_row() {
    let mut harness = harness();

    let victim = harness.state().data.rows[0].clone();
    harness.state_mut().overlay = UsersOverlay::ConfirmDelete(victim);
    harness.step();

    harness.get_by_label("No").click();
    harness.step();

    let state = harness.state();
    assert_eq!(state.data.provider.len(), 1000);
    assert!(matches!(state.overlay, UsersOverlay::None));
}

#[test]
fn only_one_overlay_is_ever_active() {
    let mut harness = harness();

    let row = harness.state().data.rows[0].clone();
    harness.state_mut().overlay = UsersOverlay::ConfirmDelete(row);
    harness.step();
    assert!(harness.query_by_label("Yes").is_some());

    // Switching overlays is a single assignment; the confirm dialog is
    // structurally gone, no sibling-closing bookkeeping involved.
    harness.state_mut().overlay = UsersOverlay::Add;
    harness.step();
    assert!(harness.query_by_label("Yes").is_none());
    assert!(harness.query_by_label("Save").is_some());
}

#[test]
fn add_dialog_offers_a_country_field() {
    let mut harness = harness();

    harness.state_mut().overlay = UsersOverlay::Add;
    harness.step();

    assert!(harness.query_by_label("Country:").is_some());
}

#[test]
fn added_user_gets_a_fresh_id_after_a_delete() {
    let mut harness = harness();

    assert!(harness.state_mut().data.provider.remove_by("Username", "User5"));

    harness.state_mut().overlay = UsersOverlay::Add;
    harness.state_mut().form = UserForm {
        username: "brand_new".to_owned(),
        email: "brand.new@example.com".to_owned(),
        country: "NL".to_owned(),
        birthday: "2004-02-11".to_owned(),
        gender_code: "F".to_owned(),
    };
    harness.step();

    harness.get_by_label("Save").click();
    harness.step();
    harness.step();

    harness.state_mut().data.request(PageQuery::new(1, 10, "brand_new"));
    let state = harness.state();
    assert_eq!(state.data.provider.len(), 1000);
    assert_eq!(state.data.rows.len(), 1);
    // 1000 users were seeded, so the next free ID is 1001 even though a
    // row was deleted first; a length-based counter would reissue 1000.
    assert_eq!(state.data.rows[0].display("ID"), "1001");
    assert_eq!(state.data.rows[0].display("Country"), "NL");
    assert!(matches!(state.overlay, UsersOverlay::None));
}

#[test]
fn add_dialog_rejects_a_bad_username_and_keeps_the_dialog_open() {
    let mut harness = harness();

    harness.state_mut().overlay = UsersOverlay::Add;
    harness.step();

    harness.get_by_label("Save").click();
    harness.step();

    assert!(matches!(harness.state().overlay, UsersOverlay::Add));
    assert!(
        harness
            .query_by_label_contains("Please enter Username")
            .is_some()
    );
}
