//! Generic paged, searchable data table.
//!
//! The widget is render-only: the caller owns the record set (behind a
//! [`PageProvider`](gamedesk_business::PageProvider)) and hands in one
//! page of rows plus the page window. User interaction comes back as at
//! most one [`TableEvent`] per frame; a plain render emits nothing. The
//! caller reacts by fetching a new page and re-rendering.

use egui::{Button, Key, RichText, TextEdit, Ui};
use egui_extras::{Column, TableBuilder};
use gamedesk_business::{ColumnKind, ColumnSpec, Gender, PageEntry, PageQuery, PageWindow, Record};

/// Rows-per-page choices offered by the combo box.
pub const ROWS_PER_PAGE_CHOICES: [u32; 5] = [5, 10, 20, 50, 100];

/// Which per-row action buttons the caller handles, rendered in this
/// fixed order: password, edit, delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowActions {
    pub password: bool,
    pub edit: bool,
    pub delete: bool,
}

impl RowActions {
    pub fn none(self) -> bool {
        !(self.password || self.edit || self.delete)
    }
}

/// What the user asked for this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    /// Fetch a page: page click, prev/next, refresh, rows-per-page
    /// change, or a committed search.
    PageRequest(PageQuery),
    /// The add button.
    Add,
    /// Per-row actions, carrying the full row.
    Password(Record),
    Edit(Record),
    Delete(Record),
}

/// Table-local UI state: the rows-per-page selection, the uncommitted
/// search input, and the committed search term. Everything else
/// (rows, page window) is owned by the caller.
#[derive(Debug, Clone)]
pub struct TableUiState {
    rows_per_page: u32,
    search_input: String,
    committed_search: String,
}

impl TableUiState {
    pub fn new(rows_per_page: u32) -> Self {
        Self {
            rows_per_page: rows_per_page.max(1),
            search_input: String::new(),
            committed_search: String::new(),
        }
    }

    /// The search term in effect for page requests. Editing the input
    /// box does not change this until Enter commits it.
    pub fn committed_search(&self) -> &str {
        &self.committed_search
    }

    pub fn rows_per_page(&self) -> u32 {
        self.rows_per_page
    }
}

impl Default for TableUiState {
    fn default() -> Self {
        Self::new(10)
    }
}

/// The paged table widget. Configure with the builder methods, then
/// [`show`](Self::show).
pub struct PagedTable<'a> {
    columns: &'a [ColumnSpec],
    rows: &'a [Record],
    window: PageWindow,
    add_label: Option<&'a str>,
    actions: RowActions,
}

impl<'a> PagedTable<'a> {
    pub fn new(columns: &'a [ColumnSpec], rows: &'a [Record], window: PageWindow) -> Self {
        Self {
            columns,
            rows,
            window,
            add_label: None,
            actions: RowActions::default(),
        }
    }

    /// Show an add button with this label.
    #[must_use]
    pub fn add_label(mut self, label: &'a str) -> Self {
        self.add_label = Some(label);
        self
    }

    #[must_use]
    pub fn actions(mut self, actions: RowActions) -> Self {
        self.actions = actions;
        self
    }

    /// Render the table. Returns at most one event; `None` on a frame
    /// with no relevant interaction.
    pub fn show(self, state: &mut TableUiState, ui: &mut Ui) -> Option<TableEvent> {
        if self.columns.is_empty() {
            // Malformed caller input: benign empty state, no controls.
            ui.weak("No columns configured");
            return None;
        }

        let mut event: Option<TableEvent> = None;
        let mut emit = |candidate: TableEvent, slot: &mut Option<TableEvent>| {
            if slot.is_none() {
                *slot = Some(candidate);
            }
        };

        self.controls_row(state, ui, &mut event, &mut emit);
        ui.add_space(8.0);
        self.table_body(state, ui, &mut event, &mut emit);
        ui.add_space(12.0);
        self.pagination_row(state, ui, &mut event, &mut emit);

        event
    }

    fn page_request(&self, state: &TableUiState, page: u32) -> TableEvent {
        TableEvent::PageRequest(PageQuery::new(
            page,
            state.rows_per_page,
            state.committed_search.clone(),
        ))
    }

    fn controls_row(
        &self,
        state: &mut TableUiState,
        ui: &mut Ui,
        event: &mut Option<TableEvent>,
        emit: &mut impl FnMut(TableEvent, &mut Option<TableEvent>),
    ) {
        ui.horizontal(|ui| {
            ui.label("Rows:");
            let previous = state.rows_per_page;
            egui::ComboBox::from_id_salt("paged_table_rows")
                .selected_text(state.rows_per_page.to_string())
                .width(64.0)
                .show_ui(ui, |ui| {
                    for choice in ROWS_PER_PAGE_CHOICES {
                        ui.selectable_value(&mut state.rows_per_page, choice, choice.to_string());
                    }
                });
            if state.rows_per_page != previous {
                // New page size always restarts from page 1.
                emit(self.page_request(state, 1), event);
            }

            let search_label = ui.label("Search:");
            let search_response = ui
                .add(
                    TextEdit::singleline(&mut state.search_input)
                        .hint_text("Search .....")
                        .desired_width(220.0),
                )
                .labelled_by(search_label.id);
            if search_response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                state.committed_search = state.search_input.clone();
                emit(self.page_request(state, self.window.current_page), event);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🔄 Refresh").clicked() {
                    emit(self.page_request(state, 1), event);
                }
                if let Some(label) = self.add_label {
                    if ui.button(format!("➕ {label}")).clicked() {
                        emit(TableEvent::Add, event);
                    }
                }
            });
        });
    }

    fn table_body(
        &self,
        _state: &TableUiState,
        ui: &mut Ui,
        event: &mut Option<TableEvent>,
        emit: &mut impl FnMut(TableEvent, &mut Option<TableEvent>),
    ) {
        TableBuilder::new(ui)
            .striped(true)
            .columns(Column::auto().at_least(60.0), self.columns.len())
            .header(22.0, |mut header| {
                for column in self.columns {
                    header.col(|ui| {
                        ui.strong(column.header.as_str());
                    });
                }
            })
            .body(|mut body| {
                for record in self.rows {
                    body.row(28.0, |mut row| {
                        for column in self.columns {
                            row.col(|ui| {
                                self.cell(column, record, ui, event, emit);
                            });
                        }
                    });
                }
            });

        if self.rows.is_empty() {
            ui.weak("No records");
        }
    }

    fn cell(
        &self,
        column: &ColumnSpec,
        record: &Record,
        ui: &mut Ui,
        event: &mut Option<TableEvent>,
        emit: &mut impl FnMut(TableEvent, &mut Option<TableEvent>),
    ) {
        match column.kind {
            ColumnKind::Text => {
                ui.label(record.display(column.field.as_str()));
            }
            ColumnKind::Gender => {
                ui.label(Gender::display(&record.display(column.field.as_str())));
            }
            ColumnKind::Image => {
                let url = record.display(column.field.as_str());
                if url.is_empty() {
                    ui.weak("—");
                } else {
                    ui.add(egui::Image::from_uri(url).max_width(120.0).max_height(60.0));
                }
            }
            ColumnKind::Video => {
                // No inline video in egui; bounded cell with a source link.
                let url = record.display(column.field.as_str());
                if url.is_empty() {
                    ui.weak("—");
                } else {
                    ui.hyperlink_to(RichText::new("▶ video").small(), url);
                }
            }
            ColumnKind::Action => {
                ui.horizontal(|ui| {
                    if self.actions.password
                        && ui.button("🔑").on_hover_text("Reset Password").clicked()
                    {
                        emit(TableEvent::Password(record.clone()), event);
                    }
                    if self.actions.edit && ui.button("✏").on_hover_text("Edit").clicked() {
                        emit(TableEvent::Edit(record.clone()), event);
                    }
                    if self.actions.delete && ui.button("🗑").on_hover_text("Delete").clicked() {
                        emit(TableEvent::Delete(record.clone()), event);
                    }
                });
            }
        }
    }

    fn pagination_row(
        &self,
        state: &TableUiState,
        ui: &mut Ui,
        event: &mut Option<TableEvent>,
        emit: &mut impl FnMut(TableEvent, &mut Option<TableEvent>),
    ) {
        let window = self.window;
        ui.horizontal(|ui| {
            ui.label(format!(
                "Page {} of {}",
                window.current_page, window.total_pages
            ));
            ui.separator();

            // Disabled at the boundary; a disabled button cannot emit.
            if ui
                .add_enabled(window.has_prev(), Button::new("⬅"))
                .clicked()
            {
                emit(self.page_request(state, window.current_page - 1), event);
            }

            for entry in window.page_entries() {
                match entry {
                    PageEntry::Number(page) => {
                        let current = page == window.current_page;
                        let label = if current {
                            RichText::new(page.to_string()).strong()
                        } else {
                            RichText::new(page.to_string())
                        };
                        if ui.add(Button::new(label).selected(current)).clicked() {
                            emit(self.page_request(state, page), event);
                        }
                    }
                    PageEntry::Ellipsis => {
                        ui.add_enabled(false, Button::new("…"));
                    }
                }
            }

            if ui
                .add_enabled(window.has_next(), Button::new("➡"))
                .clicked()
            {
                emit(self.page_request(state, window.current_page + 1), event);
            }
        });
    }
}
