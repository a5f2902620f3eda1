//! Game management screen. Same driving contract as the users screen,
//! different columns; the thumbnail column exercises image cells.

use chrono::Utc;
use egui::{TextEdit, Ui};
use gamedesk_business::{ColumnSpec, GameForm, Record, SampleProvider, validate_game_form};

use crate::pages::TableData;
use crate::widgets::{
    ConfirmChoice, InputChoice, PagedTable, RowActions, TableEvent, confirm_dialog, input_dialog,
};

/// The single active overlay of the games screen.
#[derive(Debug, Clone, Default)]
pub enum GamesOverlay {
    #[default]
    None,
    Add,
    Edit {
        original: Record,
    },
    ConfirmDelete(Record),
}

pub struct GamesPage {
    columns: Vec<ColumnSpec>,
    pub data: TableData,
    pub overlay: GamesOverlay,
    pub form: GameForm,
    pub form_error: Option<String>,
}

impl GamesPage {
    pub fn new() -> Self {
        Self::with_provider(SampleProvider::games(120))
    }

    pub fn with_provider(provider: SampleProvider) -> Self {
        let columns = vec![
            ColumnSpec::text("Title", "GameTitle"),
            ColumnSpec::text("Game URL", "GameURL"),
            ColumnSpec::text("Developer", "Developer"),
            ColumnSpec::image("Thumbnail", "ThumbnailURL"),
            ColumnSpec::text("Release Date", "ReleaseDate"),
            ColumnSpec::text("Last Updated", "UpdatedAt"),
            ColumnSpec::action("Action"),
        ];
        if let Err(err) = ColumnSpec::validate_all(&columns) {
            log::error!("games column spec: {err}");
        }
        Self {
            columns,
            data: TableData::new(provider, 10),
            overlay: GamesOverlay::None,
            form: GameForm::default(),
            form_error: None,
        }
    }

    pub fn show(&mut self, ui: &mut Ui) {
        ui.heading("Game Management");
        ui.separator();

        let event = PagedTable::new(&self.columns, &self.data.rows, self.data.window)
            .add_label("Add Game")
            .actions(RowActions {
                password: false,
                edit: true,
                delete: true,
            })
            .show(&mut self.data.table, ui);

        if let Some(event) = event {
            self.handle(event);
        }

        self.show_overlay(ui);
    }

    fn handle(&mut self, event: TableEvent) {
        match event {
            TableEvent::PageRequest(query) => self.data.request(query),
            TableEvent::Add => {
                self.form = GameForm::default();
                self.form_error = None;
                self.overlay = GamesOverlay::Add;
            }
            TableEvent::Edit(row) => {
                self.form = GameForm {
                    title: row.display("GameTitle"),
                    game_url: row.display("GameURL"),
                    developer: row.display("Developer"),
                    thumbnail_url: row.display("ThumbnailURL"),
                    release_date: row.display("ReleaseDate"),
                };
                self.form_error = None;
                self.overlay = GamesOverlay::Edit { original: row };
            }
            TableEvent::Delete(row) => {
                self.overlay = GamesOverlay::ConfirmDelete(row);
            }
            TableEvent::Password(_) => {}
        }
    }

    fn show_overlay(&mut self, ui: &Ui) {
        match std::mem::take(&mut self.overlay) {
            GamesOverlay::None => {}
            GamesOverlay::Add => {
                if self.game_dialog("Add Game", ui, None) {
                    self.overlay = GamesOverlay::Add;
                }
            }
            GamesOverlay::Edit { original } => {
                if self.game_dialog("Edit Game", ui, Some(&original)) {
                    self.overlay = GamesOverlay::Edit { original };
                }
            }
            GamesOverlay::ConfirmDelete(row) => {
                let title = row.display("GameTitle");
                match confirm_dialog(&format!("Delete game {title}?"), ui) {
                    ConfirmChoice::Pending => self.overlay = GamesOverlay::ConfirmDelete(row),
                    ConfirmChoice::Yes => {
                        if !self.data.provider.remove_by("GameTitle", &title) {
                            log::warn!("delete: no game titled {title}");
                        }
                        self.data.refresh();
                    }
                    ConfirmChoice::No => {}
                }
            }
        }
    }

    /// Shared body of the add/edit dialogs. Returns true while the
    /// dialog stays open.
    fn game_dialog(&mut self, title: &str, ui: &Ui, original: Option<&Record>) -> bool {
        let form = &mut self.form;
        let choice = input_dialog(title, self.form_error.as_deref(), ui, |ui| {
            ui.horizontal(|ui| {
                ui.label("Title:");
                ui.text_edit_singleline(&mut form.title);
            });
            ui.horizontal(|ui| {
                ui.label("Game URL:");
                ui.add(TextEdit::singleline(&mut form.game_url).hint_text("https://"));
            });
            ui.horizontal(|ui| {
                ui.label("Developer:");
                ui.text_edit_singleline(&mut form.developer);
            });
            ui.horizontal(|ui| {
                ui.label("Thumbnail URL:");
                ui.add(TextEdit::singleline(&mut form.thumbnail_url).hint_text("https://"));
            });
            ui.horizontal(|ui| {
                ui.label("Release Date:");
                ui.add(TextEdit::singleline(&mut form.release_date).hint_text("YYYY-MM-DD"));
            });
        });

        match choice {
            InputChoice::Pending => true,
            InputChoice::Save => match validate_game_form(&self.form) {
                Ok(()) => {
                    self.commit_form(original);
                    self.form_error = None;
                    false
                }
                Err(message) => {
                    self.form_error = Some(message);
                    true
                }
            },
            InputChoice::Cancel => {
                self.form_error = None;
                false
            }
        }
    }

    fn commit_form(&mut self, original: Option<&Record>) {
        let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();
        let id = match original {
            Some(row) => row.get("ID").cloned(),
            None => Some(self.data.provider.next_id().into()),
        };

        let mut record = Record::new();
        if let Some(id) = id {
            record.set("ID", id);
        }
        let record = record
            .with("GameTitle", self.form.title.as_str())
            .with("GameURL", self.form.game_url.as_str())
            .with("Developer", self.form.developer.as_str())
            .with("ThumbnailURL", self.form.thumbnail_url.as_str())
            .with("ReleaseDate", self.form.release_date.as_str())
            .with("UpdatedAt", today.as_str());

        match original {
            Some(row) => {
                let title = row.display("GameTitle");
                if !self.data.provider.replace_by("GameTitle", &title, record) {
                    log::warn!("edit: no game titled {title}");
                }
            }
            None => self.data.provider.push(record),
        }
        self.data.refresh();
    }
}

impl Default for GamesPage {
    fn default() -> Self {
        Self::new()
    }
}
