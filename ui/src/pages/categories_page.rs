//! Category management screen: the smallest caller of the table widget,
//! browse plus the add/edit/delete dialogs.

use chrono::Utc;
use egui::{TextEdit, Ui};
use gamedesk_business::{CategoryForm, ColumnSpec, Record, SampleProvider, validate_category_form};

use crate::pages::TableData;
use crate::widgets::{
    ConfirmChoice, InputChoice, PagedTable, RowActions, TableEvent, confirm_dialog, input_dialog,
};

/// The single active overlay of the categories screen.
#[derive(Debug, Clone, Default)]
pub enum CategoriesOverlay {
    #[default]
    None,
    Add,
    Edit {
        original: Record,
    },
    ConfirmDelete(Record),
}

pub struct CategoriesPage {
    columns: Vec<ColumnSpec>,
    pub data: TableData,
    pub overlay: CategoriesOverlay,
    pub form: CategoryForm,
    pub form_error: Option<String>,
}

impl CategoriesPage {
    pub fn new() -> Self {
        Self::with_provider(SampleProvider::categories())
    }

    pub fn with_provider(provider: SampleProvider) -> Self {
        let columns = vec![
            ColumnSpec::text("Category Name", "CategoryName"),
            ColumnSpec::image("Icon", "Icon"),
            ColumnSpec::text("Description", "Description"),
            ColumnSpec::text("Last Updated", "UpdatedAt"),
            ColumnSpec::action("Action"),
        ];
        if let Err(err) = ColumnSpec::validate_all(&columns) {
            log::error!("categories column spec: {err}");
        }
        Self {
            columns,
            data: TableData::new(provider, 10),
            overlay: CategoriesOverlay::None,
            form: CategoryForm::default(),
            form_error: None,
        }
    }

    pub fn show(&mut self, ui: &mut Ui) {
        ui.heading("Category Management");
        ui.separator();

        let event = PagedTable::new(&self.columns, &self.data.rows, self.data.window)
            .add_label("Add Category")
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
                self.form = CategoryForm::default();
                self.form_error = None;
                self.overlay = CategoriesOverlay::Add;
            }
            TableEvent::Edit(row) => {
                self.form = CategoryForm {
                    name: row.display("CategoryName"),
                    icon_url: row.display("Icon"),
                    description: row.display("Description"),
                };
                self.form_error = None;
                self.overlay = CategoriesOverlay::Edit { original: row };
            }
            TableEvent::Delete(row) => {
                self.overlay = CategoriesOverlay::ConfirmDelete(row);
            }
            TableEvent::Password(_) => {}
        }
    }

    fn show_overlay(&mut self, ui: &Ui) {
        match std::mem::take(&mut self.overlay) {
            CategoriesOverlay::None => {}
            CategoriesOverlay::Add => {
                if self.category_dialog("Add Category", ui, None) {
                    self.overlay = CategoriesOverlay::Add;
                }
            }
            CategoriesOverlay::Edit { original } => {
                if self.category_dialog("Edit Category", ui, Some(&original)) {
                    self.overlay = CategoriesOverlay::Edit { original };
                }
            }
            CategoriesOverlay::ConfirmDelete(row) => {
                let name = row.display("CategoryName");
                match confirm_dialog(&format!("Delete category {name}?"), ui) {
                    ConfirmChoice::Pending => self.overlay = CategoriesOverlay::ConfirmDelete(row),
                    ConfirmChoice::Yes => {
                        if !self.data.provider.remove_by("CategoryName", &name) {
                            log::warn!("delete: no category named {name}");
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
    fn category_dialog(&mut self, title: &str, ui: &Ui, original: Option<&Record>) -> bool {
        let form = &mut self.form;
        let choice = input_dialog(title, self.form_error.as_deref(), ui, |ui| {
            ui.horizontal(|ui| {
                ui.label("Category Title:");
                ui.text_edit_singleline(&mut form.name);
            });
            ui.horizontal(|ui| {
                ui.label("Icon URL:");
                ui.add(TextEdit::singleline(&mut form.icon_url).hint_text("https://"));
            });
            ui.horizontal(|ui| {
                ui.label("Description:");
                ui.text_edit_singleline(&mut form.description);
            });
        });

        match choice {
            InputChoice::Pending => true,
            InputChoice::Save => match validate_category_form(&self.form) {
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
            .with("CategoryName", self.form.name.as_str())
            .with("Icon", self.form.icon_url.as_str())
            .with("Description", self.form.description.as_str())
            .with("UpdatedAt", today.as_str());

        match original {
            Some(row) => {
                let name = row.display("CategoryName");
                if !self.data.provider.replace_by("CategoryName", &name, record) {
                    log::warn!("edit: no category named {name}");
                }
            }
            None => self.data.provider.push(record),
        }
        self.data.refresh();
    }
}

impl Default for CategoriesPage {
    fn default() -> Self {
        Self::new()
    }
}
