//! User management screen.
//!
//! Owns the authoritative record set (behind `SampleProvider`), serves
//! the table's page requests, and hosts the add/edit/delete/password
//! dialogs. Exactly one overlay can be active at a time: `UsersOverlay`
//! is a tagged union with a single assignment point, so opening one
//! dialog structurally closes the others.

use chrono::Utc;
use egui::{TextEdit, Ui};
use gamedesk_business::{
    ColumnSpec, Gender, Record, SampleProvider, UserForm, validate_password_reset,
    validate_user_form,
};

use crate::pages::TableData;
use crate::widgets::{
    ConfirmChoice, InputChoice, PagedTable, RowActions, TableEvent, confirm_dialog, input_dialog,
};

/// The single active overlay of the users screen.
#[derive(Debug, Clone, Default)]
pub enum UsersOverlay {
    #[default]
    None,
    Add,
    Edit {
        original: Record,
    },
    ConfirmDelete(Record),
    ResetPassword {
        row: Record,
        password: String,
        confirm: String,
    },
}

pub struct UsersPage {
    columns: Vec<ColumnSpec>,
    pub data: TableData,
    pub overlay: UsersOverlay,
    pub form: UserForm,
    pub form_error: Option<String>,
}

impl UsersPage {
    pub fn new() -> Self {
        Self::with_provider(SampleProvider::users(1000))
    }

    pub fn with_provider(provider: SampleProvider) -> Self {
        let columns = vec![
            ColumnSpec::text("Username", "Username"),
            ColumnSpec::text("Email", "Email"),
            ColumnSpec::text("Birthday", "Birthday"),
            ColumnSpec::gender("Gender", "Gender"),
            ColumnSpec::text("Last Updated", "UpdatedAt"),
            ColumnSpec::action("Action"),
        ];
        if let Err(err) = ColumnSpec::validate_all(&columns) {
            log::error!("users column spec: {err}");
        }
        Self {
            columns,
            data: TableData::new(provider, 10),
            overlay: UsersOverlay::None,
            form: UserForm::default(),
            form_error: None,
        }
    }

    pub fn show(&mut self, ui: &mut Ui) {
        ui.heading("User Management");
        ui.separator();

        let event = PagedTable::new(&self.columns, &self.data.rows, self.data.window)
            .add_label("Add User")
            .actions(RowActions {
                password: true,
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
                self.form = UserForm::default();
                self.form_error = None;
                self.overlay = UsersOverlay::Add;
            }
            TableEvent::Edit(row) => {
                self.form = UserForm {
                    username: row.display("Username"),
                    email: row.display("Email"),
                    country: row.display("Country"),
                    birthday: row.display("Birthday"),
                    gender_code: row.display("Gender"),
                };
                self.form_error = None;
                self.overlay = UsersOverlay::Edit { original: row };
            }
            TableEvent::Delete(row) => {
                self.overlay = UsersOverlay::ConfirmDelete(row);
            }
            TableEvent::Password(row) => {
                self.form_error = None;
                self.overlay = UsersOverlay::ResetPassword {
                    row,
                    password: String::new(),
                    confirm: String::new(),
                };
            }
        }
    }

    fn show_overlay(&mut self, ui: &Ui) {
        // Take the overlay out, render it, and put it back unless the
        // interaction finished. Keeps one assignment point for the state.
        match std::mem::take(&mut self.overlay) {
            UsersOverlay::None => {}
            UsersOverlay::Add => {
                if self.user_dialog("Add User", ui, None) {
                    self.overlay = UsersOverlay::Add;
                }
            }
            UsersOverlay::Edit { original } => {
                if self.user_dialog("Edit User", ui, Some(&original)) {
                    self.overlay = UsersOverlay::Edit { original };
                }
            }
            UsersOverlay::ConfirmDelete(row) => {
                let username = row.display("Username");
                match confirm_dialog(&format!("Delete user {username}?"), ui) {
                    ConfirmChoice::Pending => self.overlay = UsersOverlay::ConfirmDelete(row),
                    ConfirmChoice::Yes => {
                        if !self.data.provider.remove_by("Username", &username) {
                            log::warn!("delete: no user named {username}");
                        }
                        self.data.refresh();
                    }
                    ConfirmChoice::No => {}
                }
            }
            UsersOverlay::ResetPassword {
                row,
                mut password,
                mut confirm,
            } => {
                let username = row.display("Username");
                let choice = input_dialog(
                    &format!("Reset password for {username}"),
                    self.form_error.as_deref(),
                    ui,
                    |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Password:");
                            ui.add(TextEdit::singleline(&mut password).password(true));
                        });
                        ui.horizontal(|ui| {
                            ui.label("Confirm:");
                            ui.add(TextEdit::singleline(&mut confirm).password(true));
                        });
                    },
                );
                match choice {
                    InputChoice::Pending => {
                        self.overlay = UsersOverlay::ResetPassword {
                            row,
                            password,
                            confirm,
                        };
                    }
                    InputChoice::Save => match validate_password_reset(&password, &confirm) {
                        Ok(()) => {
                            log::info!("password reset for {username}");
                        }
                        Err(message) => {
                            self.form_error = Some(message);
                            self.overlay = UsersOverlay::ResetPassword {
                                row,
                                password,
                                confirm,
                            };
                        }
                    },
                    InputChoice::Cancel => {
                        self.form_error = None;
                    }
                }
            }
        }
    }

    /// Shared body of the add/edit dialogs. Returns true while the
    /// dialog stays open.
    fn user_dialog(&mut self, title: &str, ui: &Ui, original: Option<&Record>) -> bool {
        let form = &mut self.form;
        let choice = input_dialog(title, self.form_error.as_deref(), ui, |ui| {
            ui.horizontal(|ui| {
                ui.label("Username:");
                ui.text_edit_singleline(&mut form.username);
            });
            ui.horizontal(|ui| {
                ui.label("Email:");
                ui.text_edit_singleline(&mut form.email);
            });
            ui.horizontal(|ui| {
                ui.label("Country:");
                ui.text_edit_singleline(&mut form.country);
            });
            ui.horizontal(|ui| {
                ui.label("Birthday:");
                ui.add(TextEdit::singleline(&mut form.birthday).hint_text("YYYY-MM-DD"));
            });
            ui.horizontal(|ui| {
                ui.label("Gender:");
                egui::ComboBox::from_id_salt("user_form_gender")
                    .selected_text(Gender::display(&form.gender_code))
                    .show_ui(ui, |ui| {
                        for gender in Gender::ALL {
                            ui.selectable_value(
                                &mut form.gender_code,
                                gender.code().to_owned(),
                                gender.label(),
                            );
                        }
                    });
            });
        });

        match choice {
            InputChoice::Pending => true,
            InputChoice::Save => match validate_user_form(&self.form) {
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
            .with("Username", self.form.username.as_str())
            .with("Email", self.form.email.as_str())
            .with("Country", self.form.country.as_str())
            .with("Birthday", self.form.birthday.as_str())
            .with("Gender", self.form.gender_code.as_str())
            .with("UpdatedAt", today.as_str());

        match original {
            Some(row) => {
                let username = row.display("Username");
                if !self.data.provider.replace_by("Username", &username, record) {
                    log::warn!("edit: no user named {username}");
                }
            }
            None => self.data.provider.push(record),
        }
        self.data.refresh();
    }
}

impl Default for UsersPage {
    fn default() -> Self {
        Self::new()
    }
}
