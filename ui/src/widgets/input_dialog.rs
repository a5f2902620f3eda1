use egui::{Color32, Ui, Window};

/// Outcome of an input dialog for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputChoice {
    Pending,
    Save,
    Cancel,
}

/// Modal input dialog: title, optional error banner, caller-supplied
/// form body, Save/Cancel row. Closing via the window ✕ reports Cancel.
pub fn input_dialog(
    title: &str,
    error: Option<&str>,
    ui: &Ui,
    add_body: impl FnOnce(&mut Ui),
) -> InputChoice {
    let mut open = true;
    let mut choice = InputChoice::Pending;

    Window::new(title)
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(ui.ctx(), |ui| {
            if let Some(error) = error {
                ui.colored_label(Color32::RED, error);
                ui.add_space(8.0);
            }

            add_body(ui);

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    choice = InputChoice::Save;
                }
                if ui.button("Cancel").clicked() {
                    choice = InputChoice::Cancel;
                }
            });
        });

    if !open && choice == InputChoice::Pending {
        choice = InputChoice::Cancel;
    }
    choice
}
