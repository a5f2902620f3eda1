use egui::{Ui, Window};

/// Outcome of a confirm dialog for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    /// Still open, nothing chosen.
    Pending,
    Yes,
    No,
}

/// Modal Yes/No confirmation.
///
/// Render every frame while the question is pending; the caller closes it
/// by reacting to `Yes`/`No` (closing the window's own ✕ reports `No`).
pub fn confirm_dialog(title: &str, ui: &Ui) -> ConfirmChoice {
    let mut open = true;
    let mut choice = ConfirmChoice::Pending;

    Window::new(title)
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(ui.ctx(), |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("Yes").clicked() {
                    choice = ConfirmChoice::Yes;
                }
                if ui.button("No").clicked() {
                    choice = ConfirmChoice::No;
                }
            });
        });

    if !open && choice == ConfirmChoice::Pending {
        choice = ConfirmChoice::No;
    }
    choice
}
