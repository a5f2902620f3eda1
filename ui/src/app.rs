use chrono::Utc;
use gamedesk_business::Session;

use crate::pages::{CategoriesPage, GamesPage, UsersPage};

/// Which management screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Games,
    Categories,
    Users,
}

pub struct GamedeskApp {
    session: Session,
    nav: Nav,
    games: GamesPage,
    categories: CategoriesPage,
    users: UsersPage,
}

impl GamedeskApp {
    /// Called once before the first frame.
    pub fn new(session: Session) -> Self {
        Self {
            session,
            nav: Nav::Games,
            games: GamesPage::new(),
            categories: CategoriesPage::new(),
            users: UsersPage::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

impl Default for GamedeskApp {
    fn default() -> Self {
        Self::new(Session::local(Utc::now()))
    }
}

impl eframe::App for GamedeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Gamedesk");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Signed in as {}", self.session.username));
                });
            });
        });

        egui::SidePanel::left("nav_panel")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.selectable_value(&mut self.nav, Nav::Games, "🎮 Games");
                ui.selectable_value(&mut self.nav, Nav::Categories, "🗂 Categories");
                ui.selectable_value(&mut self.nav, Nav::Users, "👥 Users");
            });

        egui::CentralPanel::default().show(ctx, |ui| match self.nav {
            Nav::Games => self.games.show(ui),
            Nav::Categories => self.categories.show(ui),
            Nav::Users => self.users.show(ui),
        });
    }
}
