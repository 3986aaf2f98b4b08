// src/app/ui/mod.rs
pub mod grid;
pub mod topbar;

use eframe::egui as eg;

impl crate::app::MoviesApp {
    pub(crate) fn ui_render_loading(&self, ui: &mut eg::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading("Fetching popular movies…");
            ui.add(eg::Spinner::new().size(18.0));
        });
    }
}
