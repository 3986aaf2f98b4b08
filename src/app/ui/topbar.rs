// src/app/ui/topbar.rs
use eframe::egui as eg;
use tracing::warn;

use crate::app::sort::SortCriterion;

impl crate::app::MoviesApp {
    pub(crate) fn ui_render_topbar(&mut self, ui: &mut eg::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Popular Movies");
            ui.separator();

            let mut pick = self.sort_pick;
            eg::ComboBox::from_id_source("sort_order_combo")
                .selected_text(format!("Sort: {}", pick.label()))
                .show_ui(ui, |ui| {
                    for criterion in [SortCriterion::Popularity, SortCriterion::Rating] {
                        ui.selectable_value(&mut pick, criterion, criterion.label());
                    }
                });
            if pick != self.sort_pick {
                self.change_sort_order(pick);
            }

            ui.with_layout(eg::Layout::right_to_left(eg::Align::Center), |ui| {
                ui.label(eg::RichText::new("Data: The Movie Database (TMDb)").weak())
                    .on_hover_text(
                        "This product uses the TMDb API but is not endorsed or certified by TMDb.",
                    );
            });
        });
    }

    /// Settings change: persist, then re-sort the way a return to the grid would.
    fn change_sort_order(&mut self, criterion: SortCriterion) {
        if let Err(e) = self.prefs.set_sort_criterion(criterion) {
            warn!(
                "Could not save sort order to {}: {e}",
                self.prefs.path().display()
            );
        }
        // a failed write leaves the stored value in charge
        self.sort_pick = self.presenter.resume();

        // grid positions moved; follow the selected film
        if let Some(mut sel) = self.selected.take() {
            if let Some(pos) = self.presenter.movies().iter().position(|m| *m == sel.movie) {
                sel.position = pos;
                self.selected = Some(sel);
            }
        }
    }
}
