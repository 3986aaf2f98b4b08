// src/app/ui/grid.rs
use eframe::egui as eg;

use crate::app::detail::SelectedMovie;

// w185 posters, same cell the phone layout used
pub const POSTER_W: f32 = 185.0;
pub const POSTER_H: f32 = 278.0;
pub const H_SPACING: f32 = 8.0;
pub const V_SPACING: f32 = 8.0;

impl crate::app::MoviesApp {
    pub(crate) fn ui_render_grid(&mut self, ui: &mut eg::Ui) {
        let mut clicked: Option<usize> = None;
        let selected_pos = self.selected.as_ref().map(|s| s.position);
        let movies = self.presenter.movies();

        eg::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                let avail = ui.available_width();
                let cols = ((avail + H_SPACING) / (POSTER_W + H_SPACING))
                    .floor()
                    .max(1.0) as usize;
                let used = cols as f32 * POSTER_W + cols.saturating_sub(1) as f32 * H_SPACING;
                let left_pad = ((avail - used) * 0.5).max(0.0);

                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = eg::vec2(H_SPACING, V_SPACING);
                    ui.set_max_width(used + left_pad);

                    for (idx, movie) in movies.iter().enumerate() {
                        if idx > 0 && idx % cols == 0 {
                            ui.end_row();
                        }
                        if idx % cols == 0 && left_pad > 0.0 {
                            ui.add_space(left_pad);
                        }

                        let resp = ui
                            .add(
                                eg::Image::new(movie.poster_url())
                                    .fit_to_exact_size(eg::vec2(POSTER_W, POSTER_H))
                                    .rounding(4.0)
                                    .show_loading_spinner(true)
                                    .sense(eg::Sense::click()),
                            )
                            .on_hover_text(movie.title());

                        if resp.clicked() {
                            clicked = Some(idx);
                        }
                        if selected_pos == Some(idx) {
                            ui.painter().rect_stroke(
                                resp.rect.expand(2.0),
                                6.0,
                                eg::Stroke::new(2.0, eg::Color32::YELLOW),
                            );
                        }
                    }
                });
            });

        if let Some(idx) = clicked {
            self.selected = self
                .presenter
                .select(idx)
                .map(|movie| SelectedMovie::new(idx, movie));
        }
    }
}
