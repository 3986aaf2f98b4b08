// src/app/detail.rs
use eframe::egui as eg;
use tracing::warn;

use super::movie::MovieRecord;

/// Display strings for one selected film. Built once on selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovieDetail {
    pub title: String,
    pub poster_url: String,
    pub release_text: String,
    pub vote_text: String,
    pub overview: String,
}

impl MovieDetail {
    pub fn from_record(movie: &MovieRecord) -> Self {
        let release_text = movie.text_release_date().unwrap_or_else(|e| {
            warn!("{}: {e}", movie.title());
            movie.release_date().to_string()
        });
        Self {
            title: movie.title().to_string(),
            poster_url: movie.poster_url().to_string(),
            release_text,
            vote_text: movie.vote_average_text(),
            overview: movie.overview().to_string(),
        }
    }
}

pub(crate) struct SelectedMovie {
    pub position: usize,
    pub movie: MovieRecord,
    pub detail: MovieDetail,
}

impl SelectedMovie {
    pub fn new(position: usize, movie: MovieRecord) -> Self {
        let detail = MovieDetail::from_record(&movie);
        Self {
            position,
            movie,
            detail,
        }
    }
}

impl crate::app::MoviesApp {
    pub(crate) fn ui_render_detail_panel(&mut self, ctx: &eg::Context) {
        let mut close = false;

        eg::SidePanel::right("detail_panel")
            .resizable(true)
            .default_width(340.0)
            .min_width(260.0)
            .max_width(520.0)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    ui.heading("Details");
                    ui.with_layout(eg::Layout::right_to_left(eg::Align::Center), |ui| {
                        if ui.button("Close").clicked() {
                            close = true;
                        }
                    });
                });
                ui.separator();

                let Some(sel) = &self.selected else {
                    return;
                };
                let detail = &sel.detail;

                eg::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        let avail_w = ui.available_width().clamp(120.0, 342.0);
                        let poster_size = eg::vec2(avail_w, avail_w * 1.5);
                        ui.add(
                            eg::Image::new(detail.poster_url.as_str())
                                .fit_to_exact_size(poster_size)
                                .rounding(6.0)
                                .show_loading_spinner(true),
                        );

                        ui.add_space(8.0);
                        ui.heading(&detail.title);
                        ui.label(eg::RichText::new(&detail.release_text).weak());
                        ui.label(&detail.vote_text);

                        ui.add_space(8.0);
                        ui.separator();
                        ui.add_space(4.0);
                        ui.label(eg::RichText::new("Overview").strong());
                        ui.add(eg::Label::new(&detail.overview).wrap());
                    });
            });

        if close {
            self.selected = None;
        }
    }
}
