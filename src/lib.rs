//! Popular-movies browser: fetches TMDb's most popular titles, shows them as a
//! sortable poster grid and opens a detail panel for the selected film.

pub mod app;
pub mod config;
