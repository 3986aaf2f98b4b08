// src/app/movie.rs
use std::fmt;

use chrono::Month;
use serde::{Deserialize, Serialize};

use super::error::ReleaseDateError;

/// One catalog entry. Every field is kept as the text the catalog sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    title: String,
    poster_url: String,
    release_date: String,
    vote_average: String,
    popularity: String,
    overview: String,
}

impl MovieRecord {
    pub fn new(
        title: impl Into<String>,
        poster_url: impl Into<String>,
        release_date: impl Into<String>,
        vote_average: impl Into<String>,
        popularity: impl Into<String>,
        overview: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            poster_url: poster_url.into(),
            release_date: release_date.into(),
            vote_average: vote_average.into(),
            popularity: popularity.into(),
            overview: overview.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn poster_url(&self) -> &str {
        &self.poster_url
    }

    /// Raw `YYYY-MM-DD` text.
    pub fn release_date(&self) -> &str {
        &self.release_date
    }

    /// "Released in November, 2015" from "2015-11-06".
    pub fn text_release_date(&self) -> Result<String, ReleaseDateError> {
        let raw = &self.release_date;
        let bytes = raw.as_bytes();
        if bytes.len() < 7 {
            return Err(ReleaseDateError::TooShort(raw.clone()));
        }
        let (tens, ones) = (bytes[5], bytes[6]);
        if !tens.is_ascii_digit() || !ones.is_ascii_digit() {
            return Err(ReleaseDateError::BadMonth(raw.clone()));
        }
        let month_number = (tens - b'0') * 10 + (ones - b'0');
        let month =
            Month::try_from(month_number).map_err(|_| ReleaseDateError::BadMonth(raw.clone()))?;
        let year = raw
            .get(0..4)
            .ok_or_else(|| ReleaseDateError::BadYear(raw.clone()))?;
        Ok(format!("Released in {}, {}", month.name(), year))
    }

    pub fn vote_average(&self) -> &str {
        &self.vote_average
    }

    pub fn vote_average_text(&self) -> String {
        format!("Average user score: {} / 10", self.vote_average)
    }

    pub fn popularity(&self) -> &str {
        &self.popularity
    }

    pub fn overview(&self) -> &str {
        &self.overview
    }
}

impl fmt::Display for MovieRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}--{}--{}--{}--{}--{}",
            self.title,
            self.poster_url,
            self.release_date,
            self.vote_average,
            self.popularity,
            self.overview
        )
    }
}
