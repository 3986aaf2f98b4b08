// src/app/sort.rs
use std::cmp::Ordering;

use super::movie::MovieRecord;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortCriterion {
    /// Highest vote average first.
    Rating,
    /// Most popular first.
    #[default]
    Popularity,
}

impl SortCriterion {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rating => "vote",
            Self::Popularity => "popularity",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "vote" => Some(Self::Rating),
            "popularity" => Some(Self::Popularity),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Rating => "Highest rated",
            Self::Popularity => "Most popular",
        }
    }

    fn key(self, movie: &MovieRecord) -> &str {
        match self {
            Self::Rating => movie.vote_average(),
            Self::Popularity => movie.popularity(),
        }
    }
}

/// How sort keys are compared. The catalog hands scores over as text;
/// `Lexicographic` compares that text as-is, so "9.0" outranks "12.1".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyOrder {
    #[default]
    Lexicographic,
    Numeric,
}

impl KeyOrder {
    pub const fn from_numeric_flag(numeric: bool) -> Self {
        if numeric {
            Self::Numeric
        } else {
            Self::Lexicographic
        }
    }

    fn descending(self, a: &str, b: &str) -> Ordering {
        match self {
            Self::Lexicographic => b.cmp(a),
            Self::Numeric => match (a.trim().parse::<f64>().ok(), b.trim().parse::<f64>().ok()) {
                (Some(x), Some(y)) => y.total_cmp(&x),
                // unparseable scores sink to the bottom
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

/// Stable descending sort; equal keys keep their incoming order.
pub fn sort_movies(movies: &mut [MovieRecord], criterion: SortCriterion, order: KeyOrder) {
    movies.sort_by(|a, b| order.descending(criterion.key(a), criterion.key(b)));
}
