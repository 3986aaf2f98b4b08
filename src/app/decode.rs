// src/app/decode.rs
//! Catalog payload decoding: `{"results": [ {...}, ... ]}` into [`MovieRecord`]s.

use serde::{Deserialize, Deserializer};

use super::error::ParseError;
use super::movie::MovieRecord;
use crate::config::DEFAULT_IMAGE_BASE_URL;

#[derive(Deserialize)]
struct DiscoverPage {
    results: Vec<RawMovie>,
}

#[derive(Deserialize)]
struct RawMovie {
    #[serde(deserialize_with = "text_value")]
    original_title: String,
    #[serde(deserialize_with = "text_value")]
    poster_path: String,
    #[serde(deserialize_with = "text_value")]
    release_date: String,
    #[serde(deserialize_with = "text_value")]
    vote_average: String,
    #[serde(deserialize_with = "text_value")]
    popularity: String,
    #[serde(deserialize_with = "text_value")]
    overview: String,
}

/// Strings pass through; numbers keep their JSON spelling ("7.5", "8.0", "12").
/// Anything else (null, bool, object, array) is a type error.
fn text_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        Str(String),
        Num(serde_json::Number),
    }

    Ok(match Text::deserialize(deserializer)? {
        Text::Str(s) => s,
        Text::Num(n) => n.to_string(),
    })
}

/// Decode with the stock w185 poster base.
pub fn decode(body: &str) -> Result<Vec<MovieRecord>, ParseError> {
    decode_with_base(body, DEFAULT_IMAGE_BASE_URL)
}

/// All-or-nothing: one bad element fails the whole page.
pub fn decode_with_base(body: &str, image_base: &str) -> Result<Vec<MovieRecord>, ParseError> {
    let page: DiscoverPage = serde_json::from_str(body)?;
    Ok(page
        .results
        .into_iter()
        .map(|raw| {
            MovieRecord::new(
                raw.original_title,
                format!("{image_base}{}", raw.poster_path),
                raw.release_date,
                raw.vote_average,
                raw.popularity,
                raw.overview,
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"{
        "page": 1,
        "results": [
            {"original_title": "Mad Max: Fury Road", "poster_path": "/kqjL17yufvn9OVLyXYpvtyrFfak.jpg",
             "release_date": "2015-05-13", "vote_average": "7.4", "popularity": "48.2", "overview": "War."},
            {"original_title": "Minions", "poster_path": "/q0R4crx2SehcEEQEkYObktdeFy.jpg",
             "release_date": "2015-06-17", "vote_average": 6.5, "popularity": 39.0, "overview": "Yellow."},
            {"original_title": "Spectre", "poster_path": "/1n9D32o30XOHMdMWuIT4AaA5ruI.jpg",
             "release_date": "2015-11-06", "vote_average": "6.4", "popularity": "12.1", "overview": "Bond.",
             "id": 206647, "adult": false}
        ]
    }"#;

    #[test]
    fn keeps_payload_order_and_builds_poster_urls() {
        let movies = decode(PAGE).unwrap();
        assert_eq!(movies.len(), 3);
        let titles: Vec<_> = movies.iter().map(MovieRecord::title).collect();
        assert_eq!(titles, ["Mad Max: Fury Road", "Minions", "Spectre"]);
        assert_eq!(
            movies[0].poster_url(),
            "http://image.tmdb.org/t/p/w185//kqjL17yufvn9OVLyXYpvtyrFfak.jpg"
        );
    }

    #[test]
    fn numeric_fields_keep_their_json_spelling() {
        let movies = decode(PAGE).unwrap();
        assert_eq!(movies[1].vote_average(), "6.5");
        assert_eq!(movies[1].popularity(), "39.0");
    }

    #[test]
    fn custom_image_base_is_prefixed() {
        let movies = decode_with_base(PAGE, "https://img.example/w342").unwrap();
        assert_eq!(
            movies[2].poster_url(),
            "https://img.example/w342/1n9D32o30XOHMdMWuIT4AaA5ruI.jpg"
        );
    }

    #[test]
    fn empty_results_decode_to_empty_list() {
        assert!(decode(r#"{"results": []}"#).unwrap().is_empty());
    }

    #[test]
    fn missing_results_key_fails() {
        assert!(decode(r#"{"page": 1, "total_results": 0}"#).is_err());
    }

    #[test]
    fn one_incomplete_entry_fails_the_whole_page() {
        let body = r#"{"results": [
            {"original_title": "A", "poster_path": "/a.jpg", "release_date": "2015-01-01",
             "vote_average": "5", "popularity": "1", "overview": "ok"},
            {"original_title": "B", "poster_path": "/b.jpg", "release_date": "2015-01-01",
             "vote_average": "5", "popularity": "1"}
        ]}"#;
        let err = decode(body).unwrap_err();
        assert!(err.to_string().contains("malformed catalog payload"));
    }

    #[test]
    fn wrong_typed_or_non_object_entries_fail() {
        let null_poster = r#"{"results": [
            {"original_title": "A", "poster_path": null, "release_date": "2015-01-01",
             "vote_average": "5", "popularity": "1", "overview": "ok"}
        ]}"#;
        assert!(decode(null_poster).is_err());
        assert!(decode(r#"{"results": ["not an object"]}"#).is_err());
        assert!(decode(r#"{"results": {"original_title": "A"}}"#).is_err());
        assert!(decode("<html>502 Bad Gateway</html>").is_err());
    }
}
