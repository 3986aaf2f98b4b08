// src/app/prefs.rs
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::{fs, io};

use tracing::warn;

use super::sort::SortCriterion;

const SORT_ORDER_KEY: &str = "sort_order";

/// Read side of the user's settings. Consulted every time the grid is sorted,
/// so a change made elsewhere shows up on the next resume.
pub trait SortPreference: Send + Sync {
    fn sort_criterion(&self) -> SortCriterion;
}

/// `key=value` prefs file; `#` lines are comments.
pub struct PrefsFile {
    path: PathBuf,
}

impl PrefsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_value(&self, key: &str) -> Option<String> {
        let txt = fs::read_to_string(&self.path).ok()?;
        txt.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .filter(|(k, _)| k.trim() == key)
            .map(|(_, v)| v.trim().to_string())
            .last()
    }

    pub fn set_sort_criterion(&self, criterion: SortCriterion) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // keep unrelated lines as they are
        let mut lines: Vec<String> = fs::read_to_string(&self.path)
            .unwrap_or_default()
            .lines()
            .filter(|line| {
                line.split_once('=')
                    .map_or(true, |(k, _)| k.trim() != SORT_ORDER_KEY)
            })
            .map(str::to_string)
            .collect();
        if lines.is_empty() {
            lines.push("# popmovies ui prefs".to_string());
        }
        lines.push(format!("{SORT_ORDER_KEY}={}", criterion.as_str()));

        fs::write(&self.path, lines.join("\n") + "\n")
    }
}

impl SortPreference for PrefsFile {
    fn sort_criterion(&self) -> SortCriterion {
        let Some(value) = self.read_value(SORT_ORDER_KEY) else {
            return SortCriterion::default();
        };
        SortCriterion::from_str(&value).unwrap_or_else(|| {
            warn!(
                "Unknown {SORT_ORDER_KEY} `{value}` in {}; using popularity.",
                self.path.display()
            );
            SortCriterion::default()
        })
    }
}

/// In-memory preference.
#[derive(Default)]
pub struct FixedPrefs {
    criterion: Mutex<SortCriterion>,
}

impl FixedPrefs {
    pub fn new(criterion: SortCriterion) -> Self {
        Self {
            criterion: Mutex::new(criterion),
        }
    }

    pub fn set(&self, criterion: SortCriterion) {
        match self.criterion.lock() {
            Ok(mut guard) => *guard = criterion,
            Err(poisoned) => *poisoned.into_inner() = criterion,
        }
    }
}

impl SortPreference for FixedPrefs {
    fn sort_criterion(&self) -> SortCriterion {
        match self.criterion.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_defaults_to_popularity() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = PrefsFile::new(dir.path().join("ui_prefs.txt"));
        assert_eq!(prefs.sort_criterion(), SortCriterion::Popularity);
    }

    #[test]
    fn reads_vote_and_ignores_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ui_prefs.txt");
        fs::write(&path, "# sort_order=popularity\n\n  sort_order = vote \n").unwrap();
        assert_eq!(PrefsFile::new(&path).sort_criterion(), SortCriterion::Rating);
    }

    #[test]
    fn unknown_value_falls_back_to_popularity() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ui_prefs.txt");
        fs::write(&path, "sort_order=alphabetical\n").unwrap();
        assert_eq!(PrefsFile::new(&path).sort_criterion(), SortCriterion::Popularity);
    }

    #[test]
    fn set_creates_dirs_and_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("ui_prefs.txt");
        let prefs = PrefsFile::new(&path);

        prefs.set_sort_criterion(SortCriterion::Rating).unwrap();
        assert_eq!(prefs.sort_criterion(), SortCriterion::Rating);

        fs::write(&path, "poster_w=185\nsort_order=vote\n").unwrap();
        prefs.set_sort_criterion(SortCriterion::Popularity).unwrap();
        let txt = fs::read_to_string(&path).unwrap();
        assert!(txt.contains("poster_w=185"));
        assert_eq!(txt.matches("sort_order=").count(), 1);
        assert_eq!(prefs.sort_criterion(), SortCriterion::Popularity);
    }

    #[test]
    fn fixed_prefs_can_change_between_reads() {
        let prefs = FixedPrefs::default();
        assert_eq!(prefs.sort_criterion(), SortCriterion::Popularity);
        prefs.set(SortCriterion::Rating);
        assert_eq!(prefs.sort_criterion(), SortCriterion::Rating);
    }
}
