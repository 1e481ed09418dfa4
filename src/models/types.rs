//! Common domain type definitions
//!
//! This module contains the enumeration machinery and the movie category
//! domain used across the catalog models.

use crate::models::validation::{CheckResult, Violation};

/// A closed, ordered label set with 1-based positional indexing.
///
/// Each case has an index starting at 1 and a display label; lookups work
/// in both directions. The case set is fixed at compile time, so there is
/// no mutation after construction.
pub trait Enumeration: Sized + Copy {
    /// The maximum valid 1-based index (the number of cases)
    const MAX: u32;

    /// Ordered display labels, one per case
    fn labels() -> &'static [&'static str];

    /// Case for a 1-based index
    fn from_index(index: u32) -> Option<Self>;

    /// 1-based index of this case
    fn index(self) -> u32;

    /// Display label of this case
    fn label(self) -> &'static str {
        Self::labels()[(self.index() - 1) as usize]
    }

    /// Case for a display label
    fn from_label(label: &str) -> Option<Self> {
        Self::labels()
            .iter()
            .position(|l| *l == label)
            .and_then(|pos| Self::from_index(pos as u32 + 1))
    }
}

/// Movie category segmentation (disjoint and incomplete: a movie may
/// belong to no category at all)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovieCategory {
    /// An episode of a TV series; requires a series name and episode number
    TvSeriesEpisode = 1,
    /// A biography; requires a person the movie is about
    Biography = 2,
}

impl Enumeration for MovieCategory {
    const MAX: u32 = 2;

    fn labels() -> &'static [&'static str] {
        &["TV-Series-Episode", "Biography"]
    }

    fn from_index(index: u32) -> Option<Self> {
        match index {
            1 => Some(Self::TvSeriesEpisode),
            2 => Some(Self::Biography),
            _ => None,
        }
    }

    fn index(self) -> u32 {
        self as u32
    }
}

impl MovieCategory {
    /// Coerce a raw form value into a category.
    ///
    /// The category is optional: absent or empty input is no violation.
    pub fn check(raw: Option<&str>) -> CheckResult<Option<Self>> {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(None);
        };
        raw.parse::<u32>()
            .ok()
            .and_then(Self::from_index)
            .map(Some)
            .ok_or_else(|| Violation::range(format!("Invalid value for category: {raw}")))
    }
}

impl std::fmt::Display for MovieCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
