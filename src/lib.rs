use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

pub mod api;
pub mod cache;
pub mod config;
pub mod logger;
pub mod state;

/// Per-hero statistics for one player, as returned by `/players/{id}/heroes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroStatRecord {
    pub hero_id: u32,
    #[serde(default)]
    pub last_played: i64,
    #[serde(default)]
    pub games: u32,
    #[serde(default)]
    pub win: u32,
    #[serde(default)]
    pub with_games: u32,
    #[serde(default)]
    pub with_win: u32,
    #[serde(default)]
    pub against_games: u32,
    #[serde(default)]
    pub against_win: u32,
}

impl HeroStatRecord {
    /// Wins divided by games played, `0.0` when no games were played.
    pub fn win_rate(&self) -> f64 {
        win_rate(self.win, self.games)
    }
}

/// One entry of the `/heroes` catalog. Only the fields the view needs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeroCatalogEntry {
    pub id: u32,
    pub localized_name: String,
}

/// Display data for a hero: localized name and sprite class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroMetadata {
    pub name: String,
    pub icon: String,
}

pub type HeroMetadataIndex = HashMap<u32, HeroMetadata>;

/// Build the hero id -> metadata map from the catalog.
pub fn build_metadata_index(catalog: &[HeroCatalogEntry]) -> HeroMetadataIndex {
    catalog
        .iter()
        .map(|hero| {
            (
                hero.id,
                HeroMetadata {
                    name: hero.localized_name.clone(),
                    icon: format!("hero-{}", hero.id),
                },
            )
        })
        .collect()
}

#[inline]
pub fn win_rate(win: u32, games: u32) -> f64 {
    if games == 0 {
        0.0
    } else {
        win as f64 / games as f64
    }
}

/// Format a win rate as a percentage with two decimals, e.g. `"60.00%"`.
pub fn format_win_rate(win: u32, games: u32) -> String {
    format!("{:.2}%", win_rate(win, games) * 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Games,
    Wins,
    WinRate,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Games => "games",
            SortKey::Wins => "wins",
            SortKey::WinRate => "winRate",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("asc"),
            SortDirection::Desc => f.write_str("desc"),
        }
    }
}

/// Which key the list was last sorted by, and the direction the next sort uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

fn compare_by_key(a: &HeroStatRecord, b: &HeroStatRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Games => a.games.cmp(&b.games),
        SortKey::Wins => a.win.cmp(&b.win),
        SortKey::WinRate => a.win_rate().total_cmp(&b.win_rate()),
    }
}

/// Return a new ordering of `records` by `key`.
///
/// Uses a stable sort, so records that compare equal keep their relative
/// input order in both directions.
pub fn sort_heroes(
    records: &[HeroStatRecord],
    key: SortKey,
    direction: SortDirection,
) -> Vec<HeroStatRecord> {
    let mut sorted = records.to_vec();
    match direction {
        SortDirection::Asc => sorted.sort_by(|a, b| compare_by_key(a, b, key)),
        SortDirection::Desc => sorted.sort_by(|a, b| compare_by_key(b, a, key)),
    }
    sorted
}

/// Color used for a bar whose win rate is exactly zero.
pub const ZERO_RATE_BAR_COLOR: &str = "#777";
/// Color used for any nonzero win rate.
pub const WIN_RATE_BAR_COLOR: &str = "#4caf50";

#[derive(Debug, Clone, PartialEq)]
pub struct WinRateBar {
    /// CSS width, e.g. `"60.00%"`.
    pub width: String,
    pub color: &'static str,
}

/// Everything one row of the hero list displays.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroRowView {
    pub hero_id: u32,
    pub name: String,
    pub icon: Option<String>,
    pub stats_line: String,
    pub win_rate_label: String,
    pub bar: Option<WinRateBar>,
}

pub const UNKNOWN_HERO_NAME: &str = "Unknown";

pub fn hero_row_view(record: &HeroStatRecord, index: &HeroMetadataIndex) -> HeroRowView {
    let metadata = index.get(&record.hero_id);
    let win_rate_label = format_win_rate(record.win, record.games);

    let bar = if record.games == 0 {
        None
    } else {
        let rate = record.win_rate();
        Some(WinRateBar {
            width: win_rate_label.clone(),
            color: if rate == 0.0 {
                ZERO_RATE_BAR_COLOR
            } else {
                WIN_RATE_BAR_COLOR
            },
        })
    };

    HeroRowView {
        hero_id: record.hero_id,
        name: metadata
            .map(|m| m.name.clone())
            .unwrap_or_else(|| UNKNOWN_HERO_NAME.to_string()),
        icon: metadata.map(|m| m.icon.clone()),
        stats_line: format!(
            "Last Played: {}, Games: {}, Win: {}, With Games: {}, With Win: {}, \
             Against Games: {}, Against Win: {}, Win Rate: {}",
            record.last_played,
            record.games,
            record.win,
            record.with_games,
            record.with_win,
            record.against_games,
            record.against_win,
            win_rate_label
        ),
        win_rate_label,
        bar,
    }
}
