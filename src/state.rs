//! View state for the hero list and the transitions that change it.
//!
//! The hook in the app feeds every async result and user action through
//! [`HeroStatsState::reduce`], so the rules below hold regardless of the
//! order in which responses arrive:
//! - nothing changes once the view has been torn down;
//! - a failed request keeps the records already on screen;
//! - `loading` ends when a player-heroes request finishes, either way;
//! - toggling the direction never reorders the list by itself.

use crate::api::{DataSource, FetchError, LoadOutcome};
use crate::{
    build_metadata_index, sort_heroes, HeroCatalogEntry, HeroMetadataIndex, HeroStatRecord,
    SortKey, SortState,
};
use log::{debug, error};
use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, PartialEq)]
pub struct HeroStatsState {
    /// Records in display order.
    pub heroes: Rc<Vec<HeroStatRecord>>,
    pub metadata: Rc<HeroMetadataIndex>,
    pub sort: SortState,
    /// Where the displayed records came from, once any have arrived.
    pub source: Option<DataSource>,
    /// A player-heroes request is outstanding.
    pub loading: bool,
    pub mounted: bool,
}

impl Default for HeroStatsState {
    fn default() -> Self {
        Self {
            heroes: Rc::new(Vec::new()),
            metadata: Rc::new(HeroMetadataIndex::new()),
            sort: SortState::default(),
            source: None,
            loading: true,
            mounted: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HeroStatsAction {
    Mounted,
    Unmounted,
    /// A refresh was requested.
    LoadStarted,
    PlayerHeroesLoaded(Result<LoadOutcome, FetchError>),
    CatalogLoaded(Result<Vec<HeroCatalogEntry>, FetchError>),
    /// Re-sort by the key in the current direction.
    Sort(SortKey),
    /// Flip the direction used by the next sort.
    ToggleDirection,
}

impl Reducible for HeroStatsState {
    type Action = HeroStatsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            HeroStatsAction::Mounted => Rc::new(Self {
                mounted: true,
                ..(*self).clone()
            }),
            HeroStatsAction::Unmounted => Rc::new(Self {
                mounted: false,
                ..(*self).clone()
            }),
            _ if !self.mounted => {
                debug!("Discarding {} after teardown", action_name(&action));
                self
            }
            HeroStatsAction::LoadStarted => Rc::new(Self {
                loading: true,
                ..(*self).clone()
            }),
            HeroStatsAction::PlayerHeroesLoaded(Ok(outcome)) => Rc::new(Self {
                heroes: Rc::new(outcome.records),
                source: Some(outcome.source),
                loading: false,
                ..(*self).clone()
            }),
            HeroStatsAction::PlayerHeroesLoaded(Err(e)) => {
                // Keep showing whatever we had.
                error!("Error fetching heroes: {}", e);
                Rc::new(Self {
                    loading: false,
                    ..(*self).clone()
                })
            }
            HeroStatsAction::CatalogLoaded(Ok(catalog)) => Rc::new(Self {
                metadata: Rc::new(build_metadata_index(&catalog)),
                ..(*self).clone()
            }),
            HeroStatsAction::CatalogLoaded(Err(e)) => {
                error!("Error fetching hero data: {}", e);
                self
            }
            HeroStatsAction::Sort(key) => {
                let direction = self.sort.direction;
                Rc::new(Self {
                    heroes: Rc::new(sort_heroes(&self.heroes, key, direction)),
                    sort: SortState { key, direction },
                    ..(*self).clone()
                })
            }
            HeroStatsAction::ToggleDirection => Rc::new(Self {
                sort: SortState {
                    direction: self.sort.direction.toggled(),
                    ..self.sort
                },
                ..(*self).clone()
            }),
        }
    }
}

fn action_name(action: &HeroStatsAction) -> &'static str {
    match action {
        HeroStatsAction::Mounted => "Mounted",
        HeroStatsAction::Unmounted => "Unmounted",
        HeroStatsAction::LoadStarted => "LoadStarted",
        HeroStatsAction::PlayerHeroesLoaded(_) => "PlayerHeroesLoaded",
        HeroStatsAction::CatalogLoaded(_) => "CatalogLoaded",
        HeroStatsAction::Sort(_) => "Sort",
        HeroStatsAction::ToggleDirection => "ToggleDirection",
    }
}
