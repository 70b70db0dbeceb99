use hero_stats::api::{
    fetch_hero_catalog, fetch_player_heroes, load_player_heroes, refresh_player_heroes,
    DataSource,
};
use hero_stats::cache::{open_default_store, CacheGateway, KeyValueStore};
use hero_stats::config::API_BASE_URL;
use hero_stats::state::{HeroStatsAction, HeroStatsState};
use hero_stats::{HeroMetadataIndex, HeroStatRecord, SortKey, SortState};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

type Gateway = CacheGateway<Box<dyn KeyValueStore>>;

/// Current wall-clock time in milliseconds since the epoch.
fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// View state for the hero list plus the callbacks that change it.
#[derive(Clone)]
pub struct HeroStats {
    pub heroes: Rc<Vec<HeroStatRecord>>,
    pub metadata: Rc<HeroMetadataIndex>,
    pub sort: SortState,
    pub source: Option<DataSource>,
    pub loading: bool,
    /// Re-sort the list by the given key in the current direction.
    pub on_sort: Callback<SortKey>,
    /// Flip the direction used by the next sort.
    pub on_toggle_direction: Callback<()>,
    /// Drop the cache and fetch the player's heroes again.
    pub on_refresh: Callback<()>,
}

/// Custom hook owning the hero list: loads it on mount, sorts it, refreshes it.
#[hook]
pub fn use_hero_stats(player_id: u64) -> HeroStats {
    let state = use_reducer(HeroStatsState::default);
    let gateway: Rc<Gateway> = use_memo((), |_| CacheGateway::new(open_default_store()));

    {
        let dispatcher = state.dispatcher();
        let gateway = gateway.clone();

        use_effect_with(player_id, move |&player_id| {
            dispatcher.dispatch(HeroStatsAction::Mounted);

            {
                let dispatcher = dispatcher.clone();
                spawn_local(async move {
                    let result = load_player_heroes(&*gateway, now_ms, || {
                        fetch_player_heroes(API_BASE_URL, player_id)
                    })
                    .await;
                    dispatcher.dispatch(HeroStatsAction::PlayerHeroesLoaded(result));
                });
            }

            {
                let dispatcher = dispatcher.clone();
                spawn_local(async move {
                    let result = fetch_hero_catalog(API_BASE_URL).await;
                    dispatcher.dispatch(HeroStatsAction::CatalogLoaded(result));
                });
            }

            // Late responses are dropped by the reducer once this runs.
            move || dispatcher.dispatch(HeroStatsAction::Unmounted)
        });
    }

    let on_sort = {
        let dispatcher = state.dispatcher();
        Callback::from(move |key| dispatcher.dispatch(HeroStatsAction::Sort(key)))
    };

    let on_toggle_direction = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(HeroStatsAction::ToggleDirection))
    };

    let on_refresh = {
        let dispatcher = state.dispatcher();
        let gateway = gateway.clone();
        Callback::from(move |_: ()| {
            let dispatcher = dispatcher.clone();
            let gateway = gateway.clone();
            dispatcher.dispatch(HeroStatsAction::LoadStarted);
            spawn_local(async move {
                let result = refresh_player_heroes(&*gateway, now_ms, || {
                    fetch_player_heroes(API_BASE_URL, player_id)
                })
                .await;
                dispatcher.dispatch(HeroStatsAction::PlayerHeroesLoaded(result));
            });
        })
    };

    HeroStats {
        heroes: state.heroes.clone(),
        metadata: state.metadata.clone(),
        sort: state.sort,
        source: state.source,
        loading: state.loading,
        on_sort,
        on_toggle_direction,
        on_refresh,
    }
}
