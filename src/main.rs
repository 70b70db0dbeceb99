//! Main module for the Hero Stats application using Yew.
//! Wires the hero stats hook into the view components.

use hero_stats::config::{player_id_from_query, DEFAULT_PLAYER_ID, LOG_LEVEL};
use hero_stats::logger;
use log::{info, warn};
use yew::prelude::*;

mod components;
mod hooks;

use components::{HeroList, SortControls};
use hooks::use_hero_stats;

/// Player to show, from the page's `?player=` parameter.
fn current_player_id() -> u64 {
    match gloo_utils::window().location().search() {
        Ok(query) => player_id_from_query(&query),
        Err(e) => {
            warn!("Could not read page URL, using default player: {:?}", e);
            DEFAULT_PLAYER_ID
        }
    }
}

#[derive(Properties, PartialEq)]
struct HeroesPageProps {
    player_id: u64,
}

/// The hero list page: controls on top, one row per hero below.
#[function_component(HeroesPage)]
fn heroes_page(props: &HeroesPageProps) -> Html {
    let stats = use_hero_stats(props.player_id);

    html! {
        <div class="container">
            <h1>{ "Heroes" }</h1>
            <SortControls
                sort={stats.sort}
                source={stats.source}
                loading={stats.loading}
                on_sort={stats.on_sort.clone()}
                on_toggle_direction={stats.on_toggle_direction.clone()}
                on_refresh={stats.on_refresh.clone()}
            />
            <HeroList
                heroes={stats.heroes.clone()}
                metadata={stats.metadata.clone()}
                loading={stats.loading}
            />
        </div>
    }
}

#[function_component]
pub fn App() -> Html {
    let player_id = *use_memo((), |_| current_player_id());
    html! { <HeroesPage {player_id} /> }
}

/// Entry point: installs panic and log hooks, then renders the App component.
fn main() {
    console_error_panic_hook::set_once();
    if logger::init(LOG_LEVEL).is_ok() {
        info!("Hero Stats starting");
    }
    yew::Renderer::<App>::new().render();
}
