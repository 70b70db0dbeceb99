//! Pure Yew view components for the hero list.
//!
//! These components render from props only; all state lives in
//! `hooks::use_hero_stats`.

use hero_stats::api::DataSource;
use hero_stats::{
    hero_row_view, HeroMetadataIndex, HeroRowView, HeroStatRecord, SortKey, SortState,
};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SortControlsProps {
    pub sort: SortState,
    pub source: Option<DataSource>,
    pub loading: bool,
    pub on_sort: Callback<SortKey>,
    pub on_toggle_direction: Callback<()>,
    pub on_refresh: Callback<()>,
}

#[function_component(SortControls)]
pub fn sort_controls(props: &SortControlsProps) -> Html {
    let sort_button = |key: SortKey, label: &'static str| {
        html! {
            <button
                class={classes!((props.sort.key == key).then_some("active"))}
                onclick={props.on_sort.reform(move |_: MouseEvent| key)}
            >
                { label }
            </button>
        }
    };

    html! {
        <div class="sorting-buttons">
            { sort_button(SortKey::Games, "Sort by Games Played") }
            { sort_button(SortKey::Wins, "Sort by Wins") }
            { sort_button(SortKey::WinRate, "Sort by Win Rate") }
            <button onclick={props.on_toggle_direction.reform(|_: MouseEvent| ())}>
                { "Toggle Sort Direction" }
            </button>

            <p>
                { format!(
                    "Currently sorted by: {} (next sort: {})",
                    props.sort.key, props.sort.direction
                ) }
            </p>
            <button
                class="refresh-button"
                disabled={props.loading}
                onclick={props.on_refresh.reform(|_: MouseEvent| ())}
            >
                { "Refresh Data" }
            </button>
            if let Some(source) = props.source {
                <p class="data-source">{ format!("Loaded from {}", source) }</p>
            }
        </div>
    }
}

/// Renders one hero row: sprite, name, stats line and win-rate bar.
fn render_hero_row(row: &HeroRowView) -> Html {
    html! {
        <li key={row.hero_id} class="hero">
            if let Some(ref icon) = row.icon {
                <i class={classes!("d2mh", icon.clone())} title={row.name.clone()} />
            }
            <div class="hero-info">
                <h2>{ row.name.clone() }</h2>
                <p class="hero-stats">{ row.stats_line.clone() }</p>
                <div class="win-rate-bar">
                    if let Some(ref bar) = row.bar {
                        <div
                            class="win-rate-fill"
                            style={format!(
                                "width: {}; background-color: {};",
                                bar.width, bar.color
                            )}
                        />
                    }
                </div>
            </div>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroListProps {
    pub heroes: Rc<Vec<HeroStatRecord>>,
    pub metadata: Rc<HeroMetadataIndex>,
    pub loading: bool,
}

#[function_component(HeroList)]
pub fn hero_list(props: &HeroListProps) -> Html {
    if props.heroes.is_empty() {
        let message = if props.loading {
            "Loading…"
        } else {
            "No hero data to display"
        };
        return html! {
            <p class="no-results-message">{ message }</p>
        };
    }

    html! {
        <ul class="hero-list">
            { props.heroes.iter().map(|record| {
                render_hero_row(&hero_row_view(record, &props.metadata))
            }).collect::<Html>() }
        </ul>
    }
}
