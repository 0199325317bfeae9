use crate::shared::components::DetailModal;
use crate::shared::icons::icon;
use crate::shared::state::RecordListState;
use contracts::domain::a005_division::aggregate::{Division, DivisionField};
use leptos::prelude::*;

/// "Our businesses": sector chips over division cards
#[component]
pub fn DivisionGrid() -> impl IntoView {
    let state = RecordListState::<Division>::new();
    state.load("/api/content/divisions");

    let visible = state.visible();
    let sectors = state.facet(DivisionField::Sector);
    let active = move || {
        state
            .criteria
            .with(|c| c.constraint(DivisionField::Sector).to_string())
    };

    let chip = move |value: String, label: String| {
        let for_click = value.clone();
        view! {
            <button
                class=move || if active() == value { "chip chip--active" } else { "chip" }
                on:click=move |_| state.set_constraint(DivisionField::Sector, for_click.clone())
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="division-grid">
            <div class="chip-row">
                {chip(String::new(), "All".to_string())}
                {move || {
                    sectors
                        .get()
                        .into_iter()
                        .map(|s| chip(s.clone(), s))
                        .collect_view()
                }}
            </div>

            <div class="card-grid">
                <For
                    each=move || visible.get()
                    key=|division| division.id.clone()
                    children=move |division| {
                        let id = division.id.clone();
                        let accent = format!("--card-accent: {}", division.sector.accent());
                        view! {
                            <article
                                class="division-card"
                                style=accent
                                on:click=move |_| state.select(id.clone())
                            >
                                <div class="division-card__icon">{icon(division.sector.icon())}</div>
                                <h3 class="division-card__name">{division.name.clone()}</h3>
                                <p class="division-card__tagline">{division.tagline.clone()}</p>
                                <div class="division-card__highlights">
                                    {division
                                        .highlights
                                        .iter()
                                        .map(|h| view! {
                                            <div class="highlight">
                                                <strong>{h.value.clone()}</strong>
                                                <span>{h.label.clone()}</span>
                                            </div>
                                        })
                                        .collect_view()}
                                </div>
                            </article>
                        }
                    }
                />
            </div>

            <DetailModal pane=state.pane() on_close=Callback::new(move |_| state.clear_selection()) />
        </div>
    }
}
