use crate::shared::components::{DetailModal, FilterPanel};
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use crate::shared::state::RecordListState;
use contracts::domain::a002_store::aggregate::Store;
use leptos::prelude::*;

/// Store locator: filterable list of branches with directions links
#[component]
pub fn StoreList() -> impl IntoView {
    let state = RecordListState::<Store>::new();
    state.load("/api/content/stores");

    let visible = state.visible();
    let query = Signal::derive(move || state.criteria.with(|c| c.query().to_string()));

    view! {
        <div class="store-list">
            <FilterPanel state=state search_placeholder="Search by store name or address..." />

            {move || state.error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    {icon("alert")}
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="card-grid">
                <For
                    each=move || visible.get()
                    key=|store| store.id.clone()
                    children=move |store| {
                        let id = store.id.clone();
                        let name = store.name.clone();
                        let address = store.address.clone();
                        let map_url = store.location.map_url();
                        view! {
                            <article class="store-card" on:click=move |_| state.select(id.clone())>
                                <span class="badge">{store.brand.clone()}</span>
                                <h3 class="store-card__name">
                                    {move || highlight_matches(&name, &query.get())}
                                </h3>
                                <p class="store-card__address">
                                    {icon("map-pin")}
                                    {move || highlight_matches(&address, &query.get())}
                                </p>
                                <p class="store-card__hours">{icon("clock")} {store.opening_hours.clone()}</p>
                                <a
                                    class="store-card__directions"
                                    href=map_url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    on:click=|ev| ev.stop_propagation()
                                >
                                    {icon("external")}
                                    "Directions"
                                </a>
                            </article>
                        }
                    }
                />
            </div>

            <Show when=move || !state.loading.get() && visible.with(|v| v.is_empty())>
                <div class="empty-state">
                    <p>"No stores match your search."</p>
                </div>
            </Show>

            <DetailModal pane=state.pane() on_close=Callback::new(move |_| state.clear_selection()) />
        </div>
    }
}
