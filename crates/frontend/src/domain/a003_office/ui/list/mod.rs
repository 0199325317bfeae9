use crate::shared::components::{DetailModal, FilterPanel};
use crate::shared::icons::icon;
use crate::shared::state::RecordListState;
use contracts::domain::a003_office::aggregate::Office;
use leptos::prelude::*;

/// Office locator on the Contact page; headquarters first
#[component]
pub fn OfficeList() -> impl IntoView {
    let state = RecordListState::<Office>::new();
    state.load("/api/content/offices");

    let visible = state.visible();
    let ordered = move || {
        let mut offices = visible.get();
        // stable sort: HQ first, otherwise content order
        offices.sort_by_key(|o| !o.is_headquarters);
        offices
    };

    view! {
        <div class="office-list">
            <FilterPanel state=state search_placeholder="Search offices..." collapsed=true />

            <div class="card-grid">
                <For
                    each=ordered
                    key=|office| office.id.clone()
                    children=move |office| {
                        let id = office.id.clone();
                        let phone_href = format!("tel:{}", office.phone.replace(' ', ""));
                        let mail_href = format!("mailto:{}", office.email);
                        view! {
                            <article class="office-card" on:click=move |_| state.select(id.clone())>
                                {office.is_headquarters.then(|| view! {
                                    <span class="badge badge--primary">"Headquarters"</span>
                                })}
                                <h3 class="office-card__name">{office.name.clone()}</h3>
                                <p>{icon("map-pin")} {format!("{}, {}", office.city, office.country)}</p>
                                <p class="office-card__address">{office.address.clone()}</p>
                                <p>
                                    {icon("phone")}
                                    <a href=phone_href on:click=|ev| ev.stop_propagation()>{office.phone.clone()}</a>
                                </p>
                                <p>
                                    {icon("mail")}
                                    <a href=mail_href on:click=|ev| ev.stop_propagation()>{office.email.clone()}</a>
                                </p>
                            </article>
                        }
                    }
                />
            </div>

            <DetailModal pane=state.pane() on_close=Callback::new(move |_| state.clear_selection()) />
        </div>
    }
}
