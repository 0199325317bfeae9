use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::state::list_state::RecordListState;
use contracts::domain::common::{CategoryField, Record};
use contracts::shared::detail::DetailView;
use leptos::prelude::*;
use serde::de::DeserializeOwned;

/// FilterPanel - search box, one select per category field, active filter chips
///
/// Criteria live in `RecordListState`; the panel only edits them.
#[component]
pub fn FilterPanel<R>(
    state: RecordListState<R>,
    /// Placeholder of the search box
    #[prop(optional, into)]
    search_placeholder: String,
    /// Start collapsed (mobile-friendly pages)
    #[prop(optional)]
    collapsed: bool,
) -> impl IntoView
where
    R: Record + DetailView + DeserializeOwned + Send + Sync + 'static,
{
    let is_expanded = RwSignal::new(!collapsed);
    let active_filters_count = state.active_filter_count();
    let visible = state.visible();
    let total = state.total();
    let query = Signal::derive(move || state.criteria.with(|c| c.query().to_string()));

    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    let selects = R::Field::ALL
        .iter()
        .copied()
        .map(|field| view! { <FieldSelect state=state field=field /> })
        .collect_view();

    let tags = move || {
        state.criteria.with(|c| {
            c.active_constraints()
                .map(|(field, value)| (field, format!("{}: {}", field.label(), value)))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left" on:click=toggle_expanded>
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>{icon("chevron-right")}</span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        if count > 0 {
                            view! { <span class="badge badge--primary">{count}</span> }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
                <div class="filter-panel-header__right">
                    <span class="filter-panel__count">
                        {move || {
                            format!("{} of {}", visible.with(|v| v.len()), total.get())
                        }}
                    </span>
                    <button
                        class="button button--ghost"
                        disabled=move || active_filters_count.get() == 0
                        on:click=move |_| state.reset_filters()
                    >
                        "Reset"
                    </button>
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    <SearchInput
                        value=query
                        on_change=Callback::new(move |q: String| state.set_query(q))
                        placeholder=search_placeholder
                    />
                    <div class="filter-panel__selects">{selects}</div>
                    <div class="filter-panel__tags">
                        <For
                            each=tags
                            key=|(field, label)| (*field, label.clone())
                            children=move |(field, label)| {
                                view! {
                                    <FilterTag
                                        label=label
                                        on_remove=Callback::new(move |_| {
                                            state.set_constraint(field, String::new())
                                        })
                                    />
                                }
                            }
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}

/// `<select>` over the distinct values of one field; the empty option means "all"
#[component]
fn FieldSelect<R>(state: RecordListState<R>, field: R::Field) -> impl IntoView
where
    R: Record + DetailView + DeserializeOwned + Send + Sync + 'static,
{
    let options = state.facet(field);
    let current = move || state.criteria.with(|c| c.constraint(field).to_string());

    view! {
        <label class="filter-select">
            <span class="filter-select__label">{field.label()}</span>
            <select
                name=field.key()
                prop:value=current
                on:change=move |ev| state.set_constraint(field, event_target_value(&ev))
            >
                <option value="">"All"</option>
                {move || {
                    let selected = current();
                    options
                        .get()
                        .into_iter()
                        .map(|value| {
                            let is_selected = value == selected;
                            view! {
                                <option value=value.clone() selected=is_selected>
                                    {value.clone()}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}

/// FilterTag component - individual filter tag/chip
#[component]
pub fn FilterTag(
    /// Tag label
    #[prop(into)]
    label: String,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                title="Remove filter"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}
