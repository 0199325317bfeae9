use crate::shared::components::{DetailModal, FilterPanel};
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use crate::shared::state::RecordListState;
use contracts::domain::a004_news::aggregate::NewsArticle;
use leptos::prelude::*;

/// Newsroom cards, newest first (the API already sorts them).
///
/// With `latest` set the list is a teaser: no filter panel, first N articles.
#[component]
pub fn NewsList(#[prop(optional)] latest: Option<usize>) -> impl IntoView {
    let state = RecordListState::<NewsArticle>::new();
    state.load("/api/content/news");

    let visible = state.visible();
    let shown = move || {
        let mut articles = visible.get();
        if let Some(n) = latest {
            articles.truncate(n);
        }
        articles
    };
    let query = Signal::derive(move || state.criteria.with(|c| c.query().to_string()));

    view! {
        <div class="news-list">
            {latest.is_none().then(|| view! {
                <FilterPanel state=state search_placeholder="Search news..." />
            })}

            <div class="card-grid">
                <For
                    each=shown
                    key=|article| article.id.clone()
                    children=move |article| {
                        let id = article.id.clone();
                        let title = article.title.clone();
                        let accent = format!("--card-accent: {}", article.category.accent());
                        view! {
                            <article class="news-card" style=accent on:click=move |_| state.select(id.clone())>
                                {article.image_url.clone().map(|src| view! {
                                    <img class="news-card__image" src=src alt="" loading="lazy" />
                                })}
                                <div class="news-card__body">
                                    <div class="news-card__meta">
                                        <span class="news-card__category">
                                            {icon(article.category.icon())}
                                            {article.category.label()}
                                        </span>
                                        <time datetime=article.published_at.to_string()>
                                            {article.published_at.format("%d %b %Y").to_string()}
                                        </time>
                                    </div>
                                    <h3 class="news-card__title">
                                        {move || highlight_matches(&title, &query.get())}
                                    </h3>
                                    <p class="news-card__summary">{article.summary.clone()}</p>
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
