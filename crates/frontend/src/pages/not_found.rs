use crate::shared::page_frame::{PageFrame, PAGE_CAT_LANDING};
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageFrame page_id="not_found--landing" category=PAGE_CAT_LANDING>
            <div class="container empty-state">
                <h1>"Page not found"</h1>
                <a class="button button--primary" href="/">"Back to home"</a>
            </div>
        </PageFrame>
    }
}
