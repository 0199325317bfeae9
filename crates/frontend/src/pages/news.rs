use crate::domain::a004_news::ui::list::NewsList;
use crate::shared::components::PageHeader;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use leptos::prelude::*;

#[component]
pub fn NewsPage() -> impl IntoView {
    view! {
        <PageFrame page_id="a004_news--list" category=PAGE_CAT_LIST>
            <PageHeader eyebrow="Newsroom" title="News & updates" />
            <div class="container">
                <NewsList />
            </div>
        </PageFrame>
    }
}
