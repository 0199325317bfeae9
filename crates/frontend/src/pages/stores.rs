use crate::domain::a002_store::ui::list::StoreList;
use crate::shared::components::PageHeader;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use leptos::prelude::*;

#[component]
pub fn StoresPage() -> impl IntoView {
    view! {
        <PageFrame page_id="a002_store--list" category=PAGE_CAT_LIST>
            <PageHeader
                eyebrow="Store locator"
                title="Find a store"
                lead="Search by name or address, or narrow down by city and brand."
            />
            <div class="container">
                <StoreList />
            </div>
        </PageFrame>
    }
}
