use crate::domain::a001_job::ui::list::JobList;
use crate::shared::components::PageHeader;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use leptos::prelude::*;

#[component]
pub fn CareersPage() -> impl IntoView {
    view! {
        <PageFrame page_id="a001_job--list" category=PAGE_CAT_LIST>
            <PageHeader
                eyebrow="Careers"
                title="Join our team"
                lead="Explore open positions across our divisions and apply online."
            />
            <div class="container">
                <JobList />
            </div>
        </PageFrame>
    }
}
