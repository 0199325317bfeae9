use crate::domain::a003_office::ui::list::OfficeList;
use crate::shared::components::PageHeader;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_USECASE};
use crate::usecases::u502_contact_request::ContactForm;
use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <PageFrame page_id="u502_contact_request--usecase" category=PAGE_CAT_USECASE>
            <PageHeader
                eyebrow="Contact"
                title="Get in touch"
                lead="Questions, partnerships or press enquiries: we are happy to help."
            />
            <div class="container contact-layout">
                <section class="contact-layout__form">
                    <h2 class="section__title">"Send us a message"</h2>
                    <ContactForm />
                </section>
                <section class="contact-layout__offices">
                    <h2 class="section__title">"Our offices"</h2>
                    <OfficeList />
                </section>
            </div>
        </PageFrame>
    }
}
