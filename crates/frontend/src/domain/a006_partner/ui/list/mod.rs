use crate::shared::api_utils::get_json;
use crate::shared::components::partner_marquee::PartnerMarquee;
use contracts::domain::a006_partner::aggregate::Partner;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// "Trusted by" strip on the home page
#[component]
pub fn PartnerStrip() -> impl IntoView {
    let partners = RwSignal::new(Vec::<Partner>::new());

    spawn_local(async move {
        match get_json::<Vec<Partner>>("/api/content/partners").await {
            Ok(items) => partners.set(items),
            // декоративный блок: без партнёров просто не показываем
            Err(e) => log::warn!("partners: {}", e),
        }
    });

    view! {
        <Show when=move || partners.with(|p| !p.is_empty())>
            <section class="section section--muted partners">
                <div class="container">
                    <h2 class="section__title">"Our partners"</h2>
                </div>
                <PartnerMarquee partners=partners />
            </section>
        </Show>
    }
}
