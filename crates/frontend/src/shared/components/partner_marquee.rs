use crate::shared::animation::use_animation;
use contracts::domain::a006_partner::aggregate::Partner;
use contracts::shared::animation::marquee_offset;
use leptos::prelude::*;

const SPEED_PX_PER_SEC: f64 = 40.0;
/// Ширина одной плитки логотипа вместе с отступом (см. `.marquee__item` в css)
const ITEM_WIDTH_PX: f64 = 200.0;

/// Endless logo strip. The list is rendered twice so the loop has no seam.
#[component]
pub fn PartnerMarquee(#[prop(into)] partners: Signal<Vec<Partner>>) -> impl IntoView {
    let clock = use_animation();

    let transform = move || {
        let track_width = partners.with(|p| p.len()) as f64 * ITEM_WIDTH_PX;
        let offset = clock
            .map(|c| marquee_offset(c.elapsed_ms().get(), SPEED_PX_PER_SEC, track_width))
            .unwrap_or(0.0);
        format!("transform: translateX(-{offset:.1}px)")
    };

    let items = move || {
        let list = partners.get();
        list.iter()
            .chain(list.iter())
            .map(|partner| {
                let logo = view! {
                    <img class="marquee__logo" src=partner.logo_url.clone() alt=partner.name.clone() />
                };
                let tile = match partner.website.clone() {
                    Some(href) => view! {
                        <a href=href target="_blank" rel="noopener noreferrer" title=partner.name.clone()>
                            {logo}
                        </a>
                    }
                    .into_any(),
                    None => logo.into_any(),
                };
                view! { <div class="marquee__item">{tile}</div> }
            })
            .collect_view()
    };

    view! {
        <div class="marquee">
            <div class="marquee__track" style=transform>
                {items}
            </div>
        </div>
    }
}
