use crate::domain::a004_news::ui::list::NewsList;
use crate::domain::a005_division::ui::list::DivisionGrid;
use crate::domain::a006_partner::ui::list::PartnerStrip;
use crate::shared::animation::provide_animation_controller;
use crate::shared::api_utils::get_json;
use crate::shared::components::hero_carousel::{HeroCarousel, HeroSlide};
use crate::shared::components::stat_counter::StatCounter;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LANDING};
use contracts::shared::site_content::SiteStat;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

fn hero_slides() -> Vec<HeroSlide> {
    vec![
        HeroSlide {
            title: "Building everyday life across the region",
            subtitle: "Retail, hospitality, catering, logistics and real estate under one group.",
            cta_label: "Discover our businesses",
            cta_href: "#businesses",
        },
        HeroSlide {
            title: "Grow your career with us",
            subtitle: "Thousands of colleagues, one shared standard of service.",
            cta_label: "See open positions",
            cta_href: "/careers",
        },
        HeroSlide {
            title: "A store near you",
            subtitle: "Find branches, opening hours and directions.",
            cta_label: "Find a store",
            cta_href: "/stores",
        },
    ]
}

#[component]
pub fn HomePage() -> impl IntoView {
    // Одни часы на счётчики, карусель и бегущую строку; останавливаются при уходе со страницы
    provide_animation_controller();

    let stats = RwSignal::new(Vec::<SiteStat>::new());
    spawn_local(async move {
        match get_json::<Vec<SiteStat>>("/api/content/stats").await {
            Ok(items) => stats.set(items),
            Err(e) => log::warn!("stats: {}", e),
        }
    });

    view! {
        <PageFrame page_id="home--landing" category=PAGE_CAT_LANDING>
            <HeroCarousel slides=hero_slides() />

            <section class="section stats">
                <div class="container stats__grid">
                    <For
                        each=move || stats.get()
                        key=|stat| stat.label.clone()
                        children=|stat| view! { <StatCounter stat=stat /> }
                    />
                </div>
            </section>

            <section class="section" id="businesses">
                <div class="container">
                    <h2 class="section__title">"Our businesses"</h2>
                    <DivisionGrid />
                </div>
            </section>

            <PartnerStrip />

            <section class="section">
                <div class="container">
                    <div class="section__header">
                        <h2 class="section__title">"Latest news"</h2>
                        <a class="section__link" href="/news">"All news"</a>
                    </div>
                    <NewsList latest=3 />
                </div>
            </section>
        </PageFrame>
    }
}
