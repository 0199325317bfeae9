use crate::shared::animation::use_animation;
use crate::shared::icons::icon;
use contracts::shared::animation::Carousel;
use leptos::prelude::*;

/// Интервал автопрокрутки слайдов
const SLIDE_INTERVAL_MS: u64 = 6000;

#[derive(Debug, Clone, PartialEq)]
pub struct HeroSlide {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta_label: &'static str,
    pub cta_href: &'static str,
}

/// Full-width hero with auto-advancing slides, arrows and dots.
///
/// Advances on the page clock; manual navigation restarts the interval.
#[component]
pub fn HeroCarousel(slides: Vec<HeroSlide>) -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(slides.len()));
    let slides = StoredValue::new(slides);
    // Момент последнего переключения по часам страницы
    let last_switch = StoredValue::new(0u64);
    let clock = use_animation();

    if let Some(clock) = clock {
        let elapsed = clock.elapsed_ms();
        Effect::new(move |_| {
            let now = elapsed.get();
            if now.saturating_sub(last_switch.get_value()) >= SLIDE_INTERVAL_MS {
                last_switch.set_value(now);
                carousel.update(|c| {
                    c.next();
                });
            }
        });
    }

    let restart_interval = move || {
        if let Some(clock) = clock {
            last_switch.set_value(clock.elapsed_ms().get_untracked());
        }
    };
    let prev = move |_| {
        restart_interval();
        carousel.update(|c| {
            c.prev();
        });
    };
    let next = move |_| {
        restart_interval();
        carousel.update(|c| {
            c.next();
        });
    };

    let slide_views = move || {
        let current = carousel.with(|c| c.current());
        slides.with_value(|all| {
            all.iter()
                .enumerate()
                .map(|(i, slide)| {
                    let class = if i == current {
                        "hero__slide hero__slide--active"
                    } else {
                        "hero__slide"
                    };
                    view! {
                        <div class=class aria-hidden=(i != current).to_string()>
                            <h1 class="hero__title">{slide.title}</h1>
                            <p class="hero__subtitle">{slide.subtitle}</p>
                            <a class="button button--primary hero__cta" href=slide.cta_href>
                                {slide.cta_label}
                            </a>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    let dots = move || {
        let (len, current) = carousel.with(|c| (c.len(), c.current()));
        (0..len)
            .map(|i| {
                let class = if i == current { "hero__dot hero__dot--active" } else { "hero__dot" };
                view! {
                    <button
                        class=class
                        title=format!("Slide {}", i + 1)
                        on:click=move |_| {
                            restart_interval();
                            carousel.update(|c| {
                                c.go_to(i);
                            });
                        }
                    ></button>
                }
            })
            .collect_view()
    };

    view! {
        <section class="hero">
            <div class="hero__slides">{slide_views}</div>
            <Show when=move || carousel.with(|c| c.len() > 1)>
                <button class="hero__arrow hero__arrow--prev" title="Previous" on:click=prev>
                    {icon("chevron-left")}
                </button>
                <button class="hero__arrow hero__arrow--next" title="Next" on:click=next>
                    {icon("chevron-right")}
                </button>
                <div class="hero__dots">{dots}</div>
            </Show>
        </section>
    }
}
