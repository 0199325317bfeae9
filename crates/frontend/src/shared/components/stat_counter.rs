use crate::shared::animation::use_animation;
use contracts::shared::animation::counter_frame;
use contracts::shared::format::format_stat;
use contracts::shared::site_content::SiteStat;
use leptos::prelude::*;

/// Длительность счёта от нуля до значения
const COUNT_UP_MS: u64 = 2000;

/// Key figure that counts up from zero on the page clock.
/// Without an animation controller the final value is shown at once.
#[component]
pub fn StatCounter(stat: SiteStat) -> impl IntoView {
    let SiteStat {
        label,
        value,
        suffix,
    } = stat;
    let clock = use_animation();

    let text = move || {
        let shown = match clock {
            Some(c) => counter_frame(value, c.elapsed_ms().get(), COUNT_UP_MS),
            None => value,
        };
        format_stat(shown, &suffix)
    };

    view! {
        <div class="stat-counter">
            <div class="stat-counter__value">{text}</div>
            <div class="stat-counter__label">{label}</div>
        </div>
    }
}
