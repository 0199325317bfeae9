use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// Пункты главного меню: (путь, подпись)
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/careers", "Careers"),
    ("/stores", "Stores"),
    ("/news", "News"),
    ("/contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <header data-zone="header" class="header">
            <div class="container header__content">
                <a class="header__brand" href="/">
                    <span class="header__logo">"S"</span>
                    <span class="header__title">"Sahra Group"</span>
                </a>
                <button
                    class="header__menu-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|o| *o = !*o)
                >
                    {move || if menu_open.get() { icon("x") } else { icon("menu") }}
                </button>
                <nav class=move || if menu_open.get() { "header__nav header__nav--open" } else { "header__nav" }>
                    {NAV_ITEMS
                        .iter()
                        .map(|(href, label)| view! {
                            <A href=*href exact=true on:click=move |_| menu_open.set(false)>
                                {*label}
                            </A>
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
