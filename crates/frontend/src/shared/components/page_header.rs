use leptos::prelude::*;

/// Banner at the top of every inner page: small caption, title, lead text
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    /// Caption above the title ("Careers", "Newsroom")
    #[prop(optional, into)]
    eyebrow: Option<String>,
    #[prop(optional, into)] lead: Option<String>,
    /// Extra content under the lead (counters, buttons)
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <div class="container">
                {eyebrow.map(|e| view! { <span class="page-header__eyebrow">{e}</span> })}
                <h1 class="page-header__title">{title}</h1>
                {lead.map(|l| view! { <p class="page-header__lead">{l}</p> })}
                {children.map(|c| view! { <div class="page-header__extra">{c()}</div> })}
            </div>
        </header>
    }
}
