pub mod footer;
pub mod header;

use leptos::prelude::*;

/// Site chrome around the routed page:
/// ```text
/// +------------------------------+
/// |            Header            |
/// +------------------------------+
/// |            page              |
/// +------------------------------+
/// |            Footer            |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <div class="app-main">{children()}</div>
            <footer::Footer />
        </div>
    }
}
