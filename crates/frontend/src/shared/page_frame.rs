//! PageFrame — root wrapper of every routed page.
//!
//! Sets `id` (`"{section}--{category}"`, e.g. `"a001_job--list"`) and
//! `data-page-category` on the root element, so a page found in the DOM
//! inspector leads straight to its module.

use leptos::prelude::*;

/// Landing / marketing page built from free-form sections
pub const PAGE_CAT_LANDING: &str = "landing";

/// Filterable list with a detail modal
pub const PAGE_CAT_LIST: &str = "list";

/// Page whose main content is a form
pub const PAGE_CAT_USECASE: &str = "usecase";

#[component]
pub fn PageFrame(
    /// HTML id in format `{section}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        PAGE_CAT_LANDING => "page page--landing",
        PAGE_CAT_USECASE => "page page--usecase",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <main id=page_id class=full_class data-page-category=category>
            {children()}
        </main>
    }
}
