use crate::routes::routes::AppRoutes;
use crate::shared::submitter::SubmitMode;
use crate::shared::url_state;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Transport for every form on the site, fixed for the session
    let mode = SubmitMode::from_params(&url_state::read_params());
    if mode == SubmitMode::Simulated {
        log::info!("demo mode: forms are simulated, nothing is sent");
    }
    provide_context(mode);

    view! {
        <AppRoutes />
    }
}
