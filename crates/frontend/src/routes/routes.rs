use crate::layout::Shell;
use crate::pages::careers::CareersPage;
use crate::pages::contact::ContactPage;
use crate::pages::home::HomePage;
use crate::pages::news::NewsPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::stores::StoresPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/careers") view=CareersPage />
                    <Route path=path!("/stores") view=StoresPage />
                    <Route path=path!("/news") view=NewsPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </Shell>
        </Router>
    }
}
