use crate::layout::header::header::NAV_ITEMS;
use crate::shared::api_utils::api_url;
use crate::shared::submitter::SubmitMode;
use gloo_net::http::Request;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ServerStatus {
    Online,
    Offline,
    Checking,
}

impl ServerStatus {
    fn display_text(&self) -> &'static str {
        match self {
            ServerStatus::Online => "Online",
            ServerStatus::Offline => "Offline",
            ServerStatus::Checking => "Checking...",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ServerStatus::Online => "status-online",
            ServerStatus::Offline => "status-offline",
            ServerStatus::Checking => "status-checking",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let status = RwSignal::new(ServerStatus::Checking);
    let demo = use_context::<SubmitMode>() == Some(SubmitMode::Simulated);

    // Проверяем backend один раз при монтировании
    Effect::new(move |_| {
        spawn_local(async move {
            let online = ping_server().await;
            status.set(if online {
                ServerStatus::Online
            } else {
                ServerStatus::Offline
            });
        });
    });

    let year = chrono::Utc::now().format("%Y").to_string();

    view! {
        <footer data-zone="footer" class="footer">
            <div class="container footer__grid">
                <div class="footer__about">
                    <strong>"Sahra Group"</strong>
                    <p>"A diversified group serving communities through retail, hospitality, catering, logistics and real estate."</p>
                </div>
                <nav class="footer__nav">
                    {NAV_ITEMS
                        .iter()
                        .map(|(href, label)| view! { <a href=*href>{*label}</a> })
                        .collect_view()}
                </nav>
            </div>
            <div class="container footer__bottom">
                <span>{format!("© {} Sahra Group", year)}</span>
                <span class="status-bar">
                    {demo.then(|| view! { <span class="badge">"Demo mode"</span> })}
                    <span class=move || status.get().css_class()>
                        "Server: " {move || status.get().display_text()}
                    </span>
                </span>
            </div>
        </footer>
    }
}

async fn ping_server() -> bool {
    match Request::get(&api_url("/health")).send().await {
        Ok(response) => response.ok(),
        Err(e) => {
            log::debug!("health check failed: {}", e);
            false
        }
    }
}
