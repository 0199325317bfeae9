use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Overlay + dialog surface. Closes on overlay click and on Escape.
///
/// The frame renders no header: detail and form screens bring their own.
#[component]
pub fn ModalFrame(
    /// Called when the modal should close
    on_close: Callback<()>,
    /// Close when clicking on the overlay (default: true)
    #[prop(optional)]
    close_on_overlay: Option<bool>,
    /// Extra class for the dialog surface
    #[prop(optional, into)]
    modal_class: Option<String>,
    /// Accessible name of the dialog
    #[prop(optional, into)]
    label: Option<String>,
    children: Children,
) -> impl IntoView {
    let close_on_overlay = close_on_overlay.unwrap_or(true);
    let overlay_mouse_down = RwSignal::new(false);

    // Defer close to next tick: the overlay is removed during its own event dispatch
    let close_deferred = move || {
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Press and release both on the overlay: text selection dragged outside must not close
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close =
            close_on_overlay && overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            close_deferred();
        }
    };

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            close_deferred();
        }
    });
    on_cleanup(move || escape.remove());

    let modal_class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div
                class=modal_class
                role="dialog"
                aria-modal="true"
                aria-label=label
                on:click=move |ev: ev::MouseEvent| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}
