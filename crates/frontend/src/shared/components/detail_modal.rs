//! DetailModal — renders a `DetailPane` inside `ModalFrame`.
//!
//! Any record type works: the pane is already a flat list of labelled fields.

use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::shared::detail::{DetailField, DetailPane, DetailValue};
use leptos::prelude::*;

#[component]
pub fn DetailModal(
    #[prop(into)] pane: Signal<DetailPane>,
    on_close: Callback<()>,
    /// Extra buttons under the fields (e.g. "Apply")
    #[prop(optional)]
    actions: Option<ChildrenFn>,
) -> impl IntoView {
    let actions = StoredValue::new(actions);

    move || match pane.get() {
        DetailPane::Closed => view! { <></> }.into_any(),
        DetailPane::Open {
            title,
            subtitle,
            fields,
        } => view! {
            <ModalFrame on_close=on_close modal_class="detail-modal" label=title.clone()>
                <div class="detail-modal__header">
                    <div>
                        <h2 class="detail-modal__title">{title}</h2>
                        {subtitle.map(|s| view! { <p class="detail-modal__subtitle">{s}</p> })}
                    </div>
                    <button
                        class="detail-modal__close"
                        title="Close"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
                <dl class="detail-modal__fields">
                    {fields.into_iter().map(detail_field).collect_view()}
                </dl>
                {actions
                    .with_value(|a| a.clone())
                    .map(|a| view! { <div class="detail-modal__actions">{a()}</div> })}
            </ModalFrame>
        }
        .into_any(),
    }
}

fn detail_field(field: DetailField) -> impl IntoView {
    let value = match field.value {
        DetailValue::Text { text } => view! { <dd>{text}</dd> }.into_any(),
        DetailValue::Link { text, href } => {
            let external = href.starts_with("http");
            view! {
                <dd>
                    <a
                        href=href
                        target=if external { Some("_blank") } else { None }
                        rel=if external { Some("noopener noreferrer") } else { None }
                    >
                        {text}
                    </a>
                </dd>
            }
            .into_any()
        }
        DetailValue::List { items } => view! {
            <dd>
                <ul class="detail-modal__list">
                    {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                </ul>
            </dd>
        }
        .into_any(),
    };

    view! {
        <div class="detail-modal__field">
            <dt>{field.label}</dt>
            {value}
        </div>
    }
}
