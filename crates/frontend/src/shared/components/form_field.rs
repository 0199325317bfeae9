use crate::shared::icons::icon;
use leptos::prelude::*;

/// Label, input slot and the field's validation message
#[component]
pub fn FormRow(
    #[prop(into)] label: String,
    /// `for` of the label
    #[prop(into)]
    input_id: String,
    #[prop(optional)] required: bool,
    #[prop(into)] error: Signal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form-group" class=("form-group--invalid", move || error.with(|e| e.is_some()))>
            <label for=input_id>
                {label}
                {required.then(|| view! { <span class="form-group__required">"*"</span> })}
            </label>
            {children()}
            {move || {
                error
                    .get()
                    .map(|msg| {
                        view! {
                            <div class="form-group__error" role="alert">
                                {icon("alert")}
                                <span>{msg}</span>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
