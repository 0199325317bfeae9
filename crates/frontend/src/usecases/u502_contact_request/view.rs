use super::view_model::ContactViewModel;
use crate::shared::components::FormRow;
use crate::shared::icons::icon;
use crate::shared::submitter::SubmitMode;
use crate::shared::url_state;
use contracts::shared::form_capture::FormPhase;
use contracts::usecases::u502_contact_request::{ContactField as F, ContactSubject};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ContactForm() -> impl IntoView {
    let mode = use_context::<SubmitMode>().unwrap_or(SubmitMode::Http);
    let subject = url_state::read_params()
        .get("subject")
        .and_then(|key| ContactSubject::from_key(key));
    let vm = ContactViewModel::new(subject, mode);
    let form = vm.form;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.submit();
    };

    let success = move || {
        view! {
            <div class="form-result form-result--success">
                {icon("check")}
                <h3>"Thank you for reaching out"</h3>
                <p>
                    "Your message was sent (reference "
                    <strong>{move || form.receipt_reference().unwrap_or_default()}</strong>
                    "). We reply within two business days."
                </p>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.start_over_command()>
                    "Send another message"
                </Button>
            </div>
        }
    };

    let form_view = move || {
        view! {
            <form class="details-form contact-form" on:submit=on_submit novalidate=true>
                <div class="form-grid">
                    <FormRow label="Full name" input_id="contact-name" required=true error=vm.error(F::FullName)>
                        <input
                            type="text"
                            id="contact-name"
                            autocomplete="name"
                            prop:value=move || form.read(|f| f.full_name.clone())
                            on:input=move |ev| {
                                let v = event_target_value(&ev);
                                form.edit(|f| f.full_name = v);
                            }
                        />
                    </FormRow>
                    <FormRow label="Company" input_id="contact-company" error=vm.error(F::Company)>
                        <input
                            type="text"
                            id="contact-company"
                            autocomplete="organization"
                            prop:value=move || form.read(|f| f.company.clone())
                            on:input=move |ev| {
                                let v = event_target_value(&ev);
                                form.edit(|f| f.company = v);
                            }
                        />
                    </FormRow>
                    <FormRow label="Email" input_id="contact-email" required=true error=vm.error(F::Email)>
                        <input
                            type="email"
                            id="contact-email"
                            autocomplete="email"
                            prop:value=move || form.read(|f| f.email.clone())
                            on:input=move |ev| {
                                let v = event_target_value(&ev);
                                form.edit(|f| f.email = v);
                            }
                        />
                    </FormRow>
                    <FormRow label="Phone" input_id="contact-phone" required=true error=vm.error(F::Phone)>
                        <input
                            type="tel"
                            id="contact-phone"
                            autocomplete="tel"
                            prop:value=move || form.read(|f| f.phone.clone())
                            on:input=move |ev| {
                                let v = event_target_value(&ev);
                                form.edit(|f| f.phone = v);
                            }
                        />
                    </FormRow>
                </div>
                <div class="form-group">
                    <label for="contact-subject">"Subject"</label>
                    <select
                        id="contact-subject"
                        prop:value=move || form.read(|f| f.subject.key())
                        on:change=move |ev| vm.set_subject(&event_target_value(&ev))
                    >
                        {ContactSubject::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.key()>{s.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <FormRow label="Message" input_id="contact-message" required=true error=vm.error(F::Message)>
                    <textarea
                        id="contact-message"
                        rows="6"
                        prop:value=move || form.read(|f| f.message.clone())
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.edit(|f| f.message = v);
                        }
                    ></textarea>
                </FormRow>

                {move || {
                    (form.phase() == FormPhase::SubmitError)
                        .then(|| form.last_error())
                        .flatten()
                        .map(|e| {
                            view! {
                                <div class="warning-box warning-box--error" role="alert">
                                    {icon("alert")}
                                    <span class="warning-box__text">{e}</span>
                                </div>
                            }
                        })
                }}

                <div class="details-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        button_type=ButtonType::Submit
                        disabled=Signal::derive(move || form.is_submitting())
                    >
                        {move || if form.is_submitting() {
                            view! { <Spinner size=SpinnerSize::Tiny /> " Sending..." }.into_any()
                        } else {
                            view! { {icon("mail")} " Send message" }.into_any()
                        }}
                    </Button>
                </div>
            </form>
        }
    };

    view! {
        <Show when=move || vm.is_done() fallback=form_view>
            {success}
        </Show>
    }
}
