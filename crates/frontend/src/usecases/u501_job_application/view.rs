use super::view_model::JobApplicationViewModel;
use crate::shared::components::FormRow;
use crate::shared::icons::icon;
use crate::shared::submitter::SubmitMode;
use contracts::domain::a001_job::aggregate::JobId;
use contracts::shared::form_capture::FormPhase;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_job_application::{JobApplicationField as F, SubmitJobApplication};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
pub fn JobApplicationForm(
    /// Vacancy the visitor applies to; `None` is an open application
    job_id: Option<JobId>,
    job_title: Option<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let mode = use_context::<SubmitMode>().unwrap_or(SubmitMode::Http);
    let vm = JobApplicationViewModel::new(job_id, mode);
    let form = vm.form;

    let heading = match job_title {
        Some(title) => format!("Apply: {}", title),
        None => SubmitJobApplication::display_name().to_string(),
    };

    let on_file = move |ev: leptos::ev::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        vm.attach_command(file);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    let success = move || {
        view! {
            <div class="form-result form-result--success">
                {icon("check")}
                <h3>"Application received"</h3>
                <p>
                    "Reference "
                    <strong>{move || form.receipt_reference().unwrap_or_default()}</strong>
                    ". Our recruitment team will contact you."
                </p>
                <Flex gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.start_over_command()
                    >
                        "Submit another"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| on_close.run(())>
                        "Close"
                    </Button>
                </Flex>
            </div>
        }
    };

    let form_view = move || {
        view! {
            <form class="details-form" on:submit=on_submit novalidate=true>
                <FormRow label="Full name" input_id="apply-name" required=true error=vm.error(F::FullName)>
                    <input
                        type="text"
                        id="apply-name"
                        autocomplete="name"
                        prop:value=move || form.read(|f| f.full_name.clone())
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.edit(|f| f.full_name = v);
                        }
                    />
                </FormRow>
                <div class="form-grid">
                    <FormRow label="Email" input_id="apply-email" required=true error=vm.error(F::Email)>
                        <input
                            type="email"
                            id="apply-email"
                            autocomplete="email"
                            prop:value=move || form.read(|f| f.email.clone())
                            on:input=move |ev| {
                                let v = event_target_value(&ev);
                                form.edit(|f| f.email = v);
                            }
                        />
                    </FormRow>
                    <FormRow label="Phone" input_id="apply-phone" required=true error=vm.error(F::Phone)>
                        <input
                            type="tel"
                            id="apply-phone"
                            autocomplete="tel"
                            prop:value=move || form.read(|f| f.phone.clone())
                            on:input=move |ev| {
                                let v = event_target_value(&ev);
                                form.edit(|f| f.phone = v);
                            }
                        />
                    </FormRow>
                </div>
                <FormRow label="Cover letter" input_id="apply-letter" required=true error=vm.error(F::CoverLetter)>
                    <textarea
                        id="apply-letter"
                        rows="6"
                        prop:value=move || form.read(|f| f.cover_letter.clone())
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.edit(|f| f.cover_letter = v);
                        }
                    ></textarea>
                </FormRow>
                <FormRow label="Resume" input_id="apply-resume" required=true error=vm.error(F::Resume)>
                    <label class="file-drop" for="apply-resume">
                        {icon("upload")}
                        <span>
                            {move || {
                                if vm.reading_file.get() {
                                    "Reading file...".to_string()
                                } else {
                                    vm.resume_name()
                                        .unwrap_or_else(|| "PDF, DOC or DOCX, up to 5 MB".to_string())
                                }
                            }}
                        </span>
                    </label>
                    <input
                        type="file"
                        id="apply-resume"
                        class="file-drop__input"
                        accept=".pdf,.doc,.docx"
                        on:change=on_file
                    />
                    {move || vm.file_error.get().map(|e| view! { <div class="form-group__error">{e}</div> })}
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
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        button_type=ButtonType::Submit
                        disabled=Signal::derive(move || vm.submit_disabled())
                    >
                        {move || if form.is_submitting() {
                            view! { <Spinner size=SpinnerSize::Tiny /> " Sending..." }.into_any()
                        } else {
                            view! { "Send application" }.into_any()
                        }}
                    </Button>
                </div>
            </form>
        }
    };

    view! {
        <div class="details-container job-application">
            <div class="details-header">
                <h3>{heading}</h3>
                <button class="detail-modal__close" title="Close" on:click=move |_| on_close.run(())>
                    {icon("x")}
                </button>
            </div>
            <Show when=move || vm.is_done() fallback=form_view>
                {success}
            </Show>
        </div>
    }
}
