use crate::shared::components::{DetailModal, FilterPanel};
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::state::RecordListState;
use crate::usecases::u501_job_application::JobApplicationForm;
use contracts::domain::a001_job::aggregate::{Job, JobId};
use leptos::prelude::*;
use std::sync::Arc;

/// Что открыто в форме отклика
#[derive(Debug, Clone, PartialEq)]
enum ApplyTarget {
    Job { id: JobId, title: String },
    Open,
}

/// Open positions: filters, cards, detail modal, application form
#[component]
pub fn JobList() -> impl IntoView {
    let state = RecordListState::<Job>::new();
    state.load("/api/content/jobs");

    let visible = state.visible();
    let total = state.total();
    let query = Signal::derive(move || state.criteria.with(|c| c.query().to_string()));
    let applying = RwSignal::new(None::<ApplyTarget>);

    let apply_to_selected = move || {
        if let Some(job) = state.selected().get_untracked() {
            state.clear_selection();
            applying.set(Some(ApplyTarget::Job {
                id: job.id,
                title: job.title,
            }));
        }
    };

    let apply_action: ChildrenFn = Arc::new(move || {
        view! {
            <button class="button button--primary" on:click=move |_| apply_to_selected()>
                {icon("briefcase")}
                "Apply for this position"
            </button>
        }
        .into_any()
    });

    view! {
        <div class="job-list">
            <FilterPanel state=state search_placeholder="Search by job title..." />

            {move || state.error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    {icon("alert")}
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <Show when=move || state.loading.get()>
                <div class="loading">"Loading positions..."</div>
            </Show>

            <div class="card-list">
                <For
                    each=move || visible.get()
                    key=|job| job.id.clone()
                    children=move |job| {
                        let id = job.id.clone();
                        let title = job.title.clone();
                        view! {
                            <article class="job-card" on:click=move |_| state.select(id.clone())>
                                <div class="job-card__main">
                                    <h3 class="job-card__title">
                                        {move || highlight_matches(&title, &query.get())}
                                    </h3>
                                    <p class="job-card__summary">{job.summary.clone()}</p>
                                </div>
                                <div class="job-card__meta">
                                    <span>{icon("briefcase")} {job.department.clone()}</span>
                                    <span>{icon("map-pin")} {job.location.clone()}</span>
                                    <span class="badge">{job.employment_type.label()}</span>
                                </div>
                            </article>
                        }
                    }
                />
            </div>

            <Show when=move || {
                !state.loading.get() && total.get() > 0 && visible.with(|v| v.is_empty())
            }>
                <div class="empty-state">
                    <p>"No positions match your filters."</p>
                    <button class="button button--ghost" on:click=move |_| state.reset_filters()>
                        "Reset filters"
                    </button>
                </div>
            </Show>

            <div class="open-application">
                <p>"Don't see the right role? Send us an open application."</p>
                <button
                    class="button button--secondary"
                    on:click=move |_| applying.set(Some(ApplyTarget::Open))
                >
                    "Open application"
                </button>
            </div>

            <DetailModal
                pane=state.pane()
                on_close=Callback::new(move |_| state.clear_selection())
                actions=apply_action
            />

            {move || applying.get().map(|target| {
                let close = Callback::new(move |_| applying.set(None));
                let (job_id, job_title) = match target {
                    ApplyTarget::Job { id, title } => (Some(id), Some(title)),
                    ApplyTarget::Open => (None, None),
                };
                view! {
                    <ModalFrame on_close=close modal_class="form-modal" label="Job application">
                        <JobApplicationForm job_id=job_id job_title=job_title on_close=close />
                    </ModalFrame>
                }
            })}
        </div>
    }
}
