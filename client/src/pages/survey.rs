//! Survey page: renders one survey form and posts the answers.
//!
//! ARCHITECTURE
//! ============
//! The route `id` drives everything: each new id starts a new request
//! generation in `SurveyFormState`, fetches the survey, and drops whatever
//! the previous id still had in flight. After a successful submit the page
//! fetches and shows the aggregated results.
//!
//! ERROR HANDLING
//! ==============
//! Service errors are already logged by `surveys`; here they only become
//! inline text. There is no retry; reloading the page starts over.

#[cfg(test)]
#[path = "survey_test.rs"]
mod survey_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use surveys::{SurveyError, SurveyService};

use crate::components::question_card::QuestionCard;
use crate::components::results_panel::ResultsPanel;
use crate::routes::SURVEY_ID_PARAM;
use crate::state::survey::{LoadStatus, PendingSubmission, SubmitStatus, SurveyFormState};

const SERVICE_UNAVAILABLE: &str = "Survey service is unavailable.";

/// User-facing text for a failed service call.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn describe_error(err: &SurveyError) -> String {
    match err {
        SurveyError::InvalidSurveyId(_) => "That survey link is not valid.".to_owned(),
        err if err.is_not_found() => "Survey not found.".to_owned(),
        SurveyError::Fetch { status, .. } => format!("The survey server answered with status {status}."),
        SurveyError::Network(_) => "Could not reach the survey server.".to_owned(),
        SurveyError::Decode(_) => "The survey server sent a response we could not read.".to_owned(),
        SurveyError::HttpClientBuild(_) => SERVICE_UNAVAILABLE.to_owned(),
    }
}

fn submit_label(status: &SubmitStatus) -> &'static str {
    match status {
        SubmitStatus::Submitting => "Submitting...",
        SubmitStatus::Submitted(_) => "Submitted",
        SubmitStatus::Idle | SubmitStatus::Failed(_) => "Submit answers",
    }
}

fn progress_label((answered, total): (usize, usize)) -> String {
    format!("{answered} of {total} answered")
}

// =============================================================================
// ASYNC ACTIONS
// =============================================================================

// Fetches only run after hydration; the SSR build renders the loading state.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn spawn_survey_fetch(
    service: Option<SurveyService>,
    survey_id: String,
    generation: u64,
    form: RwSignal<SurveyFormState>,
) {
    let Some(service) = service else {
        form.update(|f| {
            f.fail_load(generation, SERVICE_UNAVAILABLE.to_owned());
        });
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = service.fetch_survey_by_id(&survey_id).await;
        form.update(|f| {
            let applied = match outcome {
                Ok(survey) => f.load(generation, survey),
                Err(e) => f.fail_load(generation, describe_error(&e)),
            };
            if !applied {
                log::debug!("dropped stale survey response for {survey_id}");
            }
        });
    });
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn spawn_results_fetch(service: SurveyService, survey_id: String, generation: u64, form: RwSignal<SurveyFormState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = service
            .get_survey_results(&survey_id)
            .await
            .map_err(|e| describe_error(&e));
        form.update(|f| {
            f.set_results(generation, outcome);
        });
    });
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn spawn_submit(service: SurveyService, pending: PendingSubmission, form: RwSignal<SurveyFormState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let PendingSubmission { generation, survey_id, answers } = pending;
        let outcome = service
            .submit_answers_to_survey(&survey_id, answers)
            .await
            .map(|receipt| receipt.message)
            .map_err(|e| describe_error(&e));
        let succeeded = outcome.is_ok();
        let mut current = false;
        form.update(|f| current = f.finish_submit(generation, outcome));
        if succeeded && current {
            spawn_results_fetch(service, survey_id, generation, form);
        }
    });
}

// =============================================================================
// PAGE
// =============================================================================

/// Survey page bound to `/surveys/:id`.
#[component]
pub fn SurveyPage() -> impl IntoView {
    let params = use_params_map();
    let service = use_context::<SurveyService>();
    let form = RwSignal::new(SurveyFormState::default());

    let route_id = Memo::new(move |_| params.read().get(SURVEY_ID_PARAM).unwrap_or_default());
    let load = Memo::new(move |_| form.with(|f| f.load.clone()));
    let submit = Memo::new(move |_| form.with(|f| f.submit.clone()));
    let locked = Signal::derive(move || {
        matches!(submit.get(), SubmitStatus::Submitting | SubmitStatus::Submitted(_))
    });

    // One fetch per distinct route id.
    let fetch_service = service.clone();
    Effect::new(move || {
        let id = route_id.get();
        let mut generation = 0;
        form.update(|f| generation = f.begin_request(&id));
        spawn_survey_fetch(fetch_service.clone(), id, generation, form);
    });

    let submit_service = service.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(service) = submit_service.clone() else {
            return;
        };
        let mut pending = None;
        form.update(|f| pending = f.begin_submit());
        if let Some(pending) = pending {
            spawn_submit(service, pending, form);
        }
    };

    let results_service = service;
    let on_show_results = move |_: leptos::ev::MouseEvent| {
        let Some(service) = results_service.clone() else {
            return;
        };
        let (survey_id, generation) = form.with_untracked(|f| (f.survey_id.clone(), f.generation));
        if let Some(survey_id) = survey_id {
            spawn_results_fetch(service, survey_id, generation, form);
        }
    };

    // Untracked: the question list only changes with `load`, which already
    // re-renders the form.
    let questions = move || {
        form.with_untracked(|f| f.survey.as_ref().map(|s| s.questions.clone()).unwrap_or_default())
    };
    let description = move || form.with(|f| f.survey.as_ref().and_then(|s| s.description.clone()));
    let can_submit = move || form.with(|f| f.to_submission().is_some());

    view! {
        <div class="survey-page" data-survey-id=move || route_id.get()>
            {move || match load.get() {
                LoadStatus::Idle | LoadStatus::Loading => {
                    view! { <p class="survey-page__status">"Loading survey..."</p> }.into_any()
                }
                LoadStatus::Failed(message) => {
                    view! { <p class="survey-page__error">{message}</p> }.into_any()
                }
                LoadStatus::Loaded => {
                    view! {
                        <form class="survey-form" on:submit=on_submit.clone()>
                            <h1 class="survey-form__title">
                                {move || description().unwrap_or_else(|| "Survey".to_owned())}
                            </h1>
                            <p class="survey-form__progress">
                                {move || progress_label(form.with(SurveyFormState::progress))}
                            </p>
                            {questions()
                                .into_iter()
                                .enumerate()
                                .map(|(position, question)| {
                                    let question_id = question.id.clone();
                                    let selected_id = question_id.clone();
                                    view! {
                                        <QuestionCard
                                            question=question
                                            position=position
                                            selected=Signal::derive(move || {
                                                form.with(|f| f.answer_for(&selected_id))
                                            })
                                            locked=locked
                                            on_select=Callback::new(move |option: usize| {
                                                form.update(|f| {
                                                    f.select(&question_id, option);
                                                });
                                            })
                                        />
                                    }
                                })
                                .collect_view()}
                            <div class="survey-form__actions">
                                <button
                                    class="survey-form__submit"
                                    type="submit"
                                    disabled=move || !can_submit()
                                >
                                    {move || submit_label(&submit.get())}
                                </button>
                                <button
                                    class="survey-form__results"
                                    type="button"
                                    on:click=on_show_results.clone()
                                >
                                    "View results"
                                </button>
                            </div>
                            {move || match submit.get() {
                                SubmitStatus::Submitted(message) => {
                                    view! { <p class="survey-form__message">{message}</p> }.into_any()
                                }
                                SubmitStatus::Failed(message) => {
                                    view! { <p class="survey-form__error">{message}</p> }.into_any()
                                }
                                SubmitStatus::Idle | SubmitStatus::Submitting => ().into_any(),
                            }}
                        </form>
                    }
                        .into_any()
                }
            }}
            {move || form.with(|f| f.results_error.clone()).map(|message| {
                view! { <p class="survey-page__error">{message}</p> }
            })}
            {move || form.with(|f| f.results.clone()).map(|results| {
                view! { <ResultsPanel results=results/> }
            })}
        </div>
    }
}
