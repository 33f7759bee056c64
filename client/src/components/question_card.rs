//! A single survey question rendered as a radio group.

use leptos::prelude::*;
use surveys::Question;

/// One question with its response options.
///
/// The radio `value` is the answer the backend expects (`"1"` for the first
/// option), so the markup is also a valid plain form post.
#[component]
pub fn QuestionCard(
    question: Question,
    /// Zero-based position in the survey, shown 1-based.
    position: usize,
    #[prop(into)] selected: Signal<Option<usize>>,
    #[prop(into)] locked: Signal<bool>,
    on_select: Callback<usize>,
) -> impl IntoView {
    let group = format!("question-{}", question.id);
    let options: Vec<String> = question.options().into_iter().map(str::to_owned).collect();

    view! {
        <fieldset
            class="question-card"
            class:question-card--answered=move || selected.get().is_some()
        >
            <legend class="question-card__text">{format!("{}. {}", position + 1, question.text)}</legend>
            <div class="question-card__options">
                {options
                    .into_iter()
                    .enumerate()
                    .map(|(index, label)| {
                        view! {
                            <label class="question-card__option">
                                <input
                                    type="radio"
                                    name=group.clone()
                                    value=Question::answer_for_option(index)
                                    prop:checked=move || selected.get() == Some(index)
                                    disabled=move || locked.get()
                                    on:change=move |_| on_select.run(index)
                                />
                                <span>{label}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </fieldset>
    }
}
