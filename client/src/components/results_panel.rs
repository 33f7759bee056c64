//! Aggregated survey results.

#[cfg(test)]
#[path = "results_panel_test.rs"]
mod results_panel_test;

use leptos::prelude::*;
use surveys::SurveyResults;

/// Whole-number share of `count` in `total`, rounded half up. Zero when
/// nothing has been counted.
fn share_percent(count: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    (count * 100 + total / 2) / total
}

fn response_count_label(count: Option<u32>) -> String {
    match count.unwrap_or(0) {
        1 => "1 response".to_owned(),
        n => format!("{n} responses"),
    }
}

/// Results table: one block per question, one row per option.
#[component]
pub fn ResultsPanel(results: SurveyResults) -> impl IntoView {
    let heading = response_count_label(results.survey.response_count);

    view! {
        <section class="results-panel">
            <h2 class="results-panel__title">"Results"</h2>
            <p class="results-panel__count">{heading}</p>
            {results
                .results
                .into_iter()
                .map(|question| {
                    let total = question.total();
                    let rows: Vec<(String, u64)> = question
                        .tally()
                        .into_iter()
                        .map(|(label, count)| (label.to_owned(), count))
                        .collect();
                    view! {
                        <div class="results-panel__question">
                            <h3>{question.question_text.clone()}</h3>
                            <table class="results-panel__table">
                                <tbody>
                                    {rows
                                        .into_iter()
                                        .map(|(label, count)| {
                                            let pct = share_percent(count, total);
                                            view! {
                                                <tr>
                                                    <td class="results-panel__label">{label}</td>
                                                    <td class="results-panel__count">{count}</td>
                                                    <td class="results-panel__bar">
                                                        <span style=format!("width: {pct}%")></span>
                                                        {format!("{pct}%")}
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}
