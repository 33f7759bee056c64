//! Catch-all page for paths outside the route table.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routes::survey_path;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();

    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <p class="not-found-page__path">{move || location.pathname.get()}</p>
            <p>"Survey links look like " <code>{survey_path("<id>")}</code> "."</p>
        </div>
    }
}
