//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{not_found::NotFoundPage, survey::SurveyPage};
use crate::routes::{SURVEY_ID_PARAM, SURVEYS_SEGMENT};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the survey service to every page and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    match crate::net::api::survey_service() {
        Ok(service) => provide_context(service),
        Err(e) => leptos::logging::error!("survey service unavailable: {e}"),
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/survey-ui.css"/>
        <Title text="Surveys"/>

        <Router>
            <main class="app">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route
                        path=(StaticSegment(SURVEYS_SEGMENT), ParamSegment(SURVEY_ID_PARAM))
                        view=SurveyPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
