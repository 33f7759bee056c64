use super::*;

fn survey(id: &str) -> AppRoute {
    AppRoute::SurveyView { id: id.to_owned() }
}

#[test]
fn resolve_survey_path_binds_id() {
    assert_eq!(AppRoute::resolve("/surveys/123"), survey("123"));
}

#[test]
fn resolve_survey_path_with_uuid() {
    let id = "3f2b9c1e-8d4a-4f6e-9b1a-2c3d4e5f6a7b";
    assert_eq!(AppRoute::resolve(&format!("/surveys/{id}")), survey(id));
}

#[test]
fn resolve_tolerates_trailing_slash_and_query() {
    assert_eq!(AppRoute::resolve("/surveys/7/"), survey("7"));
    assert_eq!(AppRoute::resolve("/surveys/7?ref=mail"), survey("7"));
    assert_eq!(AppRoute::resolve("/surveys/7#q3"), survey("7"));
}

#[test]
fn resolve_unmapped_path_is_not_found() {
    assert_eq!(AppRoute::resolve("/nope"), AppRoute::NotFound);
    assert_eq!(AppRoute::resolve("/"), AppRoute::NotFound);
    assert_eq!(AppRoute::resolve(""), AppRoute::NotFound);
}

#[test]
fn resolve_surveys_without_id_is_not_found() {
    assert_eq!(AppRoute::resolve("/surveys"), AppRoute::NotFound);
    assert_eq!(AppRoute::resolve("/surveys/"), AppRoute::NotFound);
    assert_eq!(AppRoute::resolve("/surveys//"), AppRoute::NotFound);
}

#[test]
fn resolve_nested_survey_path_is_not_found() {
    assert_eq!(AppRoute::resolve("/surveys/7/results"), AppRoute::NotFound);
    assert_eq!(AppRoute::resolve("/api/surveys/7"), AppRoute::NotFound);
}

#[test]
fn resolve_is_case_sensitive() {
    assert_eq!(AppRoute::resolve("/Surveys/7"), AppRoute::NotFound);
}

#[test]
fn survey_path_resolves_back_to_survey_view() {
    let path = survey_path("abc");
    assert_eq!(path, "/surveys/abc");
    assert_eq!(AppRoute::resolve(&path), survey("abc"));
}
