use super::*;

#[test]
fn describe_error_maps_not_found() {
    let err = SurveyError::Fetch { status: 404, body: String::new() };
    assert_eq!(describe_error(&err), "Survey not found.");
}

#[test]
fn describe_error_includes_other_statuses() {
    let err = SurveyError::Fetch { status: 500, body: "boom".to_owned() };
    assert_eq!(describe_error(&err), "The survey server answered with status 500.");
}

#[test]
fn describe_error_hides_transport_detail() {
    let err = SurveyError::Network("tcp connect error: Connection refused".to_owned());
    assert_eq!(describe_error(&err), "Could not reach the survey server.");
    let err = SurveyError::Decode("expected value at line 1".to_owned());
    assert!(!describe_error(&err).contains("line 1"));
}

#[test]
fn describe_error_invalid_id() {
    let err = SurveyError::InvalidSurveyId(String::new());
    assert_eq!(describe_error(&err), "That survey link is not valid.");
}

#[test]
fn submit_label_follows_status() {
    assert_eq!(submit_label(&SubmitStatus::Idle), "Submit answers");
    assert_eq!(submit_label(&SubmitStatus::Submitting), "Submitting...");
    assert_eq!(submit_label(&SubmitStatus::Submitted("ok".to_owned())), "Submitted");
    assert_eq!(submit_label(&SubmitStatus::Failed("no".to_owned())), "Submit answers");
}

#[test]
fn progress_label_formats_counts() {
    assert_eq!(progress_label((1, 3)), "1 of 3 answered");
    assert_eq!(progress_label((0, 0)), "0 of 0 answered");
}
