//! Survey form state for the survey page.
//!
//! DESIGN
//! ======
//! Requests are not cancelled on navigation. Instead every route id starts a
//! new generation via [`SurveyFormState::begin_request`], and responses
//! tagged with an older generation are dropped on arrival.

#[cfg(test)]
#[path = "survey_test.rs"]
mod survey_test;

use surveys::{Answers, Question, Survey, SurveyResults};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    /// Backend acknowledgement text.
    Submitted(String),
    Failed(String),
}

/// A submission ready to send, tagged with the generation that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSubmission {
    pub generation: u64,
    pub survey_id: String,
    pub answers: Answers,
}

#[derive(Clone, Debug, Default)]
pub struct SurveyFormState {
    pub survey_id: Option<String>,
    pub generation: u64,
    pub survey: Option<Survey>,
    pub answers: Answers,
    pub load: LoadStatus,
    pub submit: SubmitStatus,
    pub results: Option<SurveyResults>,
    pub results_error: Option<String>,
}

impl SurveyFormState {
    /// Reset for `survey_id` and return the generation that owns the fetch.
    pub fn begin_request(&mut self, survey_id: &str) -> u64 {
        let generation = self.generation + 1;
        *self = Self {
            survey_id: Some(survey_id.to_owned()),
            generation,
            load: LoadStatus::Loading,
            ..Self::default()
        };
        generation
    }

    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Store a fetched survey. Returns `false` (and changes nothing) for a
    /// stale generation.
    pub fn load(&mut self, generation: u64, survey: Survey) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.survey = Some(survey);
        self.answers.clear();
        self.load = LoadStatus::Loaded;
        true
    }

    pub fn fail_load(&mut self, generation: u64, message: String) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.load = LoadStatus::Failed(message);
        true
    }

    fn is_locked(&self) -> bool {
        matches!(self.submit, SubmitStatus::Submitting | SubmitStatus::Submitted(_))
    }

    fn question(&self, question_id: &str) -> Option<&Question> {
        self.survey.as_ref()?.questions.iter().find(|q| q.id == question_id)
    }

    /// Record the option at `option_index` as the answer to `question_id`.
    ///
    /// Ignored for unknown questions, out-of-range options, and once the
    /// form is being submitted or has been submitted.
    pub fn select(&mut self, question_id: &str, option_index: usize) -> bool {
        if self.is_locked() {
            return false;
        }
        let Some(question) = self.question(question_id) else {
            return false;
        };
        if option_index >= question.options().len() {
            return false;
        }
        self.answers
            .insert(question_id.to_owned(), Question::answer_for_option(option_index));
        if matches!(self.submit, SubmitStatus::Failed(_)) {
            self.submit = SubmitStatus::Idle;
        }
        true
    }

    /// Selected option index for `question_id`.
    #[must_use]
    pub fn answer_for(&self, question_id: &str) -> Option<usize> {
        let answer = self.answers.get(question_id)?;
        self.question(question_id)?.option_for_answer(answer)
    }

    #[must_use]
    pub fn unanswered(&self) -> Vec<&Question> {
        self.survey
            .as_ref()
            .map(|s| s.questions.iter().filter(|q| self.answer_for(&q.id).is_none()).collect())
            .unwrap_or_default()
    }

    /// A loaded survey with every question answered.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.load == LoadStatus::Loaded && self.unanswered().is_empty()
    }

    /// The submission payload, when the form is complete and not yet sent.
    #[must_use]
    pub fn to_submission(&self) -> Option<PendingSubmission> {
        if self.is_locked() || !self.is_complete() {
            return None;
        }
        Some(PendingSubmission {
            generation: self.generation,
            survey_id: self.survey_id.clone()?,
            answers: self.answers.clone(),
        })
    }

    /// Take the submission and lock the form until the backend answers.
    pub fn begin_submit(&mut self) -> Option<PendingSubmission> {
        let pending = self.to_submission()?;
        self.submit = SubmitStatus::Submitting;
        Some(pending)
    }

    pub fn finish_submit(&mut self, generation: u64, outcome: Result<String, String>) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.submit = match outcome {
            Ok(message) => SubmitStatus::Submitted(message),
            Err(message) => SubmitStatus::Failed(message),
        };
        true
    }

    pub fn set_results(&mut self, generation: u64, outcome: Result<SurveyResults, String>) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        match outcome {
            Ok(results) => {
                self.results = Some(results);
                self.results_error = None;
            }
            Err(message) => self.results_error = Some(message),
        }
        true
    }

    /// `answered / total` for the progress line.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        let total = self.survey.as_ref().map_or(0, |s| s.questions.len());
        (total - self.unanswered().len(), total)
    }
}
