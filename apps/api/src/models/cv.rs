#![allow(dead_code)]

//! Structured result of a CV optimization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::validation::{require_range, ValidationError};

pub const ATS_SCORE_MIN: i64 = 0;
pub const ATS_SCORE_MAX: i64 = 100;

/// One work experience: title, company, period, bullet points and any
/// other keys the engine chooses to emit.
pub type ExperienceRecord = Map<String, Value>;

/// Fully optimized CV: enhanced summary, ATS-optimized experience bullets,
/// keywords matched from the job description and follow-up suggestions.
///
/// Immutable once built. `ats_score` is always within `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OptimizedCvPayload")]
pub struct OptimizedCv {
    candidate_name: String,
    professional_title: String,
    professional_summary: String,
    experience: Vec<ExperienceRecord>,
    skills: Map<String, Value>,
    education: Vec<String>,
    certifications: Vec<String>,
    ats_score: u8,
    matched_keywords: Vec<String>,
    suggestions: Vec<String>,
}

/// Wire shape accepted before validation runs.
#[derive(Debug, Deserialize)]
struct OptimizedCvPayload {
    candidate_name: String,
    professional_title: String,
    professional_summary: String,
    #[serde(default)]
    experience: Vec<ExperienceRecord>,
    #[serde(default)]
    skills: Map<String, Value>,
    #[serde(default)]
    education: Vec<String>,
    #[serde(default)]
    certifications: Vec<String>,
    ats_score: i64,
    #[serde(default)]
    matched_keywords: Vec<String>,
    #[serde(default)]
    suggestions: Vec<String>,
}

impl TryFrom<OptimizedCvPayload> for OptimizedCv {
    type Error = ValidationError;

    fn try_from(p: OptimizedCvPayload) -> Result<Self, Self::Error> {
        Ok(OptimizedCv::new(
            p.candidate_name,
            p.professional_title,
            p.professional_summary,
            p.ats_score,
        )?
        .with_experience(p.experience)
        .with_skills(p.skills)
        .with_education(p.education)
        .with_certifications(p.certifications)
        .with_matched_keywords(p.matched_keywords)
        .with_suggestions(p.suggestions))
    }
}

impl OptimizedCv {
    /// Builds a CV with the required fields; every list starts empty.
    pub fn new(
        candidate_name: impl Into<String>,
        professional_title: impl Into<String>,
        professional_summary: impl Into<String>,
        ats_score: i64,
    ) -> Result<Self, ValidationError> {
        require_range("ats_score", ats_score, ATS_SCORE_MIN, ATS_SCORE_MAX)?;

        Ok(Self {
            candidate_name: candidate_name.into(),
            professional_title: professional_title.into(),
            professional_summary: professional_summary.into(),
            experience: Vec::new(),
            skills: Map::new(),
            education: Vec::new(),
            certifications: Vec::new(),
            // range checked above
            ats_score: ats_score as u8,
            matched_keywords: Vec::new(),
            suggestions: Vec::new(),
        })
    }

    pub fn with_experience(mut self, experience: Vec<ExperienceRecord>) -> Self {
        self.experience = experience;
        self
    }

    pub fn with_skills(mut self, skills: Map<String, Value>) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_education(mut self, education: Vec<String>) -> Self {
        self.education = education;
        self
    }

    pub fn with_certifications(mut self, certifications: Vec<String>) -> Self {
        self.certifications = certifications;
        self
    }

    pub fn with_matched_keywords(mut self, keywords: Vec<String>) -> Self {
        self.matched_keywords = keywords;
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn candidate_name(&self) -> &str {
        &self.candidate_name
    }

    pub fn professional_title(&self) -> &str {
        &self.professional_title
    }

    pub fn professional_summary(&self) -> &str {
        &self.professional_summary
    }

    pub fn experience(&self) -> &[ExperienceRecord] {
        &self.experience
    }

    /// Categorized skills, e.g. core competencies, technical tools, languages.
    pub fn skills(&self) -> &Map<String, Value> {
        &self.skills
    }

    pub fn education(&self) -> &[String] {
        &self.education
    }

    pub fn certifications(&self) -> &[String] {
        &self.certifications
    }

    /// Estimated ATS compatibility, 0 to 100.
    pub fn ats_score(&self) -> u8 {
        self.ats_score
    }

    pub fn matched_keywords(&self) -> &[String] {
        &self.matched_keywords
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cv_with_score(score: i64) -> Result<OptimizedCv, ValidationError> {
        OptimizedCv::new(
            "Nour El-Din Hassan",
            "Senior Credit Analyst",
            "Credit analyst with 6 years of corporate lending experience at Egyptian banks.",
            score,
        )
    }

    #[test]
    fn test_score_100_is_accepted() {
        assert_eq!(cv_with_score(100).unwrap().ats_score(), 100);
    }

    #[test]
    fn test_score_0_is_accepted() {
        assert_eq!(cv_with_score(0).unwrap().ats_score(), 0);
    }

    #[test]
    fn test_score_101_is_rejected() {
        let err = cv_with_score(101).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange {
                field: "ats_score",
                actual: 101,
                ..
            }
        ));
    }

    #[test]
    fn test_negative_score_is_rejected() {
        assert!(cv_with_score(-1).is_err());
        assert!(cv_with_score(i64::MIN).is_err());
    }

    #[test]
    fn test_sequences_default_to_empty() {
        let cv = cv_with_score(72).unwrap();
        assert!(cv.experience().is_empty());
        assert!(cv.skills().is_empty());
        assert!(cv.education().is_empty());
        assert!(cv.certifications().is_empty());
        assert!(cv.matched_keywords().is_empty());
        assert!(cv.suggestions().is_empty());
    }

    #[test]
    fn test_builders_attach_content() {
        let experience = json!({
            "title": "Credit Analyst",
            "company": "National Bank of Egypt",
            "period": "2019 - Present",
            "bullets": ["Assessed EGP 450M corporate loan portfolio"]
        });
        let cv = cv_with_score(88)
            .unwrap()
            .with_experience(vec![experience.as_object().unwrap().clone()])
            .with_certifications(vec!["CFA Level II (2023)".to_string()])
            .with_matched_keywords(vec!["IFRS 9".to_string(), "credit risk".to_string()]);

        assert_eq!(cv.experience().len(), 1);
        assert_eq!(cv.experience()[0]["company"], "National Bank of Egypt");
        assert_eq!(cv.certifications(), ["CFA Level II (2023)"]);
        assert_eq!(cv.matched_keywords().len(), 2);
    }

    #[test]
    fn test_deserialize_minimal_json_fills_defaults() {
        let cv: OptimizedCv = serde_json::from_value(json!({
            "candidate_name": "Mariam Fawzy",
            "professional_title": "Risk Analyst",
            "professional_summary": "Risk analyst focused on Basel III reporting.",
            "ats_score": 64
        }))
        .unwrap();

        assert_eq!(cv.candidate_name(), "Mariam Fawzy");
        assert_eq!(cv.ats_score(), 64);
        assert!(cv.suggestions().is_empty());
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_score() {
        for score in [101, -5, 1000] {
            let result: Result<OptimizedCv, _> = serde_json::from_value(json!({
                "candidate_name": "A",
                "professional_title": "B",
                "professional_summary": "C",
                "ats_score": score
            }));
            let err = result.unwrap_err().to_string();
            assert!(err.contains("ats_score"), "unexpected error: {err}");
        }
    }

    #[test]
    fn test_deserialize_rejects_null_text_field() {
        let result: Result<OptimizedCv, _> = serde_json::from_value(json!({
            "candidate_name": null,
            "professional_title": "B",
            "professional_summary": "C",
            "ats_score": 50
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_requires_ats_score() {
        let result: Result<OptimizedCv, _> = serde_json::from_value(json!({
            "candidate_name": "A",
            "professional_title": "B",
            "professional_summary": "C"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_serialized_shape_uses_field_names() {
        let cv = cv_with_score(90)
            .unwrap()
            .with_education(vec!["BSc Commerce, Cairo University, 2017".to_string()]);
        let value = serde_json::to_value(&cv).unwrap();

        assert_eq!(value["ats_score"], 90);
        assert_eq!(value["professional_title"], "Senior Credit Analyst");
        assert_eq!(value["education"][0], "BSc Commerce, Cairo University, 2017");
        assert!(value["skills"].as_object().unwrap().is_empty());
    }
}
