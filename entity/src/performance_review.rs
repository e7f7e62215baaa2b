use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordKind, merge};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReview {
    pub id: String,
    pub employee_id: String,
    pub reviewer_id: String,
    pub date: NaiveDate,
    /// Nominally 0.0 to 5.0; not clamped.
    pub rating: f64,
    pub comments: String,
    pub strengths: Vec<String>,
    pub areas_to_improve: Vec<String>,
    pub goals: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPerformanceReview {
    pub employee_id: String,
    pub reviewer_id: String,
    pub date: NaiveDate,
    pub rating: f64,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub areas_to_improve: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReviewPatch {
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub reviewer_id: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub strengths: Option<Vec<String>>,
    #[serde(default)]
    pub areas_to_improve: Option<Vec<String>>,
    #[serde(default)]
    pub goals: Option<Vec<String>>,
}

impl Record for PerformanceReview {
    type New = NewPerformanceReview;
    type Patch = PerformanceReviewPatch;

    const KIND: RecordKind = RecordKind::PerformanceReview;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_new(id: String, new: NewPerformanceReview) -> Self {
        Self {
            id,
            employee_id: new.employee_id,
            reviewer_id: new.reviewer_id,
            date: new.date,
            rating: new.rating,
            comments: new.comments,
            strengths: new.strengths,
            areas_to_improve: new.areas_to_improve,
            goals: new.goals,
        }
    }

    fn apply(&mut self, patch: PerformanceReviewPatch) {
        merge(&mut self.employee_id, patch.employee_id);
        merge(&mut self.reviewer_id, patch.reviewer_id);
        merge(&mut self.date, patch.date);
        merge(&mut self.rating, patch.rating);
        merge(&mut self.comments, patch.comments);
        merge(&mut self.strengths, patch.strengths);
        merge(&mut self.areas_to_improve, patch.areas_to_improve);
        merge(&mut self.goals, patch.goals);
    }
}
