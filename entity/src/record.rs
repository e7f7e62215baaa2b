use serde::{Deserialize, Deserializer, Serialize};

/// Collection a record belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Employee,
    Role,
    Department,
    PerformanceReview,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Employee => "employee",
            RecordKind::Role => "role",
            RecordKind::Department => "department",
            RecordKind::PerformanceReview => "performance_review",
        }
    }
}

/// A stored record: an id plus the fields supplied at creation.
///
/// `apply` is a shallow merge. Fields left unset in the patch keep their
/// current value; list fields are replaced wholesale when present.
pub trait Record: Clone + Send + Sync + 'static {
    type New: Send;
    type Patch: Send;

    const KIND: RecordKind;

    fn id(&self) -> &str;

    fn from_new(id: String, new: Self::New) -> Self;

    fn apply(&mut self, patch: Self::Patch);
}

/// Deserializes a field that distinguishes "absent" from "explicit null".
///
/// Use with `#[serde(default, deserialize_with = "...")]` so a missing key
/// stays `None` while `null` becomes `Some(None)`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

pub(crate) fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}
