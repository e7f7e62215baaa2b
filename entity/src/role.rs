use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordKind, merge};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: String,
    pub title: String,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub department_id: String,
    /// Seniority from 1 (junior) to 5 (executive).
    pub level: u8,
    pub is_manager: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRole {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    pub department_id: String,
    pub level: u8,
    #[serde(default)]
    pub is_manager: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub responsibilities: Option<Vec<String>>,
    #[serde(default)]
    pub department_id: Option<String>,
    #[serde(default)]
    pub level: Option<u8>,
    #[serde(default)]
    pub is_manager: Option<bool>,
}

impl Record for Role {
    type New = NewRole;
    type Patch = RolePatch;

    const KIND: RecordKind = RecordKind::Role;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_new(id: String, new: NewRole) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            responsibilities: new.responsibilities,
            department_id: new.department_id,
            level: new.level,
            is_manager: new.is_manager,
        }
    }

    fn apply(&mut self, patch: RolePatch) {
        merge(&mut self.title, patch.title);
        merge(&mut self.description, patch.description);
        merge(&mut self.responsibilities, patch.responsibilities);
        merge(&mut self.department_id, patch.department_id);
        merge(&mut self.level, patch.level);
        merge(&mut self.is_manager, patch.is_manager);
    }
}

/// Drops blank entries and trims the rest.
///
/// Role forms submit a fixed number of responsibility slots; callers run this
/// before handing the list to the store, which keeps whatever it is given.
pub fn clean_responsibilities<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .filter_map(|item| {
            let trimmed = item.as_ref().trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect()
}
