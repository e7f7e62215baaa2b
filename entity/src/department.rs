use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordKind, merge, nullable};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<String>,
    /// Reserved for nested departments; stored but never traversed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_department_id: Option<String>,
    pub created_at: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDepartment {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub manager_id: Option<String>,
    #[serde(default)]
    pub parent_department_id: Option<String>,
    pub created_at: NaiveDate,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub manager_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub parent_department_id: Option<Option<String>>,
    #[serde(default)]
    pub created_at: Option<NaiveDate>,
}

impl Record for Department {
    type New = NewDepartment;
    type Patch = DepartmentPatch;

    const KIND: RecordKind = RecordKind::Department;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_new(id: String, new: NewDepartment) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            manager_id: new.manager_id,
            parent_department_id: new.parent_department_id,
            created_at: new.created_at,
        }
    }

    fn apply(&mut self, patch: DepartmentPatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.description, patch.description);
        merge(&mut self.manager_id, patch.manager_id);
        merge(&mut self.parent_department_id, patch.parent_department_id);
        merge(&mut self.created_at, patch.created_at);
    }
}
