use entity::Record;

/// Insertion-ordered rows of one record type.
///
/// Lookups are linear scans; the directory tables hold tens of rows.
#[derive(Clone, Debug)]
pub struct Table<T> {
    rows: Vec<T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T: Record> Table<T> {
    pub(crate) fn from_rows(rows: Vec<T>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub(crate) fn find_mut(&mut self, id: &str) -> Option<&mut T> {
        self.rows.iter_mut().find(|row| row.id() == id)
    }

    pub(crate) fn push(&mut self, row: T) {
        self.rows.push(row);
    }

    pub(crate) fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.position(id)?;
        Some(self.rows.remove(index))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::{NewRole, Role};

    fn role(id: &str, title: &str) -> Role {
        Role::from_new(
            id.into(),
            NewRole {
                title: title.into(),
                description: String::new(),
                responsibilities: vec![],
                department_id: "1".into(),
                level: 1,
                is_manager: false,
            },
        )
    }

    #[test]
    fn remove_keeps_remaining_rows_in_insertion_order() {
        let mut table = Table::from_rows(vec![role("a", "A"), role("b", "B"), role("c", "C")]);
        let removed = table.remove("b").unwrap();
        assert_eq!(removed.title, "B");
        let ids: Vec<&str> = table.rows().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(table.remove("b").is_none());
        assert_eq!(table.len(), 2);
    }
}
