//! The in-memory record store.
//!
//! # Concurrency
//! Every operation awaits its configured latency, then takes the table lock
//! and finishes its read or write without suspending again. Writes therefore
//! never interleave, while completion order across callers follows the
//! latencies rather than issue order.

use std::{marker::PhantomData, sync::Arc};

use chrono::{DateTime, Utc};
use entity::{
    DashboardStats, Department, Employee, NewPerformanceReview, PerformanceReview,
    PerformanceReviewPatch, Record, Role,
};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::{
    ids,
    latency::{Latency, pause},
    seed::{Dataset, demo_dataset},
    stats,
    table::Table,
};

/// The four directory collections. Only reachable through a [`RecordStore`].
#[derive(Debug, Default)]
pub struct Tables {
    employees: Table<Employee>,
    roles: Table<Role>,
    departments: Table<Department>,
    performance_reviews: Table<PerformanceReview>,
}

impl Tables {
    fn from_dataset(dataset: Dataset) -> Self {
        Self {
            employees: Table::from_rows(dataset.employees),
            roles: Table::from_rows(dataset.roles),
            departments: Table::from_rows(dataset.departments),
            performance_reviews: Table::from_rows(dataset.performance_reviews),
        }
    }

    fn to_dataset(&self) -> Dataset {
        Dataset {
            employees: self.employees.rows().to_vec(),
            roles: self.roles.rows().to_vec(),
            departments: self.departments.rows().to_vec(),
            performance_reviews: self.performance_reviews.rows().to_vec(),
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for entity::Employee {}
    impl Sealed for entity::Role {}
    impl Sealed for entity::Department {}
    impl Sealed for entity::PerformanceReview {}
}

/// Record types the store keeps a table for.
pub trait Stored: Record + sealed::Sealed {
    #[doc(hidden)]
    fn table(tables: &Tables) -> &Table<Self>;

    #[doc(hidden)]
    fn table_mut(tables: &mut Tables) -> &mut Table<Self>;

    /// Fills derived fields on a copy handed out by `get`.
    #[doc(hidden)]
    fn hydrate(&mut self, _tables: &Tables) {}
}

impl Stored for Employee {
    fn table(tables: &Tables) -> &Table<Self> {
        &tables.employees
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.employees
    }

    fn hydrate(&mut self, tables: &Tables) {
        let reviews = tables
            .performance_reviews
            .rows()
            .iter()
            .filter(|review| review.employee_id == self.id)
            .cloned()
            .collect();
        self.performance_reviews = Some(reviews);
    }
}

impl Stored for Role {
    fn table(tables: &Tables) -> &Table<Self> {
        &tables.roles
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.roles
    }
}

impl Stored for Department {
    fn table(tables: &Tables) -> &Table<Self> {
        &tables.departments
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.departments
    }
}

impl Stored for PerformanceReview {
    fn table(tables: &Tables) -> &Table<Self> {
        &tables.performance_reviews
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.performance_reviews
    }
}

struct StoreInner {
    tables: RwLock<Tables>,
    latency: Latency,
}

/// Shared handle to one store instance. Clones point at the same tables.
#[derive(Clone)]
pub struct RecordStore {
    inner: Arc<StoreInner>,
}

impl std::fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("latency", &self.inner.latency)
            .finish_non_exhaustive()
    }
}

impl RecordStore {
    /// A store loaded with the demo dataset.
    pub fn seeded(latency: Latency) -> Self {
        Self::from_dataset(demo_dataset(), latency)
    }

    pub fn empty(latency: Latency) -> Self {
        Self::with_tables(Tables::default(), latency)
    }

    pub fn from_dataset(dataset: Dataset, latency: Latency) -> Self {
        Self::with_tables(Tables::from_dataset(dataset), latency)
    }

    fn with_tables(tables: Tables, latency: Latency) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                tables: RwLock::new(tables),
                latency,
            }),
        }
    }

    pub fn latency(&self) -> Latency {
        self.inner.latency
    }

    pub fn employees(&self) -> Collection<'_, Employee> {
        Collection::new(self)
    }

    pub fn roles(&self) -> Collection<'_, Role> {
        Collection::new(self)
    }

    pub fn departments(&self) -> Collection<'_, Department> {
        Collection::new(self)
    }

    pub fn performance_reviews(&self) -> Collection<'_, PerformanceReview> {
        Collection::new(self)
    }

    /// Recomputes the dashboard aggregate at the current wall-clock time.
    pub async fn dashboard_stats(&self) -> DashboardStats {
        self.dashboard_stats_at(Utc::now()).await
    }

    pub async fn dashboard_stats_at(&self, now: DateTime<Utc>) -> DashboardStats {
        pause(self.inner.latency.stats).await;
        let tables = self.inner.tables.read().await;
        let stats = stats::dashboard_stats(
            tables.employees.rows(),
            tables.roles.len(),
            tables.departments.len(),
            tables.performance_reviews.rows(),
            now,
        );
        debug!(
            total_employees = stats.total_employees,
            recent_reviews = stats.recent_reviews,
            "computed dashboard stats"
        );
        stats
    }

    /// Copies every collection at once. Not delayed.
    pub async fn snapshot(&self) -> Dataset {
        self.inner.tables.read().await.to_dataset()
    }
}

/// Typed view over one collection of a [`RecordStore`].
pub struct Collection<'s, T> {
    store: &'s RecordStore,
    _record: PhantomData<fn() -> T>,
}

impl<'s, T> Collection<'s, T> {
    fn new(store: &'s RecordStore) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }
}

impl<T: Stored> Collection<'_, T> {
    /// All records in insertion order.
    pub async fn list(&self) -> Vec<T> {
        self.list_matching(|_| true).await
    }

    async fn list_matching<F>(&self, keep: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        let inner = &self.store.inner;
        pause(inner.latency.list).await;
        let tables = inner.tables.read().await;
        let rows: Vec<T> = T::table(&tables)
            .rows()
            .iter()
            .filter(|row| keep(row))
            .cloned()
            .collect();
        debug!(kind = T::KIND.as_str(), count = rows.len(), "listed records");
        rows
    }

    pub async fn get(&self, id: &str) -> Option<T> {
        let inner = &self.store.inner;
        pause(inner.latency.get).await;
        let tables = inner.tables.read().await;
        let Some(found) = T::table(&tables).find(id) else {
            debug!(kind = T::KIND.as_str(), id, "record not found");
            return None;
        };
        let mut record = found.clone();
        record.hydrate(&tables);
        Some(record)
    }

    /// Appends a record under a freshly generated id and returns it.
    pub async fn create(&self, new: T::New) -> T {
        self.create_inspecting(new, |_, _| ()).await.0
    }

    /// Shallow-merges `patch` into the record with `id`.
    ///
    /// Returns the updated record, or `None` without touching anything when
    /// the id is unknown.
    pub async fn update(&self, id: &str, patch: T::Patch) -> Option<T> {
        self.update_inspecting(id, patch, |_, _| ())
            .await
            .map(|(record, ())| record)
    }

    /// Removes the record with `id` and returns it as it was before removal.
    pub async fn delete(&self, id: &str) -> Option<T> {
        self.delete_inspecting(id, |_, _| ())
            .await
            .map(|(record, ())| record)
    }

    /// `create`, then `inspect` the tables within the same locked step.
    async fn create_inspecting<R, F>(&self, new: T::New, inspect: F) -> (T, R)
    where
        F: FnOnce(&T, &Tables) -> R,
    {
        let inner = &self.store.inner;
        pause(inner.latency.write).await;
        let mut tables = inner.tables.write().await;
        let table = T::table_mut(&mut tables);
        let id = ids::fresh_id(&mut rand::thread_rng(), |candidate| {
            table.contains(candidate)
        });
        let record = T::from_new(id, new);
        table.push(record.clone());
        info!(kind = T::KIND.as_str(), id = record.id(), "record created");
        let seen = inspect(&record, &*tables);
        (record, seen)
    }

    async fn update_inspecting<R, F>(
        &self,
        id: &str,
        patch: T::Patch,
        inspect: F,
    ) -> Option<(T, R)>
    where
        F: FnOnce(&T, &Tables) -> R,
    {
        let inner = &self.store.inner;
        pause(inner.latency.write).await;
        let mut tables = inner.tables.write().await;
        let Some(record) = T::table_mut(&mut tables).find_mut(id) else {
            debug!(kind = T::KIND.as_str(), id, "update target not found");
            return None;
        };
        record.apply(patch);
        let record = record.clone();
        info!(kind = T::KIND.as_str(), id, "record updated");
        let seen = inspect(&record, &*tables);
        Some((record, seen))
    }

    async fn delete_inspecting<R, F>(&self, id: &str, inspect: F) -> Option<(T, R)>
    where
        F: FnOnce(&T, &Tables) -> R,
    {
        let inner = &self.store.inner;
        pause(inner.latency.write).await;
        let mut tables = inner.tables.write().await;
        let Some(removed) = T::table_mut(&mut tables).remove(id) else {
            debug!(kind = T::KIND.as_str(), id, "delete target not found");
            return None;
        };
        info!(kind = T::KIND.as_str(), id, "record deleted");
        let seen = inspect(&removed, &*tables);
        Some((removed, seen))
    }
}

/// A review write together with the reviewed employee as it stood in the
/// same locked step. `employee` is `None` when the id does not resolve.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewChange {
    pub review: PerformanceReview,
    pub employee: Option<Employee>,
}

fn reviewed_employee(review: &PerformanceReview, tables: &Tables) -> Option<Employee> {
    tables.employees.find(&review.employee_id).cloned()
}

impl Collection<'_, PerformanceReview> {
    /// Reviews of one employee, or all reviews when `employee_id` is `None`
    /// or empty.
    pub async fn list_for(&self, employee_id: Option<&str>) -> Vec<PerformanceReview> {
        match employee_id.filter(|id| !id.is_empty()) {
            Some(employee_id) => {
                self.list_matching(|review| review.employee_id == employee_id)
                    .await
            }
            None => self.list().await,
        }
    }

    pub async fn create_reviewed(&self, new: NewPerformanceReview) -> ReviewChange {
        let (review, employee) = self.create_inspecting(new, reviewed_employee).await;
        ReviewChange { review, employee }
    }

    pub async fn update_reviewed(
        &self,
        id: &str,
        patch: PerformanceReviewPatch,
    ) -> Option<ReviewChange> {
        self.update_inspecting(id, patch, reviewed_employee)
            .await
            .map(|(review, employee)| ReviewChange { review, employee })
    }

    pub async fn delete_reviewed(&self, id: &str) -> Option<ReviewChange> {
        self.delete_inspecting(id, reviewed_employee)
            .await
            .map(|(review, employee)| ReviewChange { review, employee })
    }
}
