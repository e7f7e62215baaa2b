use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};
use entity::{
    DepartmentPatch, EmployeePatch, EmployeeStatus, NewDepartment, NewRole, RolePatch,
};
use platform_db::{Latency, RecordStore};
use workforce_tests::{ann_lee, day, review_of, seeded_store};

#[tokio::test]
async fn get_returns_record_with_requested_id() -> Result<()> {
    let store = seeded_store();
    for id in ["1", "2", "3", "4", "5"] {
        let employee = store.employees().get(id).await.context("seeded employee")?;
        assert_eq!(employee.id, id);
    }
    let role = store.roles().get("3").await.context("seeded role")?;
    assert_eq!(role.title, "Senior Developer");
    let review = store.performance_reviews().get("4").await.context("seeded review")?;
    assert_eq!(review.employee_id, "5");
    Ok(())
}

#[tokio::test]
async fn absent_ids_yield_absence() {
    let store = seeded_store();
    assert!(store.employees().get("999").await.is_none());
    assert!(store.departments().get("").await.is_none());
    assert!(store.roles().delete("999").await.is_none());
    assert!(store.performance_reviews().delete("999").await.is_none());
    assert_eq!(store.roles().list().await.len(), 5);
}

#[tokio::test]
async fn create_assigns_fresh_id_and_keeps_fields() -> Result<()> {
    let store = seeded_store();
    let before: Vec<String> = store.employees().list().await.into_iter().map(|e| e.id).collect();

    let created = store.employees().create(ann_lee()).await;
    assert!(!created.id.is_empty());
    assert!(!before.contains(&created.id));

    let fetched = store.employees().get(&created.id).await.context("created employee")?;
    assert_eq!(fetched.first_name, "Ann");
    assert_eq!(fetched.last_name, "Lee");
    assert_eq!(fetched.email, "ann.lee@company.com");
    assert_eq!(fetched.role_id, "1");
    assert_eq!(fetched.hire_date, day(2024, 1, 1));
    assert_eq!(fetched.performance_reviews, Some(Vec::new()));
    Ok(())
}

#[tokio::test]
async fn seeded_store_accepts_ann_lee() {
    let store = seeded_store();
    let created = store.employees().create(ann_lee()).await;
    assert!(!["1", "2", "3", "4", "5"].contains(&created.id.as_str()));

    let employees = store.employees().list().await;
    assert_eq!(employees.len(), 6);
    let ann = employees
        .iter()
        .find(|e| e.full_name() == "Ann Lee")
        .expect("Ann Lee listed");
    assert_eq!(ann.status, EmployeeStatus::Active);
    // Lists never carry reviews.
    assert!(employees.iter().all(|e| e.performance_reviews.is_none()));
}

#[tokio::test]
async fn update_overwrites_only_patched_fields() -> Result<()> {
    let store = seeded_store();
    let before = store.employees().get("3").await.context("Michael")?;

    let updated = store
        .employees()
        .update(
            "3",
            EmployeePatch {
                status: Some(EmployeeStatus::Inactive),
                phone: Some(None),
                ..EmployeePatch::default()
            },
        )
        .await
        .context("update hit")?;
    assert_eq!(updated.status, EmployeeStatus::Inactive);
    assert_eq!(updated.phone, None);

    let after = store.employees().get("3").await.context("Michael again")?;
    assert_eq!(after.first_name, before.first_name);
    assert_eq!(after.email, before.email);
    assert_eq!(after.avatar, before.avatar);
    assert_eq!(after.hire_date, before.hire_date);
    assert_eq!(after.performance_reviews, before.performance_reviews);
    assert_eq!(after.status, EmployeeStatus::Inactive);
    assert_eq!(after.phone, None);
    Ok(())
}

#[tokio::test]
async fn update_of_missing_id_changes_nothing() {
    let store = seeded_store();
    let before = store.snapshot().await;
    let result = store
        .roles()
        .update(
            "999",
            RolePatch {
                title: Some("Ghost".into()),
                ..RolePatch::default()
            },
        )
        .await;
    assert!(result.is_none());
    assert_eq!(store.snapshot().await.roles, before.roles);
}

#[tokio::test]
async fn delete_removes_exactly_one_record() -> Result<()> {
    let store = seeded_store();
    let removed = store.departments().delete("3").await.context("delete hit")?;
    assert_eq!(removed.name, "Human Resources");
    assert!(store.departments().get("3").await.is_none());
    assert_eq!(store.departments().list().await.len(), 3);
    assert!(store.departments().delete("3").await.is_none());
    Ok(())
}

#[tokio::test]
async fn list_length_tracks_creates_and_deletes() -> Result<()> {
    let store = RecordStore::empty(Latency::none());
    assert!(store.departments().list().await.is_empty());

    let mut ids = Vec::new();
    for name in ["Sales", "Support", "Finance"] {
        let created = store
            .departments()
            .create(NewDepartment {
                name: name.into(),
                description: format!("{name} team"),
                manager_id: None,
                parent_department_id: None,
                created_at: day(2024, 5, 1),
            })
            .await;
        ids.push(created.id);
    }
    assert_eq!(store.departments().list().await.len(), 3);

    store
        .departments()
        .update(
            &ids[0],
            DepartmentPatch {
                parent_department_id: Some(Some(ids[1].clone())),
                ..DepartmentPatch::default()
            },
        )
        .await
        .context("update hit")?;
    assert_eq!(store.departments().list().await.len(), 3);

    store.departments().delete(&ids[1]).await.context("delete hit")?;
    let names: Vec<String> = store
        .departments()
        .list()
        .await
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, vec!["Sales", "Finance"]);
    Ok(())
}

#[tokio::test]
async fn seeded_dashboard_stats() {
    let store = seeded_store();
    let stats = store
        .dashboard_stats_at(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap())
        .await;
    assert_eq!(stats.total_employees, 5);
    assert_eq!(stats.active_employees, 4);
    assert_eq!(stats.departments_count, 4);
    assert_eq!(stats.roles_count, 5);
    assert_eq!(stats.recent_reviews, 0);
    assert_eq!(stats.avg_performance, Some(4.125));
}

#[tokio::test]
async fn dashboard_stats_follow_writes() {
    let store = seeded_store();
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    store
        .performance_reviews()
        .create(review_of("1", 5.0, day(2024, 5, 20)))
        .await;
    store
        .employees()
        .update(
            "4",
            EmployeePatch {
                status: Some(EmployeeStatus::Active),
                ..EmployeePatch::default()
            },
        )
        .await;
    store
        .roles()
        .create(NewRole {
            title: "Intern".into(),
            description: "Learning the ropes".into(),
            responsibilities: Vec::new(),
            department_id: "2".into(),
            level: 1,
            is_manager: false,
        })
        .await;

    let stats = store.dashboard_stats_at(now).await;
    assert_eq!(stats.active_employees, 5);
    assert_eq!(stats.roles_count, 6);
    assert_eq!(stats.recent_reviews, 1);
    assert_eq!(stats.avg_performance, Some((4.5 + 4.2 + 3.8 + 4.0 + 5.0) / 5.0));
}

#[tokio::test]
async fn employee_get_reflects_current_reviews() -> Result<()> {
    let store = seeded_store();
    let john = store.employees().get("1").await.context("John")?;
    assert_eq!(john.performance_reviews, Some(Vec::new()));

    let review = store
        .performance_reviews()
        .create(review_of("1", 3.5, day(2024, 2, 1)))
        .await;
    let john = store.employees().get("1").await.context("John again")?;
    assert_eq!(john.performance_reviews, Some(vec![review.clone()]));

    store
        .performance_reviews()
        .delete(&review.id)
        .await
        .context("delete review")?;
    let john = store.employees().get("1").await.context("John once more")?;
    assert_eq!(john.performance_reviews, Some(Vec::new()));
    Ok(())
}

#[tokio::test]
async fn dangling_references_are_tolerated() -> Result<()> {
    let store = seeded_store();
    store.roles().delete("1").await.context("delete CEO role")?;
    let john = store.employees().get("1").await.context("John")?;
    assert_eq!(john.role_id, "1");

    let orphan = store
        .performance_reviews()
        .create(review_of("404", 2.0, day(2024, 1, 1)))
        .await;
    assert_eq!(
        store.performance_reviews().list_for(Some("404")).await,
        vec![orphan]
    );
    Ok(())
}

#[tokio::test]
async fn stores_are_isolated_but_clones_share_state() {
    let first = seeded_store();
    let second = seeded_store();
    let shared = first.clone();

    shared.employees().create(ann_lee()).await;
    assert_eq!(first.employees().list().await.len(), 6);
    assert_eq!(second.employees().list().await.len(), 5);
}

#[tokio::test]
async fn empty_store_has_no_average() {
    let store = RecordStore::empty(Latency::none());
    let stats = store.dashboard_stats().await;
    assert_eq!(stats.total_employees, 0);
    assert_eq!(stats.active_employees, 0);
    assert_eq!(stats.departments_count, 0);
    assert_eq!(stats.roles_count, 0);
    assert_eq!(stats.recent_reviews, 0);
    assert_eq!(stats.avg_performance, None);
}

#[tokio::test]
async fn average_disappears_with_the_last_review() -> Result<()> {
    let store = seeded_store();
    for id in ["1", "2", "3"] {
        store.performance_reviews().delete(id).await.context("seeded review")?;
    }
    assert_eq!(store.dashboard_stats().await.avg_performance, Some(4.0));

    store.performance_reviews().delete("4").await.context("last review")?;
    let stats = store.dashboard_stats().await;
    assert_eq!(stats.avg_performance, None);
    assert_eq!(stats.total_employees, 5);
    Ok(())
}

#[tokio::test]
async fn empty_employee_id_lists_every_review() {
    let store = seeded_store();
    let all = store.performance_reviews().list().await;
    assert_eq!(store.performance_reviews().list_for(Some("")).await, all);
    assert_eq!(store.performance_reviews().list_for(None).await, all);
}
