use anyhow::{Context, Result};
use entity::{Record, RolePatch};
use platform_api::{Change, Notice, Tone};
use workforce_tests::{ann_lee, day, review_of, seeded_store};

#[tokio::test]
async fn employee_lifecycle_notices() -> Result<()> {
    let store = seeded_store();
    let ann = store.employees().create(ann_lee()).await;
    let created = Notice::employee(Change::Created, &ann);
    assert_eq!(created.title, "Employee created");
    assert_eq!(created.description, "Ann Lee has been added to the system.");
    assert_eq!(created.tone, Tone::Neutral);

    let updated = store
        .employees()
        .update(&ann.id, Default::default())
        .await
        .context("update hit")?;
    let notice = Notice::employee(Change::Updated, &updated);
    assert_eq!(notice.title, "Employee updated");
    assert_eq!(notice.description, "Ann Lee's information has been updated.");

    let removed = store.employees().delete(&ann.id).await.context("delete hit")?;
    let notice = Notice::employee(Change::Removed, &removed);
    assert_eq!(notice.title, "Employee removed");
    assert_eq!(notice.description, "Ann Lee has been removed from the system.");
    assert_eq!(notice.tone, Tone::Destructive);
    Ok(())
}

#[tokio::test]
async fn role_and_department_notices_use_their_labels() -> Result<()> {
    let store = seeded_store();
    let role = store
        .roles()
        .update(
            "3",
            RolePatch {
                title: Some("Staff Engineer".into()),
                ..RolePatch::default()
            },
        )
        .await
        .context("role update")?;
    let notice = Notice::role(Change::Updated, &role);
    assert_eq!(notice.title, "Role updated");
    assert_eq!(notice.description, "Staff Engineer role has been updated.");

    let department = store.departments().delete("2").await.context("department delete")?;
    let notice = Notice::department(Change::Removed, &department);
    assert_eq!(notice.title, "Department removed");
    assert_eq!(
        notice.description,
        "Engineering department has been removed from the system."
    );
    assert_eq!(notice.tone, Tone::Destructive);

    let created = Notice::department(Change::Created, &department);
    assert_eq!(
        created.description,
        "Engineering department has been added to the system."
    );
    Ok(())
}

#[tokio::test]
async fn review_notices_need_the_reviewed_employee() -> Result<()> {
    let store = seeded_store();
    let change = store
        .performance_reviews()
        .create_reviewed(review_of("4", 4.1, day(2024, 3, 1)))
        .await;
    let notice =
        Notice::review(Change::Created, change.employee.as_ref()).context("Emily exists")?;
    assert_eq!(notice.title, "Performance review created");
    assert_eq!(notice.description, "Review for Emily Williams has been recorded.");

    let orphan = store
        .performance_reviews()
        .create_reviewed(review_of("404", 1.0, day(2024, 3, 1)))
        .await;
    assert_eq!(orphan.review.id().len(), 9);
    let removed = store
        .performance_reviews()
        .delete_reviewed(&orphan.review.id)
        .await
        .context("orphan review")?;
    assert!(removed.employee.is_none());
    assert!(Notice::review(Change::Removed, removed.employee.as_ref()).is_none());
    Ok(())
}
