mod inputs;
mod nodes;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, ID, Object, Result, Schema};
use entity::NewRole;
use platform_api::{ApiError, Change, Notice, internal_error};
use platform_db::{
    RecordStore,
    directory::{self, EmployeeFilter, RoleFilter},
};
use tracing::{info_span, instrument};

pub use inputs::*;
pub use nodes::*;

pub type SchemaType = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: RecordStore) -> SchemaType {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

/// Schema without a backing store, for SDL export.
pub fn schema_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

fn store<'a>(ctx: &Context<'a>) -> Result<&'a RecordStore> {
    ctx.data::<RecordStore>()
        .map_err(|_| internal_error(anyhow::anyhow!("record store missing from schema data")))
}

fn employee_scope(employee_id: Option<&ID>) -> Option<&str> {
    employee_id.map(|id| id.as_str())
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    #[instrument(name = "graphql.version", skip_all)]
    async fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    #[instrument(name = "graphql.dashboard_stats", skip_all)]
    async fn dashboard_stats(&self, ctx: &Context<'_>) -> Result<DashboardStatsNode> {
        let stats = store(ctx)?.dashboard_stats().await;
        Ok(stats.into())
    }

    #[instrument(name = "graphql.employees", skip_all)]
    async fn employees(
        &self,
        ctx: &Context<'_>,
        filter: Option<EmployeeFilterInput>,
    ) -> Result<Vec<EmployeeNode>> {
        let filter = EmployeeFilter::from(filter.unwrap_or_default());
        let employees = store(ctx)?.employees().list().await;
        Ok(filter.apply(employees).into_iter().map(Into::into).collect())
    }

    #[instrument(name = "graphql.employee", skip_all, fields(id = %id.as_str()))]
    async fn employee(&self, ctx: &Context<'_>, id: ID) -> Result<Option<EmployeeNode>> {
        let employee = store(ctx)?.employees().get(&id).await;
        Ok(employee.map(Into::into))
    }

    #[instrument(name = "graphql.roles", skip_all)]
    async fn roles(
        &self,
        ctx: &Context<'_>,
        filter: Option<RoleFilterInput>,
    ) -> Result<Vec<RoleNode>> {
        let filter = RoleFilter::try_from(filter.unwrap_or_default()).map_err(|err| err.extend())?;
        let roles = store(ctx)?.roles().list().await;
        Ok(filter.apply(roles).into_iter().map(Into::into).collect())
    }

    #[instrument(name = "graphql.role", skip_all, fields(id = %id.as_str()))]
    async fn role(&self, ctx: &Context<'_>, id: ID) -> Result<Option<RoleNode>> {
        Ok(store(ctx)?.roles().get(&id).await.map(Into::into))
    }

    #[instrument(name = "graphql.departments", skip_all)]
    async fn departments(&self, ctx: &Context<'_>) -> Result<Vec<DepartmentNode>> {
        let departments = store(ctx)?.departments().list().await;
        Ok(departments.into_iter().map(Into::into).collect())
    }

    #[instrument(name = "graphql.department", skip_all, fields(id = %id.as_str()))]
    async fn department(&self, ctx: &Context<'_>, id: ID) -> Result<Option<DepartmentNode>> {
        Ok(store(ctx)?.departments().get(&id).await.map(Into::into))
    }

    /// All reviews, or only those of `employeeId` when given.
    #[instrument(name = "graphql.performance_reviews", skip_all)]
    async fn performance_reviews(
        &self,
        ctx: &Context<'_>,
        employee_id: Option<ID>,
    ) -> Result<Vec<PerformanceReviewNode>> {
        let reviews = store(ctx)?
            .performance_reviews()
            .list_for(employee_scope(employee_id.as_ref()))
            .await;
        Ok(reviews.into_iter().map(Into::into).collect())
    }

    #[instrument(name = "graphql.performance_review", skip_all, fields(id = %id.as_str()))]
    async fn performance_review(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> Result<Option<PerformanceReviewNode>> {
        Ok(store(ctx)?
            .performance_reviews()
            .get(&id)
            .await
            .map(Into::into))
    }

    #[instrument(name = "graphql.department_overview", skip_all)]
    async fn department_overview(&self, ctx: &Context<'_>) -> Result<Vec<DepartmentOverviewNode>> {
        let store = store(ctx)?;
        let (department_repo, employee_repo, role_repo) =
            (store.departments(), store.employees(), store.roles());
        let (departments, employees, roles) = tokio::join!(
            department_repo.list(),
            employee_repo.list(),
            role_repo.list(),
        );
        let overview = info_span!("directory.department_overview")
            .in_scope(|| directory::department_overview(&departments, &employees, &roles));
        Ok(overview.into_iter().map(Into::into).collect())
    }

    #[instrument(name = "graphql.recent_hires", skip_all)]
    async fn recent_hires(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 5)] first: i32,
    ) -> Result<Vec<EmployeeNode>> {
        let limit = usize::try_from(first).map_err(|_| {
            ApiError::invalid(format!("first must not be negative, got {first}")).extend()
        })?;
        let employees = store(ctx)?.employees().list().await;
        Ok(directory::recent_hires(&employees, limit)
            .into_iter()
            .map(Into::into)
            .collect())
    }

    #[instrument(name = "graphql.rating_timeline", skip_all)]
    async fn rating_timeline(
        &self,
        ctx: &Context<'_>,
        employee_id: Option<ID>,
    ) -> Result<Vec<RatingPointNode>> {
        let reviews = store(ctx)?
            .performance_reviews()
            .list_for(employee_scope(employee_id.as_ref()))
            .await;
        Ok(directory::rating_timeline(&reviews)
            .into_iter()
            .map(Into::into)
            .collect())
    }

    #[instrument(name = "graphql.skill_profile", skip_all)]
    async fn skill_profile(
        &self,
        ctx: &Context<'_>,
        employee_id: Option<ID>,
    ) -> Result<Vec<SkillScoreNode>> {
        let reviews = store(ctx)?
            .performance_reviews()
            .list_for(employee_scope(employee_id.as_ref()))
            .await;
        Ok(directory::skill_profile(&reviews)
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    #[instrument(name = "graphql.create_employee", skip_all)]
    async fn create_employee(
        &self,
        ctx: &Context<'_>,
        input: NewEmployeeInput,
    ) -> Result<EmployeePayload> {
        let employee = store(ctx)?.employees().create(input.into()).await;
        Ok(EmployeePayload {
            notice: Some(Notice::employee(Change::Created, &employee)),
            record: Some(employee.into()),
        })
    }

    #[instrument(name = "graphql.update_employee", skip_all, fields(id = %input.id.as_str()))]
    async fn update_employee(
        &self,
        ctx: &Context<'_>,
        input: UpdateEmployeeInput,
    ) -> Result<EmployeePayload> {
        let (id, patch) = input.into_parts();
        let updated = store(ctx)?.employees().update(&id, patch).await;
        Ok(EmployeePayload {
            notice: updated
                .as_ref()
                .map(|employee| Notice::employee(Change::Updated, employee)),
            record: updated.map(Into::into),
        })
    }

    #[instrument(name = "graphql.delete_employee", skip_all, fields(id = %id.as_str()))]
    async fn delete_employee(&self, ctx: &Context<'_>, id: ID) -> Result<DeletePayload> {
        let removed = store(ctx)?.employees().delete(&id).await;
        Ok(DeletePayload {
            deleted: removed.is_some(),
            notice: removed
                .as_ref()
                .map(|employee| Notice::employee(Change::Removed, employee)),
        })
    }

    #[instrument(name = "graphql.create_role", skip_all)]
    async fn create_role(&self, ctx: &Context<'_>, input: NewRoleInput) -> Result<RolePayload> {
        let new = NewRole::try_from(input).map_err(|err| err.extend())?;
        let role = store(ctx)?.roles().create(new).await;
        Ok(RolePayload {
            notice: Some(Notice::role(Change::Created, &role)),
            record: Some(role.into()),
        })
    }

    #[instrument(name = "graphql.update_role", skip_all, fields(id = %input.id.as_str()))]
    async fn update_role(&self, ctx: &Context<'_>, input: UpdateRoleInput) -> Result<RolePayload> {
        let (id, patch) = input.into_parts().map_err(|err| err.extend())?;
        let updated = store(ctx)?.roles().update(&id, patch).await;
        Ok(RolePayload {
            notice: updated
                .as_ref()
                .map(|role| Notice::role(Change::Updated, role)),
            record: updated.map(Into::into),
        })
    }

    #[instrument(name = "graphql.delete_role", skip_all, fields(id = %id.as_str()))]
    async fn delete_role(&self, ctx: &Context<'_>, id: ID) -> Result<DeletePayload> {
        let removed = store(ctx)?.roles().delete(&id).await;
        Ok(DeletePayload {
            deleted: removed.is_some(),
            notice: removed
                .as_ref()
                .map(|role| Notice::role(Change::Removed, role)),
        })
    }

    #[instrument(name = "graphql.create_department", skip_all)]
    async fn create_department(
        &self,
        ctx: &Context<'_>,
        input: NewDepartmentInput,
    ) -> Result<DepartmentPayload> {
        let department = store(ctx)?.departments().create(input.into()).await;
        Ok(DepartmentPayload {
            notice: Some(Notice::department(Change::Created, &department)),
            record: Some(department.into()),
        })
    }

    #[instrument(name = "graphql.update_department", skip_all, fields(id = %input.id.as_str()))]
    async fn update_department(
        &self,
        ctx: &Context<'_>,
        input: UpdateDepartmentInput,
    ) -> Result<DepartmentPayload> {
        let (id, patch) = input.into_parts();
        let updated = store(ctx)?.departments().update(&id, patch).await;
        Ok(DepartmentPayload {
            notice: updated
                .as_ref()
                .map(|department| Notice::department(Change::Updated, department)),
            record: updated.map(Into::into),
        })
    }

    #[instrument(name = "graphql.delete_department", skip_all, fields(id = %id.as_str()))]
    async fn delete_department(&self, ctx: &Context<'_>, id: ID) -> Result<DeletePayload> {
        let removed = store(ctx)?.departments().delete(&id).await;
        Ok(DeletePayload {
            deleted: removed.is_some(),
            notice: removed
                .as_ref()
                .map(|department| Notice::department(Change::Removed, department)),
        })
    }

    #[instrument(name = "graphql.create_performance_review", skip_all)]
    async fn create_performance_review(
        &self,
        ctx: &Context<'_>,
        input: NewPerformanceReviewInput,
    ) -> Result<PerformanceReviewPayload> {
        let change = store(ctx)?
            .performance_reviews()
            .create_reviewed(input.into())
            .await;
        Ok(PerformanceReviewPayload {
            notice: Notice::review(Change::Created, change.employee.as_ref()),
            record: Some(change.review.into()),
        })
    }

    #[instrument(
        name = "graphql.update_performance_review",
        skip_all,
        fields(id = %input.id.as_str())
    )]
    async fn update_performance_review(
        &self,
        ctx: &Context<'_>,
        input: UpdatePerformanceReviewInput,
    ) -> Result<PerformanceReviewPayload> {
        let (id, patch) = input.into_parts();
        let Some(change) = store(ctx)?
            .performance_reviews()
            .update_reviewed(&id, patch)
            .await
        else {
            return Ok(PerformanceReviewPayload {
                record: None,
                notice: None,
            });
        };
        Ok(PerformanceReviewPayload {
            notice: Notice::review(Change::Updated, change.employee.as_ref()),
            record: Some(change.review.into()),
        })
    }

    #[instrument(name = "graphql.delete_performance_review", skip_all, fields(id = %id.as_str()))]
    async fn delete_performance_review(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> Result<DeletePayload> {
        let Some(change) = store(ctx)?.performance_reviews().delete_reviewed(&id).await else {
            return Ok(DeletePayload {
                deleted: false,
                notice: None,
            });
        };
        Ok(DeletePayload {
            deleted: true,
            notice: Notice::review(Change::Removed, change.employee.as_ref()),
        })
    }
}
