//! Collaborator seam for fetching projects and tasks.

use ticktick_api::{Project, Result, Task, TickTickClient};

/// Contract the aggregator consumes to reach the remote service.
///
/// The concrete client implements it by delegation; tests implement it with
/// in-memory fixtures. The aggregator takes the handle explicitly at call
/// time — there is no global, lazily-initialized client anywhere in this
/// crate, and initialization/credential lifecycle belongs to the
/// implementation behind the trait.
#[allow(async_fn_in_trait)]
pub trait ProjectSource {
    /// Fetches all projects visible to the account.
    async fn list_projects(&self) -> Result<Vec<Project>>;

    /// Fetches one project's tasks, in the service's order.
    async fn list_tasks(&self, project_id: &str) -> Result<Vec<Task>>;
}

impl ProjectSource for TickTickClient {
    async fn list_projects(&self) -> Result<Vec<Project>> {
        TickTickClient::list_projects(self).await
    }

    async fn list_tasks(&self, project_id: &str) -> Result<Vec<Task>> {
        TickTickClient::list_tasks(self, project_id).await
    }
}
