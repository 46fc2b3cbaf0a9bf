use segment_config_domain::constants::TRACKING_PLAN_UPDATE_PATHS;
use segment_config_domain::{
    TrackingPlan, TrackingPlanCreateRequest, TrackingPlanList, TrackingPlanSourceConnection,
    TrackingPlanSourceConnectionCreateRequest, TrackingPlanSourceConnectionList,
    TrackingPlanUpdateRequest, UpdateMask,
};
use tracing::info;

use crate::api::{paths, ApiClient, ApiError};

fn body_text(body: &[u8]) -> String {
    String::from_utf8_lossy(body).into_owned()
}

impl ApiClient {
    /// List the tracking plans of the workspace
    pub async fn list_tracking_plans(&self) -> Result<TrackingPlanList, ApiError> {
        self.get(&paths::tracking_plans(self.workspace())).await
    }

    /// Fetch a tracking plan by id, e.g. `rs_123`
    pub async fn get_tracking_plan(&self, plan_id: &str) -> Result<TrackingPlan, ApiError> {
        self.get(&paths::tracking_plan(self.workspace(), plan_id)).await
    }

    /// Create a tracking plan; the server assigns its name
    pub async fn create_tracking_plan(
        &self,
        tracking_plan: &TrackingPlan,
    ) -> Result<TrackingPlan, ApiError> {
        let created: TrackingPlan = self
            .post(
                &paths::tracking_plans(self.workspace()),
                &TrackingPlanCreateRequest { tracking_plan },
            )
            .await?;
        info!(tracking_plan = %created.name, "tracking plan created");
        Ok(created)
    }

    /// Replace the display name and rules of a tracking plan
    pub async fn update_tracking_plan(
        &self,
        plan_id: &str,
        tracking_plan: &TrackingPlan,
    ) -> Result<TrackingPlan, ApiError> {
        let request = TrackingPlanUpdateRequest {
            update_mask: UpdateMask::new(TRACKING_PLAN_UPDATE_PATHS),
            tracking_plan,
        };

        self.put(&paths::tracking_plan(self.workspace(), plan_id), &request).await
    }

    /// Delete a tracking plan; the response body is ignored
    pub async fn delete_tracking_plan(&self, plan_id: &str) -> Result<(), ApiError> {
        self.delete(&paths::tracking_plan(self.workspace(), plan_id)).await?;
        info!(plan_id, "tracking plan deleted");
        Ok(())
    }

    /// Attach source `src` of this workspace to a tracking plan
    ///
    /// # Errors
    ///
    /// Returns `ApiError::UnexpectedBody` if the response is not a connection
    pub async fn create_tracking_plan_source_connection(
        &self,
        plan_id: &str,
        src: &str,
    ) -> Result<TrackingPlanSourceConnection, ApiError> {
        let request = TrackingPlanSourceConnectionCreateRequest {
            source_name: paths::source(self.workspace(), src),
        };
        let value = serde_json::to_value(&request).map_err(|e| ApiError::Encode(e.to_string()))?;

        let body = self
            .execute(
                reqwest::Method::POST,
                &paths::source_connections(self.workspace(), plan_id),
                Some(value),
            )
            .await?;

        let connection = serde_json::from_slice::<TrackingPlanSourceConnection>(&body)
            .map_err(|_| ApiError::UnexpectedBody(body_text(&body)))?;
        info!(plan_id, source = src, "tracking plan source connected");
        Ok(connection)
    }

    /// List the sources connected to a tracking plan
    pub async fn list_tracking_plan_sources(
        &self,
        plan_id: &str,
    ) -> Result<Vec<TrackingPlanSourceConnection>, ApiError> {
        let list: TrackingPlanSourceConnectionList =
            self.get(&paths::source_connections(self.workspace(), plan_id)).await?;
        Ok(list.connections)
    }

    /// Detach source `src` from a tracking plan
    ///
    /// # Errors
    ///
    /// Returns `ApiError::UnexpectedBody` unless the API answers with `{}`
    pub async fn delete_tracking_plan_source_connection(
        &self,
        plan_id: &str,
        src: &str,
    ) -> Result<(), ApiError> {
        let body = self.delete(&paths::source_connection(self.workspace(), plan_id, src)).await?;

        let text = body_text(&body);
        if text.trim() != "{}" {
            return Err(ApiError::UnexpectedBody(text));
        }

        info!(plan_id, source = src, "tracking plan source disconnected");
        Ok(())
    }
}
