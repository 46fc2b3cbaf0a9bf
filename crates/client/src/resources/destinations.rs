use segment_config_domain::{
    Destination, DestinationCreateRequest, DestinationList, DestinationUpdateRequest, UpdateMask,
};
use tracing::info;

use crate::api::{paths, ApiClient, ApiError};

impl ApiClient {
    /// List the destinations connected to a source
    pub async fn list_destinations(&self, src: &str) -> Result<DestinationList, ApiError> {
        self.get(&paths::destinations(self.workspace(), src)).await
    }

    /// Fetch one destination of a source by its short name
    pub async fn get_destination(&self, src: &str, dest: &str) -> Result<Destination, ApiError> {
        self.get(&paths::destination(self.workspace(), src, dest)).await
    }

    /// Connect a new destination to a source
    pub async fn create_destination(
        &self,
        src: &str,
        destination: &Destination,
    ) -> Result<Destination, ApiError> {
        let created: Destination = self
            .post(
                &paths::destinations(self.workspace(), src),
                &DestinationCreateRequest { destination },
            )
            .await?;
        info!(destination = %created.name, "destination created");
        Ok(created)
    }

    /// Update the fields of `destination` named in `update_mask`, e.g.
    /// `destination.enabled` or `destination.config`
    pub async fn update_destination(
        &self,
        src: &str,
        dest: &str,
        destination: &Destination,
        update_mask: UpdateMask,
    ) -> Result<Destination, ApiError> {
        let request = DestinationUpdateRequest { destination, update_mask };
        self.patch(&paths::destination(self.workspace(), src, dest), &request).await
    }

    /// Delete a destination; the response body is ignored
    pub async fn delete_destination(&self, src: &str, dest: &str) -> Result<(), ApiError> {
        self.delete(&paths::destination(self.workspace(), src, dest)).await?;
        info!(source = src, destination = dest, "destination deleted");
        Ok(())
    }
}
