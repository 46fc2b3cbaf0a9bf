use segment_config_domain::constants::DESTINATION_FILTER_UPDATE_PATHS;
use segment_config_domain::{
    DestinationFilter, DestinationFilterList, DestinationFilterRequest, UpdateMask,
};
use tracing::{debug, info};

use crate::api::{paths, ApiClient, ApiError};

fn filter_request(filter: &DestinationFilter) -> DestinationFilterRequest<'_> {
    DestinationFilterRequest { filter, update_mask: UpdateMask::new(DESTINATION_FILTER_UPDATE_PATHS) }
}

impl ApiClient {
    /// List the filters attached to a destination, in server order
    ///
    /// Actions of a kind this client does not know are dropped from each
    /// filter rather than failing the whole listing.
    pub async fn list_destination_filters(
        &self,
        src: &str,
        dest: &str,
    ) -> Result<Vec<DestinationFilter>, ApiError> {
        let list: DestinationFilterList =
            self.get(&paths::destination_filters(self.workspace(), src, dest)).await?;
        debug!(count = list.filters.len(), "destination filters listed");
        Ok(list.filters)
    }

    /// Fetch one filter by its id (the last segment of its name)
    pub async fn get_destination_filter(
        &self,
        src: &str,
        dest: &str,
        filter_id: &str,
    ) -> Result<DestinationFilter, ApiError> {
        self.get(&paths::destination_filter(self.workspace(), src, dest, filter_id)).await
    }

    /// Create a filter; `filter.name` may be left empty for the server to assign
    pub async fn create_destination_filter(
        &self,
        src: &str,
        dest: &str,
        filter: &DestinationFilter,
    ) -> Result<DestinationFilter, ApiError> {
        let created: DestinationFilter = self
            .post(&paths::destination_filters(self.workspace(), src, dest), &filter_request(filter))
            .await?;
        info!(filter = %created.name, "destination filter created");
        Ok(created)
    }

    /// Overwrite an existing filter, addressed by the id in `filter.name`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` without sending anything when `filter.name`
    /// carries no id.
    pub async fn update_destination_filter(
        &self,
        src: &str,
        dest: &str,
        filter: &DestinationFilter,
    ) -> Result<DestinationFilter, ApiError> {
        let filter_id = filter.filter_id();
        if filter_id.is_empty() {
            return Err(ApiError::InvalidInput(
                "destination filter name has no id to update".to_string(),
            ));
        }

        self.patch(
            &paths::destination_filter(self.workspace(), src, dest, filter_id),
            &filter_request(filter),
        )
        .await
    }

    /// Delete a filter; the response body is ignored
    pub async fn delete_destination_filter(
        &self,
        src: &str,
        dest: &str,
        filter_id: &str,
    ) -> Result<(), ApiError> {
        self.delete(&paths::destination_filter(self.workspace(), src, dest, filter_id)).await?;
        info!(filter_id, "destination filter deleted");
        Ok(())
    }
}
