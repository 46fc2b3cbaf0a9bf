use segment_config_domain::constants::SOURCE_CONFIG_UPDATE_PATHS;
use segment_config_domain::{
    Source, SourceConfig, SourceConfigUpdateRequest, SourceCreateRequest, SourceList, UpdateMask,
};
use tracing::info;

use crate::api::{paths, ApiClient, ApiError};

impl ApiClient {
    /// List the sources of the workspace (first page only)
    pub async fn list_sources(&self) -> Result<SourceList, ApiError> {
        self.get(&paths::sources(self.workspace())).await
    }

    pub async fn get_source(&self, src: &str) -> Result<Source, ApiError> {
        self.get(&paths::source(self.workspace(), src)).await
    }

    /// Create a source named `src` from the catalog entry `catalog_name`
    /// (e.g. `catalog/sources/javascript`)
    pub async fn create_source(&self, src: &str, catalog_name: &str) -> Result<Source, ApiError> {
        let source = Source {
            name: paths::source(self.workspace(), src),
            catalog_name: catalog_name.to_string(),
            ..Default::default()
        };

        let created: Source = self
            .post(&paths::sources(self.workspace()), &SourceCreateRequest { source: &source })
            .await?;
        info!(source = %created.name, "source created");
        Ok(created)
    }

    /// Delete a source; the response body is ignored
    pub async fn delete_source(&self, src: &str) -> Result<(), ApiError> {
        self.delete(&paths::source(self.workspace(), src)).await?;
        info!(source = src, "source deleted");
        Ok(())
    }

    /// Fetch the schema configuration of a source
    pub async fn get_source_config(&self, src: &str) -> Result<SourceConfig, ApiError> {
        self.get(&paths::source_config(self.workspace(), src)).await
    }

    /// Replace the schema configuration of a source
    ///
    /// All twelve schema settings are sent under a fixed update mask, so the
    /// stored configuration ends up equal to `config`.
    pub async fn update_source_config(
        &self,
        src: &str,
        config: &SourceConfig,
    ) -> Result<SourceConfig, ApiError> {
        let request = SourceConfigUpdateRequest {
            config,
            update_mask: UpdateMask::new(SOURCE_CONFIG_UPDATE_PATHS),
        };

        self.patch(&paths::source_config(self.workspace(), src), &request).await
    }
}
