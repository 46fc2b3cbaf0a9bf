use segment_config_domain::{Workspace, WorkspaceList};

use crate::api::{paths, ApiClient, ApiError};

impl ApiClient {
    /// List every workspace the access token can see
    pub async fn list_workspaces(&self) -> Result<WorkspaceList, ApiError> {
        self.get(&paths::workspaces()).await
    }

    /// Fetch the workspace this client is bound to
    pub async fn get_workspace(&self) -> Result<Workspace, ApiError> {
        self.get(&paths::workspace(self.workspace())).await
    }
}
