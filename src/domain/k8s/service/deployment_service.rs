use anyhow::Result;
use chrono::Utc;
use kube::Client;

use crate::api::dto::k8s_dto::DeploymentDto;
use crate::core::client::deployments::fetch_deployments;
use crate::core::client::mappers::map_deployment_to_dto;
use crate::domain::k8s::scope::NamespaceScope;

/// List deployments in the scope as table-ready rows.
pub async fn list_deployments(
    client: &Client,
    scope: &NamespaceScope,
) -> Result<Vec<DeploymentDto>> {
    let deployments = fetch_deployments(client, scope).await?;

    let now = Utc::now();
    Ok(deployments
        .iter()
        .map(|deployment| map_deployment_to_dto(deployment, now))
        .collect())
}
