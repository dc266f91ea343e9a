use anyhow::Result;
use chrono::Utc;
use kube::Client;

use crate::api::dto::k8s_dto::ServiceDto;
use crate::core::client::mappers::map_service_to_dto;
use crate::core::client::services::fetch_services;
use crate::domain::k8s::scope::NamespaceScope;

/// List services in the scope as table-ready rows.
pub async fn list_services(client: &Client, scope: &NamespaceScope) -> Result<Vec<ServiceDto>> {
    let services = fetch_services(client, scope).await?;

    let now = Utc::now();
    Ok(services
        .iter()
        .map(|service| map_service_to_dto(service, now))
        .collect())
}
