//! Maps kube-rs / k8s-openapi types onto the wire DTOs

use chrono::{DateTime, Utc};

use crate::api::dto::k8s_dto::{DeploymentDto, PodDto, ServiceDto, ServicePortDto};
use crate::core::client::kube_resources::{Deployment, IntOrString, Pod, Service, ServicePort};

/// Converts a k8s-openapi Pod into a pod table row
pub fn map_pod_to_dto(pod: &Pod, now: DateTime<Utc>) -> PodDto {
    let metadata = &pod.metadata;
    let status = pod.status.as_ref();
    let spec = pod.spec.as_ref();

    let start_time = status.and_then(|s| s.start_time.as_ref()).map(|ts| ts.0);

    let restarts = status
        .and_then(|s| s.container_statuses.as_ref())
        .map(|statuses| statuses.iter().map(|cs| cs.restart_count).sum())
        .unwrap_or(0);

    PodDto {
        name: metadata.name.clone().unwrap_or_default(),
        namespace: metadata.namespace.clone().unwrap_or_default(),
        status: status
            .and_then(|s| s.phase.clone())
            .unwrap_or_else(|| "Unknown".to_string()),
        restarts,
        node: spec.and_then(|s| s.node_name.clone()),
        start_time,
        age: humanize_age(start_time, now),
    }
}

/// Converts a k8s-openapi Deployment into a deployment table row
pub fn map_deployment_to_dto(deployment: &Deployment, now: DateTime<Utc>) -> DeploymentDto {
    let metadata = &deployment.metadata;
    let spec = deployment.spec.as_ref();
    let status = deployment.status.as_ref();

    let images = spec
        .and_then(|s| s.template.spec.as_ref())
        .map(|pod_spec| {
            pod_spec
                .containers
                .iter()
                .filter_map(|container| container.image.clone())
                .collect()
        })
        .unwrap_or_default();

    let creation_time = metadata.creation_timestamp.as_ref().map(|ts| ts.0);

    DeploymentDto {
        name: metadata.name.clone().unwrap_or_default(),
        namespace: metadata.namespace.clone().unwrap_or_default(),
        desired_replicas: spec.and_then(|s| s.replicas).unwrap_or(0),
        ready_replicas: status.and_then(|s| s.ready_replicas).unwrap_or(0),
        available_replicas: status.and_then(|s| s.available_replicas).unwrap_or(0),
        strategy: spec
            .and_then(|s| s.strategy.as_ref())
            .and_then(|strategy| strategy.type_.clone())
            .unwrap_or_else(|| "RollingUpdate".to_string()),
        images,
        creation_time,
        age: humanize_age(creation_time, now),
    }
}

/// Converts a k8s-openapi Service into a service table row
pub fn map_service_to_dto(service: &Service, now: DateTime<Utc>) -> ServiceDto {
    let metadata = &service.metadata;
    let spec = service.spec.as_ref();

    let ports = spec
        .and_then(|s| s.ports.as_ref())
        .map(|ports| ports.iter().map(map_service_port).collect())
        .unwrap_or_default();

    let creation_time = metadata.creation_timestamp.as_ref().map(|ts| ts.0);

    ServiceDto {
        name: metadata.name.clone().unwrap_or_default(),
        namespace: metadata.namespace.clone().unwrap_or_default(),
        type_: spec
            .and_then(|s| s.type_.clone())
            .unwrap_or_else(|| "ClusterIP".to_string()),
        cluster_ip: spec.and_then(|s| s.cluster_ip.clone()),
        ports,
        creation_time,
        age: humanize_age(creation_time, now),
    }
}

fn map_service_port(port: &ServicePort) -> ServicePortDto {
    ServicePortDto {
        port: port.port,
        target_port: port.target_port.as_ref().map(|target| match target {
            IntOrString::Int(value) => value.to_string(),
            IntOrString::String(value) => value.clone(),
        }),
        protocol: port.protocol.clone(),
    }
}

/// Rough age for table rows: whole days, else whole hours, else "<1h".
pub fn humanize_age(since: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(since) = since else {
        return "N/A".to_string();
    };

    let elapsed = now.signed_duration_since(since);
    if elapsed.num_days() > 0 {
        format!("{}d", elapsed.num_days())
    } else if elapsed.num_hours() > 0 {
        format!("{}h", elapsed.num_hours())
    } else {
        "<1h".to_string()
    }
}
