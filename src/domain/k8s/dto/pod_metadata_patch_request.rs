use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Body of `PATCH /api/pods/metadata`.
///
/// `metadata` is forwarded verbatim as the `metadata` section of a
/// strategic-merge patch (labels, annotations). All fields decode as
/// optional; the controller rejects requests whose `podName` or `metadata`
/// is missing or empty with a 400.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PodMetadataPatchRequest {
    pub pod_name: Option<String>,

    /// Target namespace; `default` when omitted.
    #[validate(length(min = 1))]
    pub namespace: Option<String>,

    pub metadata: Option<Value>,
}
