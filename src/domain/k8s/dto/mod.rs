pub mod pod_metadata_patch_request;
