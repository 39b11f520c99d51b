use std::sync::Arc;

use frontdesk_core::models::appointment::Appointment;
use frontdesk_core::models::patient::Patient;
use frontdesk_core::models::prescription::Prescription;
use frontdesk_dashboard::{Clients, DashboardConfig};
use frontdesk_storage::S3Store;

use crate::aws;
use crate::config::{Backend, FrontdeskConfig};

/// One transport client per collection for the configured backend.
pub async fn build_clients(backend: &Backend) -> eyre::Result<Clients> {
    match backend {
        Backend::Memory { latency_scale } => {
            tracing::info!(latency_scale, "using in-memory sample backend");
            Ok(Clients::sample(*latency_scale)?)
        }
        Backend::S3 {
            region,
            bucket,
            credentials,
        } => {
            let sdk_config = aws::build_aws_config(region, credentials).await;
            let s3 = frontdesk_storage::client::build_client(&sdk_config);
            tracing::info!(region = %region, bucket = %bucket, "using S3 backend");
            Ok(Clients::new(
                Arc::new(S3Store::<Appointment>::new(s3.clone(), bucket.clone())),
                Arc::new(S3Store::<Patient>::new(s3.clone(), bucket.clone())),
                Arc::new(S3Store::<Prescription>::new(s3, bucket.clone())),
            ))
        }
    }
}

pub fn dashboard_config(config: &FrontdeskConfig) -> DashboardConfig {
    DashboardConfig {
        default_doctor: config.default_doctor.clone(),
        server_side_filters: config.server_side_filters,
        ..DashboardConfig::default()
    }
}
