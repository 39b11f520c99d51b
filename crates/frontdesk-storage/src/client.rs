use aws_sdk_s3::Client;

/// Build an S3 client from an already-resolved SDK config.
pub fn build_client(sdk_config: &aws_config::SdkConfig) -> Client {
    Client::new(sdk_config)
}

/// Build an S3 client using the default credential chain for `region`.
pub async fn build_default_client(region: &str) -> Client {
    let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()))
        .load()
        .await;
    Client::new(&config)
}
