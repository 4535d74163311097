use aws_config::meta::region::RegionProviderChain;
use aws_config::BehaviorVersion;
use aws_types::SdkConfig;

/// Load the shared SDK config from the standard provider chain.
///
/// Credentials and region come from the environment, the shared config
/// files or instance metadata. Resolution is lazy, so a missing profile
/// only surfaces when the first API call is made.
pub async fn configure_aws() -> SdkConfig {
    let region_provider = RegionProviderChain::default_provider();

    aws_config::defaults(BehaviorVersion::v2024_03_28())
        .region(region_provider)
        .load()
        .await
}
