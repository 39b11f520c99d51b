use std::collections::BTreeSet;
use std::path::Path;

use crate::config::CredentialSource;

/// Build an `SdkConfig` from a region and credential source.
pub async fn build_aws_config(region: &str, creds: &CredentialSource) -> aws_config::SdkConfig {
    let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()));

    match creds {
        CredentialSource::Inline {
            access_key_id,
            secret_access_key,
            session_token,
        } => {
            builder = builder.credentials_provider(aws_sdk_s3::config::Credentials::new(
                access_key_id,
                secret_access_key,
                session_token.clone(),
                None,
                "frontdesk-config",
            ));
        }
        CredentialSource::Profile { profile_name } => {
            builder = builder.profile_name(profile_name);
        }
        CredentialSource::DefaultChain => {}
    }

    builder.load().await
}

/// Profile names from `~/.aws/credentials` and `~/.aws/config`, without
/// `default`.
pub fn list_aws_profiles() -> Vec<String> {
    let Some(home) = dirs::home_dir() else {
        return Vec::new();
    };

    let aws_dir = home.join(".aws");
    let mut profiles = BTreeSet::new();
    collect_sections(&aws_dir.join("credentials"), &mut profiles, false);
    collect_sections(&aws_dir.join("config"), &mut profiles, true);
    profiles.remove("default");
    profiles.into_iter().collect()
}

fn collect_sections(path: &Path, profiles: &mut BTreeSet<String>, strip_profile_prefix: bool) {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return;
    };
    profiles.extend(section_names(&contents, strip_profile_prefix));
}

/// INI section headers. `~/.aws/config` spells them `[profile name]`.
pub fn section_names(contents: &str, strip_profile_prefix: bool) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter_map(|line| line.strip_prefix('[')?.strip_suffix(']'))
        .map(|name| {
            let name = name.trim();
            match name.strip_prefix("profile ") {
                Some(stripped) if strip_profile_prefix => stripped.trim(),
                _ => name,
            }
        })
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
