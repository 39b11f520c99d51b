use std::path::{Path, PathBuf};

use frontdesk_dashboard::compose::DEFAULT_DOCTOR;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 2;

/// Overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "FRONTDESK_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontdeskConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub created_at: jiff::Timestamp,
    pub backend: Backend,
    /// Pre-filled in the compose form. Added in v1.
    pub default_doctor: String,
    /// Send filters with every load instead of filtering locally. Added in v1.
    #[serde(default)]
    pub server_side_filters: bool,
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for FrontdeskConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            created_at: jiff::Timestamp::now(),
            backend: Backend::default(),
            default_doctor: DEFAULT_DOCTOR.to_string(),
            server_side_filters: false,
            json_logs: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Backend {
    /// Bundled sample data in memory. `latency_scale` multiplies the
    /// artificial delays; 0 turns them off.
    Memory { latency_scale: f64 },
    S3 {
        region: String,
        bucket: String,
        credentials: CredentialSource,
    },
}

impl Default for Backend {
    fn default() -> Self {
        Backend::Memory { latency_scale: 1.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialSource {
    Inline {
        access_key_id: String,
        secret_access_key: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        session_token: Option<String>,
    },
    Profile {
        profile_name: String,
    },
    DefaultChain,
}

/// Redacted config info safe to send to the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigInfo {
    pub backend: String,
    pub region: Option<String>,
    pub bucket: Option<String>,
    pub default_doctor: String,
    pub server_side_filters: bool,
    pub created_at: String,
    pub credential_type: Option<String>,
    pub profile_name: Option<String>,
    pub access_key_hint: Option<String>,
}

/// `$FRONTDESK_CONFIG`, else `<config dir>/frontdesk/config.json`.
pub fn config_path() -> eyre::Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("frontdesk").join("config.json"))
}

pub fn has_config() -> bool {
    config_path().map(|p| p.exists()).unwrap_or(false)
}

pub fn load_config() -> eyre::Result<FrontdeskConfig> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> eyre::Result<FrontdeskConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: FrontdeskConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update frontdesk."
        ));
    }

    let obj = json
        .as_object_mut()
        .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;

    // v0 → v1: add default_doctor and server_side_filters
    if from_version < 1 {
        obj.entry("default_doctor")
            .or_insert(serde_json::Value::String(DEFAULT_DOCTOR.to_string()));
        obj.entry("server_side_filters")
            .or_insert(serde_json::Value::Bool(false));
        tracing::info!("migrated config v0 → v1 (added default_doctor)");
    }

    // v1 → v2: top-level latency_scale moves into a tagged backend
    if from_version < 2 {
        let latency_scale = obj
            .remove("latency_scale")
            .unwrap_or(serde_json::Value::from(1.0));
        obj.entry("backend").or_insert(serde_json::json!({
            "type": "memory",
            "latency_scale": latency_scale,
        }));
        tracing::info!("migrated config v1 → v2 (added backend)");
    }

    obj.insert(
        "config_version".to_string(),
        serde_json::Value::Number(CURRENT_VERSION.into()),
    );
    Ok(json)
}

pub fn save_config(config: &FrontdeskConfig) -> eyre::Result<()> {
    save_config_to(config, &config_path()?)
}

pub fn save_config_to(config: &FrontdeskConfig, path: &Path) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // Inline credentials may be in here
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

pub fn delete_config() -> eyre::Result<()> {
    let path = config_path()?;
    if path.exists() {
        std::fs::remove_file(&path)?;
        tracing::info!(path = %path.display(), "config deleted");
    }
    Ok(())
}

pub fn config_info(config: &FrontdeskConfig) -> ConfigInfo {
    let mut info = ConfigInfo {
        backend: String::new(),
        region: None,
        bucket: None,
        default_doctor: config.default_doctor.clone(),
        server_side_filters: config.server_side_filters,
        created_at: config.created_at.to_string(),
        credential_type: None,
        profile_name: None,
        access_key_hint: None,
    };

    match &config.backend {
        Backend::Memory { .. } => info.backend = "memory".to_string(),
        Backend::S3 {
            region,
            bucket,
            credentials,
        } => {
            info.backend = "s3".to_string();
            info.region = Some(region.clone());
            info.bucket = Some(bucket.clone());
            match credentials {
                CredentialSource::Inline {
                    access_key_id,
                    session_token,
                    ..
                } => {
                    let cred_type = if session_token.is_some() {
                        "temporary"
                    } else {
                        "inline"
                    };
                    info.credential_type = Some(cred_type.to_string());
                    info.access_key_hint = Some(redact_access_key(access_key_id));
                }
                CredentialSource::Profile { profile_name } => {
                    info.credential_type = Some("profile".to_string());
                    info.profile_name = Some(profile_name.clone());
                }
                CredentialSource::DefaultChain => {
                    info.credential_type = Some("default_chain".to_string());
                }
            }
        }
    }

    info
}

fn redact_access_key(key: &str) -> String {
    if key.len() <= 8 || !key.is_ascii() {
        return "****".to_string();
    }
    let prefix = &key[..4];
    let suffix = &key[key.len() - 4..];
    format!("{prefix}...{suffix}")
}
