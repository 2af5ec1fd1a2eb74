// Config store - durable per-network record and artifact files
// Layout: <data_root>/<network>/node_config.json + config.toml

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::NodeConfig;
use crate::error::SetupError;

const RECORD_FILENAME: &str = "node_config.json";
const ARTIFACT_FILENAME: &str = "config.toml";

/// Durable storage for configuration records and rendered artifacts.
///
/// One subdirectory per network identifier under a fixed data root. The
/// artifact path `<data_root>/<network>/config.toml` is read by the
/// deployment collaborator and must not change. Filesystem failures surface
/// as `Storage`; the store never retries and a failed write leaves the prior
/// files untouched.
pub struct ConfigStore {
    data_root: PathBuf,
}

impl ConfigStore {
    pub fn new(data_root: &Path) -> Self {
        Self {
            data_root: data_root.to_path_buf(),
        }
    }

    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    fn network_dir(&self, network: &str) -> PathBuf {
        self.data_root.join(network)
    }

    fn record_path(&self, network: &str) -> PathBuf {
        self.network_dir(network).join(RECORD_FILENAME)
    }

    /// Path the deployment collaborator reads the artifact from.
    pub fn artifact_path(&self, network: &str) -> PathBuf {
        self.network_dir(network).join(ARTIFACT_FILENAME)
    }

    /// Serialize the record to its per-network file, owner read/write only.
    pub fn save(&self, cfg: &NodeConfig) -> Result<(), SetupError> {
        let json = serde_json::to_string_pretty(cfg)
            .map_err(|e| SetupError::Storage(format!("record serialization: {}", e)))?;

        fs::create_dir_all(self.network_dir(&cfg.network))?;
        write_replace(&self.record_path(&cfg.network), json.as_bytes(), true)?;
        debug!(network = %cfg.network, "record saved");
        Ok(())
    }

    /// Load the record for a network identifier.
    pub fn load(&self, network: &str) -> Result<NodeConfig, SetupError> {
        let path = self.record_path(network);
        if !path.exists() {
            return Err(SetupError::NotFound(format!(
                "saved configuration for \"{}\"",
                network
            )));
        }
        let json = fs::read_to_string(&path)?;
        let cfg: NodeConfig = serde_json::from_str(&json)
            .map_err(|e| SetupError::Storage(format!("record parse: {}", e)))?;
        Ok(cfg)
    }

    /// Whether a rendered artifact exists for this network, i.e. whether it
    /// has ever been configured to completion.
    pub fn exists(&self, network: &str) -> bool {
        self.artifact_path(network).exists()
    }

    /// Write the rendered configuration text, overwriting any prior artifact.
    pub fn save_artifact(&self, network: &str, text: &str) -> Result<(), SetupError> {
        fs::create_dir_all(self.network_dir(network))?;
        write_replace(&self.artifact_path(network), text.as_bytes(), false)?;
        info!(network = %network, path = %self.artifact_path(network).display(), "artifact saved");
        Ok(())
    }
}

/// Write via a temp file in the same directory, then rename into place, so a
/// failed write never leaves a half-overwritten file behind.
fn write_replace(path: &Path, bytes: &[u8], owner_only: bool) -> Result<(), SetupError> {
    let tmp = path.with_extension("tmp");

    #[cfg(unix)]
    {
        use std::io::Write;
        use std::os::unix::fs::OpenOptionsExt;

        let mode = if owner_only { 0o600 } else { 0o644 };
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(mode)
            .open(&tmp)?;
        file.write_all(bytes)?;
    }

    #[cfg(not(unix))]
    {
        let _ = owner_only;
        fs::write(&tmp, bytes)?;
    }

    fs::rename(&tmp, path)?;
    Ok(())
}
