//! JSON export of the machine registry

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::Machine;

/// Serialize the machine list as a pretty-printed JSON array
pub fn to_json(machines: &[Machine]) -> Result<String> {
    serde_json::to_string_pretty(machines).context("Failed to serialize machine registry")
}

/// Directory the save dialog opens in
pub fn default_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Write the machine list to `path`
pub async fn write(path: &Path, machines: &[Machine]) -> Result<()> {
    let json = to_json(machines)?;
    log::debug!("Current config: {json}");
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_json_parses_back() {
        let machines = catalog::initial_machines();
        let json = to_json(&machines).unwrap();
        let back: Vec<Machine> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, machines);
    }

    #[test]
    fn test_json_shape() {
        let machines = catalog::initial_machines();
        let value: serde_json::Value = serde_json::from_str(&to_json(&machines).unwrap()).unwrap();
        let first = &value[0];
        assert_eq!(first["id"], "m1");
        assert_eq!(first["status"], "WORKING");
        assert_eq!(first["bbox"]["width"], 250.0);
        assert!(first.get("model3d").is_none());
    }

    #[tokio::test]
    async fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("factory_config.json");
        let machines = catalog::initial_machines();

        write(&path, &machines).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let back: Vec<Machine> = serde_json::from_str(&contents).unwrap();
        assert_eq!(back.len(), machines.len());
    }

    #[tokio::test]
    async fn test_write_reports_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let err = write(&path, &catalog::initial_machines()).await.unwrap_err();
        assert!(err.to_string().contains("Failed to write"));
    }
}
