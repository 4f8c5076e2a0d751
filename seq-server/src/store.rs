use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::Result;

/// Contents of the biz file
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BizConfig {
    /// tickets issued today
    #[serde(default)]
    pub seq: i32,
}

/// Day counter persisted to the biz file.
///
/// The lock covers both the counter and the file write, so the file always
/// holds the latest value.
pub struct SeqStore {
    path: PathBuf,
    cfg: Mutex<BizConfig>,
}

impl SeqStore {
    /// Load the counter from `path`. A missing file starts at zero and is
    /// created, a malformed one is an error.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let cfg = match tokio::fs::read_to_string(&path).await {
            Ok(content) if content.trim().is_empty() => BizConfig::default(),
            Ok(content) => {
                debug!("content is {}", content);
                serde_yaml::from_str(&content)?
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("biz file {} not found, start from zero", path.display());
                if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(dir).await?;
                }
                let cfg = BizConfig::default();
                write(&path, &cfg).await?;
                cfg
            }
            Err(err) => return Err(err.into()),
        };
        info!("bizcfg is {:?}", cfg);

        Ok(Self {
            path,
            cfg: Mutex::new(cfg),
        })
    }

    pub async fn current(&self) -> i32 {
        self.cfg.lock().await.seq
    }

    /// Issue the next number. A failed write is logged, the number is
    /// still handed out.
    pub async fn tick(&self) -> i32 {
        let mut cfg = self.cfg.lock().await;
        cfg.seq = cfg.seq.wrapping_add(1);
        if let Err(err) = write(&self.path, &cfg).await {
            error!("write bizCfg error: {}", err);
        }
        cfg.seq
    }

    pub async fn reset(&self) -> Result<()> {
        let mut cfg = self.cfg.lock().await;
        info!("reset seq, before reset seq is {}", cfg.seq);
        cfg.seq = 0;
        write(&self.path, &cfg).await
    }
}

async fn write(path: &Path, cfg: &BizConfig) -> Result<()> {
    let data = serde_yaml::to_string(cfg)?;
    tokio::fs::write(path, data).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn read(path: &Path) -> BizConfig {
        let content = tokio::fs::read_to_string(path).await.unwrap();
        serde_yaml::from_str(&content).unwrap()
    }

    #[tokio::test]
    async fn test_open_missing_file_creates_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config").join("biz.yaml");

        let store = SeqStore::open(&path).await.unwrap();
        assert_eq!(store.current().await, 0);
        assert_eq!(read(&path).await, BizConfig { seq: 0 });
    }

    #[tokio::test]
    async fn test_open_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("biz.yaml");
        tokio::fs::write(&path, "seq: 17\n").await.unwrap();

        let store = SeqStore::open(&path).await.unwrap();
        assert_eq!(store.current().await, 17);
        assert_eq!(store.tick().await, 18);
    }

    #[tokio::test]
    async fn test_open_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("biz.yaml");
        tokio::fs::write(&path, "seq: [1, 2\n").await.unwrap();

        assert!(matches!(
            SeqStore::open(&path).await,
            Err(crate::Error::Yaml(_))
        ));
    }

    #[tokio::test]
    async fn test_tick_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("biz.yaml");
        let store = SeqStore::open(&path).await.unwrap();

        assert_eq!(store.tick().await, 1);
        assert_eq!(store.tick().await, 2);
        assert_eq!(read(&path).await, BizConfig { seq: 2 });

        // a fresh store picks up where the last one stopped
        let reopened = SeqStore::open(&path).await.unwrap();
        assert_eq!(reopened.tick().await, 3);
    }

    #[tokio::test]
    async fn test_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("biz.yaml");
        let store = SeqStore::open(&path).await.unwrap();
        store.tick().await;
        store.tick().await;

        store.reset().await.unwrap();
        assert_eq!(store.current().await, 0);
        assert_eq!(read(&path).await, BizConfig { seq: 0 });
        assert_eq!(store.tick().await, 1);
    }

    #[tokio::test]
    async fn test_concurrent_ticks_are_unique() {
        let dir = tempfile::tempdir().unwrap();
        let store = std::sync::Arc::new(SeqStore::open(dir.path().join("biz.yaml")).await.unwrap());

        let handles = (0..20)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.tick().await })
            })
            .collect::<Vec<_>>();
        let mut issued = Vec::new();
        for handle in handles {
            issued.push(handle.await.unwrap());
        }
        issued.sort();
        assert_eq!(issued, (1..=20).collect::<Vec<_>>());
        assert_eq!(store.current().await, 20);
    }
}
