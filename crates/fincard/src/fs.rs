use std::path::Path;
use tracing::trace;

/// Reads a `.json` file from `path`.
pub(crate) async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    trace!("reading file path: {path:?}");
    let file = tokio::fs::read(path).await?;
    trace!("file read; deserializing bytes ...");
    let data: T = serde_json::from_slice(&file)?;
    Ok(data)
}

/// Writes `data` to `path` as pretty `.json`, creating parent directories as needed.
pub(crate) async fn write_json<T: serde::Serialize>(path: &Path, data: &T) -> anyhow::Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        trace!("checking directory path: {dir:?}");
        tokio::fs::create_dir_all(dir).await?;
    }
    let bytes = serde_json::to_vec_pretty(data)?;
    let len = bytes.len();
    tokio::fs::write(path, bytes).await?;
    trace!("{len} bytes written to {path:?}");
    Ok(())
}
