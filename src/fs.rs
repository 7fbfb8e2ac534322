use std::path::Path;

use tokio::fs;

use crate::{CaptureError, Result};

/// 递归创建目录，目录已存在时直接返回
pub async fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .map_err(|e| CaptureError::fs(path, e))
}

/// 把文件移动到目标位置
///
/// 优先使用 rename；失败时（例如跨设备）退化为复制后删除源文件。
pub async fn move_file(from: &Path, to: &Path) -> Result<()> {
    match fs::rename(from, to).await {
        Ok(()) => Ok(()),
        Err(rename_err) => {
            tracing::debug!(
                "rename {} -> {} failed ({}), falling back to copy",
                from.display(),
                to.display(),
                rename_err
            );
            fs::copy(from, to)
                .await
                .map_err(|e| CaptureError::fs(to, e))?;
            fs::remove_file(from)
                .await
                .map_err(|e| CaptureError::fs(from, e))
        }
    }
}
