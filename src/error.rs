use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("无效的 URL: {0}")]
    InvalidUrl(String),

    #[error("URL 解析错误: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("无效的时长: {0}")]
    InvalidDuration(String),

    #[error("HTTP 请求失败: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("在 {duration:?} 内没有收到响应: {url}")]
    NoResponse { duration: Duration, url: String },

    #[error("Request Failed. Status Code: {status} ({url})")]
    BadStatus { status: u16, url: String },

    #[error("文件系统错误 {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CaptureError {
    /// 包装 IO 错误并附带出错的路径
    pub fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CaptureError::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// 非 200 响应时的状态码
    pub fn status(&self) -> Option<u16> {
        match self {
            CaptureError::BadStatus { status, .. } => Some(*status),
            CaptureError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for streamcap crate
pub type Result<T> = std::result::Result<T, CaptureError>;
