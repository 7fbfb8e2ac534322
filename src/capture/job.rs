use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};
use reqwest::header::CONTENT_TYPE;
use reqwest::{StatusCode, Url};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio::time::sleep;

use crate::capture::naming::{CaptureNaming, SENTINEL_EXTENSION};
use crate::capture::types::{CaptureSummary, StopReason};
use crate::duration::parse_duration;
use crate::http::{Client, ClientOptions};
use crate::logger::{CaptureLogger, TracingLogger};
use crate::mime::{ExtensionLookup, MimeTable, resolve_extension};
use crate::{CaptureError, Result, fs};

/// 一次有时长上限的 HTTP(S) 流采集
///
/// 流写入临时目录，结束后（服务端关闭或时长用尽）移动到最终目录。
/// 每个实例只调用一次 [`StreamCapture::execute`]。
pub struct StreamCapture {
    url: Url,
    duration: Duration,
    basename: String,
    start_time: DateTime<Local>,
    naming: CaptureNaming,
    file_extension: String,
    content_type: Option<String>,
    dir_tmp: PathBuf,
    dir_to_save_to: PathBuf,
    received_bytes_total: u64,
    timed_out: bool,
    failed: bool,
    logger: Arc<dyn CaptureLogger>,
    lookup: Arc<dyn ExtensionLookup>,
    client_options: ClientOptions,
}

impl StreamCapture {
    /// 创建采集任务
    ///
    /// - `url`: http 或 https 地址
    /// - `duration`: 最长采集时长，例如 `PT3S`
    /// - `basename`: 不含路径和扩展名的文件名
    /// - `logger`: 为 `None` 时输出到 `tracing`
    pub fn new(
        url: &str,
        duration: &str,
        basename: &str,
        dir_tmp: impl Into<PathBuf>,
        dir_to_save_to: impl Into<PathBuf>,
        logger: Option<Arc<dyn CaptureLogger>>,
    ) -> Result<Self> {
        let url = Url::parse(url.trim())?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CaptureError::InvalidUrl(format!(
                "unsupported scheme '{}': {}",
                url.scheme(),
                url
            )));
        }

        let start_time = Local::now();

        Ok(Self {
            url,
            duration: parse_duration(duration)?,
            basename: basename.to_string(),
            naming: CaptureNaming::new(basename, &start_time),
            start_time,
            file_extension: SENTINEL_EXTENSION.to_string(),
            content_type: None,
            dir_tmp: dir_tmp.into(),
            dir_to_save_to: dir_to_save_to.into(),
            received_bytes_total: 0,
            timed_out: false,
            failed: false,
            logger: logger.unwrap_or_else(|| Arc::new(TracingLogger)),
            lookup: Arc::new(MimeTable),
            client_options: ClientOptions::default(),
        })
    }

    /// 覆盖开始时间（文件名中的时间戳随之改变）
    pub fn with_start_time(mut self, start_time: DateTime<Local>) -> Self {
        self.naming = CaptureNaming::new(&self.basename, &start_time);
        self.start_time = start_time;
        self
    }

    pub fn with_client_options(mut self, options: ClientOptions) -> Self {
        self.client_options = options;
        self
    }

    pub fn with_extension_lookup(mut self, lookup: Arc<dyn ExtensionLookup>) -> Self {
        self.lookup = lookup;
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn start_time(&self) -> &DateTime<Local> {
        &self.start_time
    }

    pub fn file_base_name(&self) -> &str {
        self.naming.file_base_name()
    }

    pub fn file_extension(&self) -> &str {
        &self.file_extension
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn received_bytes_total(&self) -> u64 {
        self.received_bytes_total
    }

    /// 是否因时长用尽而主动断开
    pub fn timed_out(&self) -> bool {
        self.timed_out
    }

    pub fn temp_path(&self) -> PathBuf {
        self.naming.temp_path(&self.dir_tmp)
    }

    pub fn final_path(&self) -> PathBuf {
        self.naming
            .final_path(&self.dir_to_save_to, &self.file_extension)
    }

    pub fn summary(&self) -> CaptureSummary {
        CaptureSummary {
            received_bytes: self.received_bytes_total,
            stop_reason: if self.failed {
                StopReason::Failed
            } else if self.timed_out {
                StopReason::Timeout
            } else {
                StopReason::StreamEnded
            },
            file_extension: self.file_extension.clone(),
            content_type: self.content_type.clone(),
        }
    }

    /// 执行采集，成功时返回最终文件的绝对路径
    pub async fn execute(&mut self) -> Result<PathBuf> {
        self.logger
            .info(&format!("Starting {}...", self.file_base_name()));

        let result = self.run().await;
        if let Err(e) = &result {
            self.logger.error(&e.to_string());
        }
        result
    }

    async fn run(&mut self) -> Result<PathBuf> {
        tokio::try_join!(
            fs::ensure_dir(&self.dir_tmp),
            fs::ensure_dir(&self.dir_to_save_to)
        )?;

        let temp_path = self.temp_path();
        let mut file = File::create(&temp_path)
            .await
            .map_err(|e| CaptureError::fs(&temp_path, e))?;

        let client = Client::with_options(&self.client_options)?;

        let captured = self.capture(&client, &mut file, &temp_path).await;
        self.failed = captured.is_err();
        self.logger.info(&self.summary().to_string());
        captured?;

        file.flush()
            .await
            .map_err(|e| CaptureError::fs(&temp_path, e))?;
        drop(file);

        let final_path = self.final_path();
        fs::move_file(&temp_path, &final_path).await?;
        let final_path =
            std::path::absolute(&final_path).map_err(|e| CaptureError::fs(&final_path, e))?;

        self.logger
            .info(&format!("Job finished: {}", self.file_base_name()));
        Ok(final_path)
    }

    /// 读取响应体直到流结束或定时器触发
    ///
    /// 定时器在发出请求时启动，而不是在收到第一个字节时。
    async fn capture(&mut self, client: &Client, file: &mut File, temp_path: &Path) -> Result<()> {
        let url = self.url.clone();
        let deadline = sleep(self.duration);
        tokio::pin!(deadline);

        let mut response = tokio::select! {
            response = client.get(&url) => response?,
            _ = &mut deadline => {
                // 响应头都没等到，断开连接并报错，不移动文件
                self.timed_out = true;
                return Err(CaptureError::NoResponse {
                    duration: self.duration,
                    url: url.to_string(),
                });
            }
        };

        self.logger.info(&format!("Connected to {}...", url));

        if let Some(content_type) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            self.set_content_type(content_type);
        }

        let status = response.status();
        if status != StatusCode::OK {
            // 响应体直接丢弃
            drop(response);
            return Err(CaptureError::BadStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        loop {
            tokio::select! {
                chunk = response.chunk() => match chunk? {
                    Some(bytes) => {
                        file.write_all(&bytes)
                            .await
                            .map_err(|e| CaptureError::fs(temp_path, e))?;
                        self.received_bytes_total += bytes.len() as u64;
                    }
                    None => break,
                },
                _ = &mut deadline => {
                    self.timed_out = true;
                    break;
                }
            }
        }

        // drop 即断开连接
        drop(response);
        Ok(())
    }

    fn set_content_type(&mut self, content_type: &str) {
        if let Some(extension) = resolve_extension(&*self.lookup, content_type) {
            self.file_extension = extension;
        }
        self.content_type = Some(content_type.to_string());
    }
}
