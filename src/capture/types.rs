use std::fmt;

/// 采集结束的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// 服务端在时长用尽前关闭了流
    StreamEnded,
    /// 定时器触发，连接被主动断开
    Timeout,
    /// 出错中止，不会移动文件
    Failed,
}

impl StopReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            StopReason::StreamEnded => "stream ended",
            StopReason::Timeout => "timeout",
            StopReason::Failed => "failed",
        }
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureSummary {
    pub received_bytes: u64,
    pub stop_reason: StopReason,
    pub file_extension: String,
    pub content_type: Option<String>,
}

impl fmt::Display for CaptureSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Received total ({}) {} bytes",
            self.stop_reason, self.received_bytes
        )
    }
}
