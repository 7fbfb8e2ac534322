use std::time::Duration;

use serde::Deserialize;

/// HTTP 客户端配置
///
/// 可以嵌入调用方自己的配置结构中反序列化，缺省字段取默认值。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    /// 建立连接的超时（秒）
    pub connect_timeout_secs: u64,
    pub user_agent: String,
    /// 最多跟随的重定向次数，0 表示不跟随
    pub max_redirects: usize,
}

impl ClientOptions {
    /// 默认连接超时
    const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;
    /// 默认重定向上限
    const DEFAULT_MAX_REDIRECTS: usize = 10;

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            connect_timeout_secs: Self::DEFAULT_CONNECT_TIMEOUT_SECS,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            max_redirects: Self::DEFAULT_MAX_REDIRECTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ClientOptions::default();
        assert_eq!(options.connect_timeout(), Duration::from_secs(30));
        assert_eq!(options.max_redirects, 10);
        assert!(options.user_agent.starts_with("streamcap/"));
    }

    #[test]
    fn test_partial_deserialize() {
        let options: ClientOptions =
            serde_json::from_str(r#"{ "max_redirects": 0, "connect_timeout_secs": 5 }"#).unwrap();
        assert_eq!(options.max_redirects, 0);
        assert_eq!(options.connect_timeout(), Duration::from_secs(5));
        assert_eq!(options.user_agent, ClientOptions::default().user_agent);
    }
}
