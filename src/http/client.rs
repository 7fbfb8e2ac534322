use reqwest::redirect::Policy;
use reqwest::{Response, Url};

use crate::Result;
use crate::http::types::ClientOptions;

#[derive(Clone)]
pub struct Client {
    inner: reqwest::Client,
}

impl Client {
    pub fn new() -> Result<Self> {
        Self::with_options(&ClientOptions::default())
    }

    /// 不设置整体请求超时，否则长时间的采集会被 reqwest 中断
    pub fn with_options(options: &ClientOptions) -> Result<Self> {
        let redirect = if options.max_redirects == 0 {
            Policy::none()
        } else {
            Policy::limited(options.max_redirects)
        };

        let inner = reqwest::Client::builder()
            .connect_timeout(options.connect_timeout())
            .user_agent(options.user_agent.clone())
            .redirect(redirect)
            .build()?;

        Ok(Self { inner })
    }

    /// 发起 GET 请求，只等待响应头，响应体留给调用方按块读取
    pub async fn get(&self, url: &Url) -> Result<Response> {
        let response = self.inner.get(url.clone()).send().await?;
        tracing::debug!(
            "GET {} -> {} (final url {})",
            url,
            response.status(),
            response.url()
        );
        Ok(response)
    }
}
