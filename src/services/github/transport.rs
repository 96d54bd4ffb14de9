//! commit comments API 的 HTTP 传输层

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use tracing::debug;

use crate::config::GitHubConfig;
use crate::errors::Result;
use crate::models::github::requests::CommitCommentBody;

/// 评论投递传输
///
/// 返回远端是否接受（2xx）；连接、超时等传输错误以 `Err` 返回。
#[async_trait]
pub trait CommentTransport: Send + Sync {
    async fn post_comment(&self, url: &str, body: &str) -> Result<bool>;
}

pub struct ReqwestTransport {
    client: reqwest::Client,
    token: String,
    user_agent: String,
}

impl ReqwestTransport {
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            token: config.token.clone(),
            user_agent: config.user_agent.clone(),
        })
    }
}

#[async_trait]
impl CommentTransport for ReqwestTransport {
    async fn post_comment(&self, url: &str, body: &str) -> Result<bool> {
        let mut request = self
            .client
            .post(url)
            .header(USER_AGENT, &self.user_agent)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/vnd.github.v3+json")
            .json(&CommitCommentBody { body });
        if !self.token.is_empty() {
            request = request.header(AUTHORIZATION, format!("token {}", self.token));
        }

        let res = request.send().await?;
        let status = res.status();
        debug!("Comment POST {} -> {}", url, status);
        Ok(status.is_success())
    }
}
