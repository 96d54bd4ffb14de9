//! GitHub 评论投递
//!
//! 投递是尽力而为的旁路：结构非法的消息在任何网络请求之前被拒绝，
//! 远端失败只体现为 `Ok(false)`，不影响成绩写入。

pub mod post;
pub mod transport;

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

pub use transport::{CommentTransport, ReqwestTransport};

use crate::config::GitHubConfig;
use crate::errors::Result;
use crate::models::github::requests::GitHubMessage;

#[derive(Clone)]
pub struct GitHubService {
    config: GitHubConfig,
    transport: Arc<dyn CommentTransport>,
}

impl GitHubService {
    pub fn new(config: GitHubConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: GitHubConfig, transport: Arc<dyn CommentTransport>) -> Self {
        Self { config, transport }
    }

    pub fn postback_enabled(&self) -> bool {
        self.config.postback
    }

    /// 投递未类型化的评论载荷，缺失 `url` 或 `message` 时返回 `Validation` 错误
    pub async fn post_markdown(&self, payload: &Value) -> Result<bool> {
        let message = GitHubMessage::from_payload(payload)?;
        self.post_message(&message).await
    }

    /// 投递评论
    ///
    /// postback 关闭时不发请求，直接返回 `Ok(true)`。
    pub async fn post_message(&self, message: &GitHubMessage) -> Result<bool> {
        message.validate()?;

        if !self.config.postback {
            debug!("Postback disabled, skipping comment to {}", message.url);
            return Ok(true);
        }

        match self
            .transport
            .post_comment(&message.url, &message.message)
            .await
        {
            Ok(true) => {
                info!("Comment posted to {}", message.url);
                Ok(true)
            }
            Ok(false) => {
                warn!("Comment rejected by {}", message.url);
                Ok(false)
            }
            Err(e) => {
                warn!("Comment delivery to {} failed: {}", message.url, e);
                Ok(false)
            }
        }
    }
}
