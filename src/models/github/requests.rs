use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::errors::{ClassyError, Result};
use crate::utils::validate::validate_comment_url;

/// 待投递的 Markdown 评论
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/github.ts")]
pub struct GitHubMessage {
    /// commit comments API 地址
    pub url: String,
    /// Markdown 正文
    pub message: String,
}

impl GitHubMessage {
    /// 从未类型化载荷中提取评论，缺失 `url` 或 `message` 时拒绝
    pub fn from_payload(payload: &Value) -> Result<Self> {
        let message: GitHubMessage = serde_json::from_value(payload.clone())
            .map_err(|e| ClassyError::validation(format!("评论载荷结构错误: {e}")))?;
        message.validate()?;
        Ok(message)
    }

    pub fn validate(&self) -> Result<()> {
        if self.message.trim().is_empty() {
            return Err(ClassyError::validation("评论内容不能为空"));
        }
        validate_comment_url(&self.url).map_err(ClassyError::validation)?;
        Ok(())
    }
}

/// commit comments API 请求体
#[derive(Debug, Serialize)]
pub struct CommitCommentBody<'a> {
    pub body: &'a str,
}
