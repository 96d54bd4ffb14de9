use crate::config::AppConfig;
use crate::services::GitHubService;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub github: GitHubService,
}

/// 准备服务器启动的上下文
/// 包括存储后端与评论投递
pub async fn prepare_server_startup(config: &AppConfig) -> StartupContext {
    let storage = crate::storage::create_storage(&config.database)
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    let github =
        GitHubService::new(config.github.clone()).expect("Failed to create GitHub client");
    if github.postback_enabled() {
        if config.github.token.is_empty() {
            warn!("GitHub postback enabled without a token, comments will likely be rejected");
        }
        info!("GitHub postback enabled");
    } else {
        warn!("GitHub postback disabled, comments will be validated but not sent");
    }

    StartupContext { storage, github }
}
