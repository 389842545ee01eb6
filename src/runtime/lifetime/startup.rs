use crate::config::AppConfig;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 检查密码存储方案，明文模式下给出提示
fn check_password_scheme(config: &AppConfig) {
    if config.uses_plaintext_passwords() {
        warn!("==========================================================");
        warn!("  PASSWORD SCHEME IS 'plaintext'");
        warn!("  Passwords are stored and compared without hashing.");
        warn!("  Set PASSWORD_SCHEME=argon2 once legacy rows are migrated");
        warn!("==========================================================");
    } else {
        info!("Passwords are hashed with Argon2id");
    }
}

/// 准备服务器启动的上下文
/// 包括加密提供者、存储和密码方案检查
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let config = AppConfig::get();

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!(
        "Storage backend initialized for database '{}'",
        config.database_name()
    );

    check_password_scheme(config);

    StartupContext { storage }
}
