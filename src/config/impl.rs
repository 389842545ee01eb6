use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::{AppConfig, DATABASE_NAME, PasswordScheme};

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 内置默认值，保证没有配置文件时也能启动
            .set_default("app.system_name", "Lecturer Portfolio")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000_i64)?
            .set_default("server.unix_socket_path", "")?
            .set_default("server.workers", 0_i64)?
            .set_default("server.max_workers", 8_i64)?
            .set_default("server.timeouts.client_request", 5000_i64)?
            .set_default("server.timeouts.client_disconnect", 1000_i64)?
            .set_default("server.timeouts.keep_alive", 30_i64)?
            .set_default("server.limits.max_payload_size", 1_048_576_i64)?
            .set_default("database.url", "")?
            .set_default("database.host", "127.0.0.1")?
            .set_default("database.user", "root")?
            .set_default("database.password", "")?
            .set_default("database.port", 4000_i64)?
            .set_default("database.pool_size", 10_i64)?
            .set_default("database.timeout", 10_i64)?
            .set_default("database.auto_migrate", true)?
            .set_default("auth.password_scheme", "argon2")?
            .set_default("argon2.memory_cost", 19456_i64)?
            .set_default("argon2.time_cost", 2_i64)?
            .set_default("argon2.parallelism", 1_i64)?
            .set_default("cors.max_age", 3600_i64)?
            // 加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 环境变量覆盖，例如 PORTFOLIO__DATABASE__POOL_SIZE
            .add_source(
                Environment::with_prefix("PORTFOLIO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        // 兼容部署平台的常用环境变量
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("server.unix_socket_path", std::env::var("UNIX_SOCKET").ok())?
            .set_override_option("server.workers", std::env::var("CPU_COUNT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("database.host", std::env::var("DB_HOST").ok())?
            .set_override_option("database.user", std::env::var("DB_USER").ok())?
            .set_override_option("database.password", std::env::var("DB_PASS").ok())?
            .set_override_option("database.port", std::env::var("DB_PORT").ok())?
            .set_override_option(
                "auth.password_scheme",
                std::env::var("PASSWORD_SCHEME").ok(),
            )?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 处理工作线程数
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
        }

        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 是否仍在使用明文密码方案
    pub fn uses_plaintext_passwords(&self) -> bool {
        self.auth.password_scheme == PasswordScheme::Plaintext
    }

    /// 获取服务器绑定地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 获取 Unix 套接字路径 (如果配置了)
    #[cfg(unix)]
    pub fn unix_socket_path(&self) -> Option<&str> {
        if self.server.unix_socket_path.is_empty() {
            None
        } else {
            Some(&self.server.unix_socket_path)
        }
    }

    /// 数据库名称（固定）
    pub fn database_name(&self) -> &'static str {
        DATABASE_NAME
    }
}
