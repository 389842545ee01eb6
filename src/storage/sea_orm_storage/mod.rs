//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 MySQL（默认）、SQLite 和 PostgreSQL。
//! 连接池按需建立连接，数据库不可达时由各请求返回失败信封。

mod assignments;
mod courses;
mod lecturers;
mod students;

use crate::config::{AppConfig, DATABASE_NAME};
use crate::errors::{PortfolioError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::{info, warn};

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();

        // 未配置 URL 时由 host/user/password/port 组装 MySQL 连接
        let (db, target) = if config.database.url.trim().is_empty() {
            let target = format!(
                "mysql://{}@{}:{}/{}",
                config.database.user, config.database.host, config.database.port, DATABASE_NAME
            );
            (Self::connect_mysql(config), target)
        } else {
            let db_url = Self::build_database_url(&config.database.url)?;
            let db = if db_url.starts_with("sqlite:") {
                Self::connect_sqlite(&db_url, config).await?
            } else {
                Self::connect_generic(&db_url, config).await?
            };
            (db, db_url)
        };

        let storage = Self { db };

        if config.database.auto_migrate {
            // 迁移失败不阻止启动，后续请求会以失败信封报告数据库错误
            match storage.migrate().await {
                Ok(()) => info!("Database tables verified"),
                Err(e) => warn!("Database migration skipped: {}", e),
            }
        }

        info!("SeaORM storage initialized, database: {}", target);

        Ok(storage)
    }

    /// 运行迁移，确保五张业务表存在
    pub async fn migrate(&self) -> Result<()> {
        Migrator::up(&self.db, None).await.map_err(|e| {
            PortfolioError::database_operation(format!("Database migration failed: {e}"))
        })
    }

    /// MySQL 连接（从各项参数组装，惰性建立连接）
    fn connect_mysql(config: &AppConfig) -> DatabaseConnection {
        use sea_orm::SqlxMySqlConnector;
        use sea_orm::sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};

        let db = &config.database;
        let opt = MySqlConnectOptions::new()
            .host(&db.host)
            .port(db.port)
            .username(&db.user)
            .password(&db.password)
            .database(DATABASE_NAME);

        let pool = MySqlPoolOptions::new()
            .max_connections(db.pool_size)
            .min_connections(0)
            .acquire_timeout(Duration::from_secs(db.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .connect_lazy_with(opt);

        SqlxMySqlConnector::from_sqlx_mysql_pool(pool)
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| {
                PortfolioError::database_config(format!("Failed to parse SQLite URL: {e}"))
            })?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| {
                PortfolioError::database_connection(format!("Failed to connect to SQLite: {e}"))
            })?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL URL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .connect_lazy(true)
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt).await.map_err(|e| {
            PortfolioError::database_connection(format!("Failed to connect to database: {e}"))
        })
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        let url = url.trim();
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(PortfolioError::database_config(format!(
                "Cannot infer database type from URL: {url}. Supported: sqlite://, postgres://, mysql://, or a .db/.sqlite file path"
            )))
        }
    }

    /// 内存 SQLite，单连接保证所有查询看到同一个库；开启外键以便级联删除生效
    #[cfg(test)]
    pub(crate) async fn in_memory() -> Result<Self> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| {
                PortfolioError::database_config(format!("Failed to parse SQLite URL: {e}"))
            })?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opt)
            .await
            .map_err(|e| {
                PortfolioError::database_connection(format!("Failed to open in-memory SQLite: {e}"))
            })?;

        let storage = Self {
            db: SqlxSqliteConnector::from_sqlx_sqlite_pool(pool),
        };
        storage.migrate().await?;
        Ok(storage)
    }
}

// Storage trait 实现
use crate::models::{
    assignments::responses::AssignmentListItem,
    courses::{
        requests::CreateCourseRequest,
        responses::{CourseListItem, CourseSummary},
    },
    lecturers::{entities::Lecturer, requests::CreateLecturerRequest},
    students::responses::StudentListItem,
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 讲师模块
    async fn create_lecturer(&self, lecturer: CreateLecturerRequest) -> Result<i64> {
        self.create_lecturer_impl(lecturer).await
    }

    async fn get_lecturer_by_id(&self, lecturer_id: i64) -> Result<Option<Lecturer>> {
        self.get_lecturer_by_id_impl(lecturer_id).await
    }

    async fn get_lecturer_by_email(&self, email: &str) -> Result<Option<Lecturer>> {
        self.get_lecturer_by_email_impl(email).await
    }

    // 课程模块
    async fn count_courses_by_lecturer(&self, lecturer_id: i64) -> Result<i64> {
        self.count_courses_by_lecturer_impl(lecturer_id).await
    }

    async fn list_course_summaries(&self, lecturer_id: i64) -> Result<Vec<CourseSummary>> {
        self.list_course_summaries_impl(lecturer_id).await
    }

    async fn list_courses_with_counts(&self, lecturer_id: i64) -> Result<Vec<CourseListItem>> {
        self.list_courses_with_counts_impl(lecturer_id).await
    }

    async fn create_course(&self, course: CreateCourseRequest) -> Result<i64> {
        self.create_course_impl(course).await
    }

    async fn delete_course(&self, course_id: i64, lecturer_id: Option<i64>) -> Result<u64> {
        self.delete_course_impl(course_id, lecturer_id).await
    }

    // 学生与作业模块
    async fn count_students_by_lecturer(&self, lecturer_id: i64) -> Result<i64> {
        self.count_students_by_lecturer_impl(lecturer_id).await
    }

    async fn list_students_by_lecturer(&self, lecturer_id: i64) -> Result<Vec<StudentListItem>> {
        self.list_students_by_lecturer_impl(lecturer_id).await
    }

    async fn list_assignments_by_lecturer(
        &self,
        lecturer_id: i64,
    ) -> Result<Vec<AssignmentListItem>> {
        self.list_assignments_by_lecturer_impl(lecturer_id).await
    }
}
