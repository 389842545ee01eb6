//! Lecturer Portfolio - 讲师门户后端服务
//!
//! 基于 Actix Web 构建，所有请求经由单一 POST 入口按 `action` 分发。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 请求/响应数据模型与动作表
//! - `routes`: 统一入口与分发
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
