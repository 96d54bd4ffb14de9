//! Classy Portal - 课程成绩门户后端服务
//!
//! 基于 Actix Web 构建的作业评分与成绩账本服务。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层（成绩账本、评分细则、名册、GitHub 评论）
//! - `storage`: 数据存储层（SeaORM / 内存）
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
