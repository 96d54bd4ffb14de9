//! 配置管理
//!
//! 静态配置从配置文件与环境变量加载，启动后只读。

mod r#impl;
mod structs;

pub use structs::*;
