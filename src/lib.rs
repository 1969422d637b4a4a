//! # SKU 管理服务
//!
//! 基于 Axum 的 SKU 增删改查服务，数据保存在单个 JSON 文件中：
//! - `app`: 路由、处理器、业务服务
//! - `common`: 错误处理、中间件
//! - `infrastructure`: 存储、配置、日志

pub mod app;
pub mod common;
pub mod infrastructure;

pub use app::build_router;
pub use app::sku::service::SkuService;
pub use common::error::CoreError;
