//! # 商品目录编辑器
//!
//! 在内存中维护一张商品表，提供列表、搜索、新增、编辑、删除页面。
//! - `app`: 商品存储、派生计算、视图渲染和路由
//! - `core`: 错误处理、中间件、页面外壳
//! - `infrastructure`: 配置、日志、ID 生成

pub mod app;
pub mod core;
pub mod infrastructure;

