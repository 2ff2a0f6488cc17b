//! 基础设施层：配置、日志、ID 生成

pub mod config;
pub mod id_source;
pub mod logger;
