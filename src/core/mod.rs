//! 核心层：错误处理、中间件、页面外壳

pub mod error;
pub mod html;
pub mod middleware;
