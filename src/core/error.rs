//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::warn;

use super::html::{escape, page};

/// 核心错误类型
#[derive(Debug)]
pub enum CoreError {
    BadRequest(String),
    NotFound(String),
}

impl CoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn message(&self) -> &str {
        match self {
            CoreError::BadRequest(msg) | CoreError::NotFound(msg) => msg,
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!("请求失败: {} - {}", status, self.message());

        let body = format!(
            r#"<h1>{code}</h1>
<p>{message}</p>
<p><small>{timestamp}</small></p>
<a href="/">返回列表</a>"#,
            code = status.as_u16(),
            message = escape(self.message()),
            timestamp = chrono::Utc::now().to_rfc3339(),
        );

        (status, Html(page("出错了", &body, ""))).into_response()
    }
}
