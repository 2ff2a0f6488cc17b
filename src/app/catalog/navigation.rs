//! 路由与视图切换
//!
//! 三个逻辑路由：列表 `/`、新增 `/add`、编辑 `/edit/{id}`。
//! 页面内的跳转统一通过 [`navigate_to`] 完成，在 HTTP 外壳里就是一次 303 重定向。

use std::fmt;

use axum::response::Redirect;
use url::{form_urlencoded, Url};

use super::model::ProductId;

/// 编辑路由里携带的 id 参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteId {
    /// 解析成功的数字 id
    Id(ProductId),
    /// 无法解析的原始文本，视为不匹配任何记录
    Unmatched(String),
}

impl RouteId {
    /// 整数文本直接解析；`1.0`、`1e0` 这类整数值的浮点文本同样接受
    pub fn parse(raw: &str) -> Self {
        let text = raw.trim();
        if let Ok(id) = text.parse::<ProductId>() {
            return RouteId::Id(id);
        }
        match text.parse::<f64>() {
            Ok(value)
                if value.is_finite()
                    && value.fract() == 0.0
                    && value >= ProductId::MIN as f64
                    && value < ProductId::MAX as f64 =>
            {
                RouteId::Id(value as ProductId)
            }
            _ => RouteId::Unmatched(raw.to_string()),
        }
    }

    pub fn id(&self) -> Option<ProductId> {
        match self {
            RouteId::Id(id) => Some(*id),
            RouteId::Unmatched(_) => None,
        }
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteId::Id(id) => write!(f, "{}", id),
            RouteId::Unmatched(raw) => f.write_str(raw),
        }
    }
}

/// 逻辑路由
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    Add,
    Edit(RouteId),
}

impl Route {
    pub fn edit(id: ProductId) -> Self {
        Route::Edit(RouteId::Id(id))
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Add => "/add".to_string(),
            Route::Edit(id) => edit_path(&id.to_string()),
        }
    }
}

/// 把 id 文本按路径段编码，空格编码为 `%20`，`/` 编码为 `%2F`
fn edit_path(segment: &str) -> String {
    let Ok(mut url) = Url::parse("http://localhost/edit/") else {
        return format!("/edit/{}", segment);
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(segment);
    }
    url.path().to_string()
}

/// 当前激活的视图
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveView {
    List,
    AddForm,
    EditForm(RouteId),
}

/// 触发视图切换的用户操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    InvokeAdd,
    InvokeEdit(ProductId),
    Submit,
    Cancel,
}

impl ActiveView {
    /// 状态迁移；不适用于当前视图的操作保持原状态
    pub fn on(self, action: UserAction) -> ActiveView {
        match (self, action) {
            (ActiveView::List, UserAction::InvokeAdd) => ActiveView::AddForm,
            (ActiveView::List, UserAction::InvokeEdit(id)) => ActiveView::EditForm(RouteId::Id(id)),
            (ActiveView::AddForm | ActiveView::EditForm(_), UserAction::Submit | UserAction::Cancel) => {
                ActiveView::List
            }
            (view, _) => view,
        }
    }

    pub fn route(&self) -> Route {
        match self {
            ActiveView::List => Route::List,
            ActiveView::AddForm => Route::Add,
            ActiveView::EditForm(id) => Route::Edit(id.clone()),
        }
    }
}

impl From<&Route> for ActiveView {
    fn from(route: &Route) -> Self {
        match route {
            Route::List => ActiveView::List,
            Route::Add => ActiveView::AddForm,
            Route::Edit(id) => ActiveView::EditForm(id.clone()),
        }
    }
}

/// 列表视图的搜索文本拼到查询串里
pub fn list_href(search: &str) -> String {
    if search.is_empty() {
        return Route::List.path();
    }
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("search", search)
        .finish();
    format!("{}?{}", Route::List.path(), query)
}

/// 跳转到目标路由；回到列表时保留搜索文本
pub fn navigate_to(route: &Route, search: &str) -> Redirect {
    let target = match route {
        Route::List => list_href(search),
        other => other.path(),
    };
    Redirect::to(&target)
}
