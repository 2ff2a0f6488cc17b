//! 商品目录处理器

use std::convert::Infallible;

use axum::{
    extract::{rejection::FormRejection, Path, Query, State},
    http::Uri,
    response::{
        sse::{Event, KeepAlive, Sse},
        Html, Redirect,
    },
    Form,
};
use futures::stream::{self, Stream};
use serde::Deserialize;
use tokio::sync::broadcast::error::RecvError;
use tracing::debug;

use super::model::ProductForm;
use super::navigation::{navigate_to, Route, RouteId, UserAction};
use super::service::CatalogService;
use super::store::SharedStore;
use super::view::FormMode;
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
}

impl AppState {
    /// 以预置数据启动的应用状态
    pub fn seeded() -> Self {
        Self {
            catalog: CatalogService::new(SharedStore::seeded()),
        }
    }
}

/// 列表页的本地状态：搜索文本
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search: String,
}

pub async fn list_page(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Html<String> {
    Html(state.catalog.render(&Route::List, &query.search))
}

pub async fn add_page(State(state): State<AppState>) -> Html<String> {
    Html(state.catalog.render(&Route::Add, ""))
}

pub async fn edit_page(State(state): State<AppState>, Path(raw): Path<String>) -> Html<String> {
    let route = Route::Edit(RouteId::parse(&raw));
    Html(state.catalog.render(&route, ""))
}

pub async fn submit_add(
    State(state): State<AppState>,
    form: Result<Form<ProductForm>, FormRejection>,
) -> Result<Redirect, CoreError> {
    submit(&state, FormMode::Add, form)
}

pub async fn submit_edit(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    form: Result<Form<ProductForm>, FormRejection>,
) -> Result<Redirect, CoreError> {
    submit(&state, FormMode::Edit(RouteId::parse(&raw)), form)
}

/// 删除后回到列表，保留原来的搜索文本
pub async fn delete_product(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    form: Option<Form<SearchQuery>>,
) -> Redirect {
    state.catalog.delete(&RouteId::parse(&raw));
    let search = form.map(|Form(query)| query.search).unwrap_or_default();
    navigate_to(&Route::List, &search)
}

/// 存储变更推送，每次有效修改发送一个 `store` 事件，数据为修订号
pub async fn store_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.catalog.store().subscribe();

    let events = stream::unfold(rx, |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(change) => {
                    let event = Event::default()
                        .event("store")
                        .data(change.revision.to_string());
                    return Some((Ok::<_, Infallible>(event), rx));
                }
                Err(RecvError::Lagged(skipped)) => {
                    debug!("事件订阅落后，跳过 {} 条", skipped);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}

pub async fn not_found(uri: Uri) -> CoreError {
    CoreError::NotFound(format!("页面 {} 不存在", uri.path()))
}

fn submit(
    state: &AppState,
    mode: FormMode,
    form: Result<Form<ProductForm>, FormRejection>,
) -> Result<Redirect, CoreError> {
    let Form(form) = form.map_err(|e| CoreError::BadRequest(e.body_text()))?;
    state.catalog.submit(&mode, &form);

    let next = mode.view().on(UserAction::Submit).route();
    Ok(navigate_to(&next, ""))
}
