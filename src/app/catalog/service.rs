//! 商品目录业务服务
//!
//! 处理器只和这里打交道：渲染当前视图、提交表单、删除记录。

use std::sync::Arc;

use tracing::{debug, info};

use super::model::{Product, ProductForm};
use super::navigation::{ActiveView, Route, RouteId};
use super::store::SharedStore;
use super::view::{FormMode, FormView, ListView};
use crate::infrastructure::id_source::IdSource;

#[derive(Clone)]
pub struct CatalogService {
    store: SharedStore,
    ids: Arc<IdSource>,
}

impl CatalogService {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            ids: Arc::new(IdSource::new()),
        }
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// 按路由选出激活视图并渲染；`search` 只对列表视图有意义
    pub fn render(&self, route: &Route, search: &str) -> String {
        let products = self.store.snapshot();
        match ActiveView::from(route) {
            ActiveView::List => ListView::build(&products, search).render(),
            ActiveView::AddForm => FormView::build(&products, FormMode::Add).render(),
            ActiveView::EditForm(id) => {
                if !products.iter().any(|p| Some(p.id) == id.id()) {
                    debug!("编辑的商品 {} 不存在，使用默认字段", id);
                }
                FormView::build(&products, FormMode::Edit(id)).render()
            }
        }
    }

    /// 提交表单：编辑模式更新路由上的 id，新增模式用新 id 追加
    pub fn submit(&self, mode: &FormMode, form: &ProductForm) {
        match mode {
            FormMode::Add => {
                let product = Product::new(self.ids.next_id(), form.name.clone(), form.price());
                info!("添加商品 {}: {}", product.id, product.name);
                self.store.add(product);
            }
            FormMode::Edit(RouteId::Id(id)) => {
                info!("更新商品 {}", id);
                self.store
                    .update(Product::new(*id, form.name.clone(), form.price()));
            }
            FormMode::Edit(RouteId::Unmatched(raw)) => {
                debug!("无效的商品 id {:?}，忽略更新", raw);
            }
        }
    }

    pub fn delete(&self, id: &RouteId) {
        match id.id() {
            Some(id) => {
                info!("删除商品 {}", id);
                self.store.delete(id);
            }
            None => debug!("无效的商品 id {:?}，忽略删除", id),
        }
    }

    pub fn products(&self) -> Vec<Product> {
        self.store.snapshot()
    }
}
