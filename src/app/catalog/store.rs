//! 商品存储
//!
//! `ProductStore` 是有序的商品序列，只能通过 add / update / delete 修改。
//! `SharedStore` 由应用根持有，对外提供读取快照、派发修改和订阅变更的能力。

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio::sync::broadcast;
use tracing::debug;

use super::model::{Product, ProductId};

/// 变更通知通道容量
const EVENT_CAPACITY: usize = 64;

/// 一次有效修改的内容
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreChange {
    Added(ProductId),
    Updated(ProductId),
    Deleted(ProductId),
}

/// 推送给订阅者的变更事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreEvent {
    pub revision: u64,
    pub change: StoreChange,
}

/// 有序商品序列
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    products: Vec<Product>,
    revision: u64,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 带预置记录的存储
    pub fn seeded() -> Self {
        Self {
            products: vec![Product::seed()],
            revision: 0,
        }
    }

    /// 追加到末尾，不检查 id 冲突
    pub fn add(&mut self, product: Product) -> StoreEvent {
        let id = product.id;
        self.products.push(product);
        self.bump(StoreChange::Added(id))
    }

    /// 原位替换第一条同 id 的记录；找不到时什么也不做
    pub fn update(&mut self, product: Product) -> Option<StoreEvent> {
        let id = product.id;
        let slot = self.products.iter_mut().find(|p| p.id == id)?;
        *slot = product;
        Some(self.bump(StoreChange::Updated(id)))
    }

    /// 删除所有同 id 的记录
    pub fn delete(&mut self, id: ProductId) -> Option<StoreEvent> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            return None;
        }
        Some(self.bump(StoreChange::Deleted(id)))
    }

    pub fn get_all(&self) -> &[Product] {
        &self.products
    }

    fn bump(&mut self, change: StoreChange) -> StoreEvent {
        self.revision += 1;
        StoreEvent {
            revision: self.revision,
            change,
        }
    }
}

/// 应用范围内共享的存储句柄
#[derive(Clone)]
pub struct SharedStore {
    inner: Arc<RwLock<ProductStore>>,
    events: broadcast::Sender<StoreEvent>,
}

impl SharedStore {
    pub fn new(store: ProductStore) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            inner: Arc::new(RwLock::new(store)),
            events,
        }
    }

    pub fn seeded() -> Self {
        Self::new(ProductStore::seeded())
    }

    pub fn add(&self, product: Product) {
        let event = self.write().add(product);
        self.notify(Some(event));
    }

    pub fn update(&self, product: Product) {
        let id = product.id;
        let event = self.write().update(product);
        if event.is_none() {
            debug!("更新被忽略，商品 {} 不存在", id);
        }
        self.notify(event);
    }

    pub fn delete(&self, id: ProductId) {
        let event = self.write().delete(id);
        if event.is_none() {
            debug!("删除被忽略，商品 {} 不存在", id);
        }
        self.notify(event);
    }

    /// 当前序列的拷贝
    pub fn snapshot(&self) -> Vec<Product> {
        self.read().get_all().to_vec()
    }

    /// 订阅之后每次有效修改都会收到一个事件
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    fn notify(&self, event: Option<StoreEvent>) {
        let Some(event) = event else {
            return;
        };
        debug!("存储已变更: {:?}", event);
        // 没有订阅者时发送失败，属于正常情况
        let _ = self.events.send(event);
    }

    fn read(&self) -> RwLockReadGuard<'_, ProductStore> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ProductStore> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
