//! 商品目录：存储、派生计算、视图和路由

pub mod handler;
pub mod model;
pub mod navigation;
pub mod selectors;
pub mod service;
pub mod store;
pub mod view;

pub use model::{Product, ProductId};
pub use service::CatalogService;
pub use store::{SharedStore, StoreChange, StoreEvent};
