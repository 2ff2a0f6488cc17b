//! 商品目录数据模型

use serde::Deserialize;

/// 商品 ID
pub type ProductId = i64;

/// 目录中的一条商品记录
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    /// 启动时预置的唯一一条记录
    pub fn seed() -> Self {
        Self::new(1, "3", 2.0)
    }
}

/// 表单提交的原始字段，两个字段都允许缺省
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
}

impl ProductForm {
    pub fn price(&self) -> f64 {
        coerce_price(&self.price)
    }
}

/// 把输入文本转换成价格；空串、非数字、非有限值一律按 0 处理
pub fn coerce_price(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .unwrap_or(0.0)
}
