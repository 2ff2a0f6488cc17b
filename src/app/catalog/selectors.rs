//! 只读派生计算

use super::model::Product;

/// 按名称做不区分大小写的子串过滤，保持原有顺序；空查询返回全部
pub fn filter_by_name<'a>(records: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

/// 价格求和，空序列为 0
pub fn sum_price<'a, I>(records: I) -> f64
where
    I: IntoIterator<Item = &'a Product>,
{
    records.into_iter().fold(0.0, |acc, p| acc + p.price)
}
