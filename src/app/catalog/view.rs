//! 视图渲染
//!
//! 视图只依赖传入的商品序列和页面本地状态（搜索文本、表单字段），
//! 同样的输入总是得到同样的输出。

use std::fmt::Write;

use super::model::Product;
use super::navigation::{list_href, ActiveView, Route, RouteId, UserAction};
use super::selectors::{filter_by_name, sum_price};
use crate::core::html::{escape, page};

/// 列表页收到存储变更时重新加载
const RELOAD_ON_CHANGE: &str =
    "new EventSource('/events').addEventListener('store', () => window.location.reload());";

/// 列表视图
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub search: String,
    pub rows: Vec<Product>,
    pub total: f64,
}

impl ListView {
    pub fn build(products: &[Product], search: &str) -> Self {
        let filtered = filter_by_name(products, search);
        let total = sum_price(filtered.iter().copied());
        Self {
            search: search.to_string(),
            rows: filtered.into_iter().cloned().collect(),
            total,
        }
    }

    pub fn render(&self) -> String {
        let search = escape(&self.search);
        let add_href = ActiveView::List.on(UserAction::InvokeAdd).route().path();

        let mut body = String::new();
        let _ = write!(
            body,
            r#"<h1>商品列表</h1>
<a class="button" href="{add_href}">添加商品</a>
<form method="get" action="{list}">
    <input type="text" name="search" placeholder="搜索..." value="{search}">
</form>
<table>
<thead>
<tr><th>名称</th><th>价格</th><th>操作</th></tr>
</thead>
<tbody>
"#,
            list = Route::List.path(),
        );

        for product in &self.rows {
            let edit_href = ActiveView::List
                .on(UserAction::InvokeEdit(product.id))
                .route()
                .path();
            let _ = write!(
                body,
                r#"<tr>
<td>{name}</td>
<td>{price}</td>
<td>
<a href="{edit_href}">编辑</a>
<form class="inline" method="post" action="/delete/{id}">
<input type="hidden" name="search" value="{search}">
<button type="submit">删除</button>
</form>
</td>
</tr>
"#,
                name = escape(&product.name),
                price = product.price,
                id = product.id,
            );
        }

        let _ = write!(
            body,
            r#"<tr class="total"><td>合计</td><td>{total}</td><td></td></tr>
</tbody>
</table>"#,
            total = self.total,
        );

        page("商品列表", &body, RELOAD_ON_CHANGE)
    }
}

/// 表单模式，由路由上是否带 id 决定
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(RouteId),
}

impl FormMode {
    pub fn view(&self) -> ActiveView {
        match self {
            FormMode::Add => ActiveView::AddForm,
            FormMode::Edit(id) => ActiveView::EditForm(id.clone()),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

/// 表单字段的当前值
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormFields {
    pub name: String,
    pub price: f64,
}

impl From<&Product> for FormFields {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price,
        }
    }
}

/// 新增/编辑表单视图
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub mode: FormMode,
    pub fields: FormFields,
}

impl FormView {
    /// 编辑模式下用匹配的记录填充字段；找不到记录时退回默认值
    pub fn build(products: &[Product], mode: FormMode) -> Self {
        let existing = match &mode {
            FormMode::Edit(RouteId::Id(id)) => products.iter().find(|p| p.id == *id),
            _ => None,
        };
        let fields = existing.map(FormFields::from).unwrap_or_default();
        Self { mode, fields }
    }

    pub fn title(&self) -> &'static str {
        if self.mode.is_edit() {
            "编辑商品"
        } else {
            "添加新商品"
        }
    }

    pub fn render(&self) -> String {
        let action = self.mode.view().route().path();
        let cancel_href = match self.mode.view().on(UserAction::Cancel).route() {
            Route::List => list_href(""),
            other => other.path(),
        };

        let body = format!(
            r#"<h1>{title}</h1>
<form method="post" action="{action}">
    <div>
        <label>名称: </label>
        <input type="text" name="name" value="{name}">
    </div>
    <div>
        <label>价格: </label>
        <input type="number" step="any" name="price" value="{price}">
    </div>
    <button type="submit">保存</button>
    <a href="{cancel_href}">取消</a>
</form>"#,
            title = self.title(),
            action = escape(&action),
            name = escape(&self.fields.name),
            price = self.fields.price,
        );

        page(self.title(), &body, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products() -> Vec<Product> {
        vec![
            Product::new(1, "3", 2.0),
            Product::new(2, "Pen", 10.0),
            Product::new(3, "Cup", 1.5),
        ]
    }

    #[test]
    fn test_list_view_totals_filtered_rows() {
        let view = ListView::build(&products(), "pen");
        assert_eq!(view.rows, vec![Product::new(2, "Pen", 10.0)]);
        assert_eq!(view.total, 10.0);

        let all = ListView::build(&products(), "");
        assert_eq!(all.rows.len(), 3);
        assert_eq!(all.total, 13.5);
    }

    #[test]
    fn test_list_view_render() {
        let html = ListView::build(&products(), "").render();
        assert!(html.contains(r#"href="/add""#));
        assert!(html.contains(r#"href="/edit/2""#));
        assert!(html.contains(r#"action="/delete/3""#));
        assert!(html.contains("<td>Pen</td>"));
        assert!(html.contains("<td>合计</td><td>13.5</td>"));
        assert!(html.contains("EventSource('/events')"));
    }

    #[test]
    fn test_list_view_escapes_names_and_search() {
        let records = vec![Product::new(1, "<b>", 1.0)];
        let html = ListView::build(&records, "<").render();
        assert!(html.contains("<td>&lt;b&gt;</td>"));
        assert!(html.contains(r#"value="&lt;""#));
        assert!(!html.contains("<td><b></td>"));
    }

    #[test]
    fn test_empty_list_total_is_zero() {
        let html = ListView::build(&[], "").render();
        assert!(html.contains("<td>合计</td><td>0</td>"));
    }

    #[test]
    fn test_form_view_add_mode_defaults() {
        let view = FormView::build(&products(), FormMode::Add);
        assert_eq!(view.fields, FormFields::default());
        assert_eq!(view.title(), "添加新商品");
        assert!(view.render().contains(r#"action="/add""#));
    }

    #[test]
    fn test_form_view_seeds_from_record() {
        let view = FormView::build(&products(), FormMode::Edit(RouteId::Id(2)));
        assert_eq!(view.fields.name, "Pen");
        assert_eq!(view.fields.price, 10.0);

        let html = view.render();
        assert!(html.contains("编辑商品"));
        assert!(html.contains(r#"action="/edit/2""#));
        assert!(html.contains(r#"value="Pen""#));
        assert!(html.contains(r#"href="/""#));
    }

    #[test]
    fn test_form_view_stale_id_falls_back_to_defaults() {
        for id in [RouteId::Id(999), RouteId::Unmatched("abc".to_string())] {
            let view = FormView::build(&products(), FormMode::Edit(id));
            assert!(view.mode.is_edit());
            assert_eq!(view.fields.name, "");
            assert_eq!(view.fields.price, 0.0);
        }
    }
}
