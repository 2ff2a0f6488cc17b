//! HTML 页面外壳

/// 转义用户输入，避免注入标签或属性
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// 包装成完整页面；`script` 为空时不输出脚本标签
pub fn page(title: &str, body: &str, script: &str) -> String {
    let script = if script.is_empty() {
        String::new()
    } else {
        format!("<script>{}</script>", script)
    };
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{title}</title>
    <meta charset="UTF-8">
    <style>
        body {{ font-family: Arial, sans-serif; margin: 40px; background: #f5f5f5; }}
        .container {{ max-width: 800px; margin: 0 auto; background: white; padding: 30px; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }}
        table {{ width: 100%; border-collapse: collapse; margin-top: 15px; }}
        th, td {{ border-bottom: 1px solid #ddd; padding: 8px; text-align: left; }}
        tr.total td {{ font-weight: bold; }}
        form.inline {{ display: inline; }}
    </style>
</head>
<body>
<div class="container">
{body}
</div>
{script}
</body>
</html>
"#,
        title = escape(title),
        body = body,
        script = script,
    )
}
