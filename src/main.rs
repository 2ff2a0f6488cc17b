use catalog_editor::app::{self, catalog::handler::AppState};
use catalog_editor::infrastructure::{config, logger::Logger};
use tokio::{net::TcpListener, sync::broadcast::error::RecvError};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load_config()?;
    Logger::init(&config.logging);

    info!("启动商品目录编辑器...");

    let state = AppState::seeded();
    info!(
        "✅ 已初始化 {} 个示例商品",
        state.catalog.products().len()
    );

    // 记录每次存储变更
    let mut changes = state.catalog.store().subscribe();
    tokio::spawn(async move {
        loop {
            match changes.recv().await {
                Ok(event) => info!("存储修订 {}: {:?}", event.revision, event.change),
                Err(RecvError::Lagged(skipped)) => warn!("变更日志落后，跳过 {} 条", skipped),
                Err(RecvError::Closed) => break,
            }
        }
    });

    let app = app::router(state, &config.http);

    let addr = config.http.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;

    info!("🚀 服务器运行在 http://{}", addr);
    info!("📖 可用的路由:");
    info!("   GET  /            - 商品列表 (?search=)");
    info!("   GET  /add         - 新增商品");
    info!("   POST /add         - 提交新增");
    info!("   GET  /edit/:id    - 编辑商品");
    info!("   POST /edit/:id    - 提交编辑");
    info!("   POST /delete/:id  - 删除商品");
    info!("   GET  /events      - 存储变更推送");

    axum::serve(listener, app).await?;
    Ok(())
}
