use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;

use sku_service::infrastructure::{config::load_config, logger::Logger, storage::FileStore};
use sku_service::{build_router, SkuService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    let _guard = Logger::init(&config.logging)?;

    info!("启动 SKU 服务...");
    info!("数据文件: {}", config.storage.data_file.display());

    let store = Arc::new(FileStore::new(&config.storage.data_file));
    let app = build_router(
        SkuService::new(store),
        Duration::from_secs(config.http.timeout_seconds),
    );

    let addr = config.listen_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 SKU 服务运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /api/skus                 - 获取所有 SKU");
    info!("   GET    /api/skus/:code           - 获取指定 SKU");
    info!("   POST   /api/skus                 - 创建 SKU");
    info!("   POST   /api/skus?target=:code    - 更新或重命名 SKU");
    info!("   DELETE /api/skus/:code           - 删除 SKU");
    info!("   GET    /health                   - 健康检查");

    axum::serve(listener, app).await?;
    Ok(())
}
