// ==========================================
// 商品目录导入系统 - 命令行入口
// ==========================================
// 用法:
//   product-catalog-import import <Products.csv> <Inventory.csv> <Prices.csv>
//   product-catalog-import lookup <SKU>
// 环境变量:
//   CATALOG_IMPORT_DB       数据库文件路径（默认: 用户数据目录）
//   CATALOG_IMPORT_SETTINGS CSV 读取配置 JSON 路径（默认: 内置默认值）
// ==========================================

use anyhow::Context;
use product_catalog_import::config::CsvSettings;
use product_catalog_import::db;
use product_catalog_import::importer::{CatalogImporter, CatalogImporterImpl, FeedPaths};
use product_catalog_import::repository::{CatalogLoadRepositoryImpl, ProductViewRepository};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// 解析数据库路径（环境变量优先），并确保父目录存在
fn resolve_db_path() -> anyhow::Result<String> {
    let path = match std::env::var("CATALOG_IMPORT_DB") {
        Ok(p) => PathBuf::from(p),
        Err(_) => dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("product-catalog-import")
            .join("catalog.db"),
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("创建数据目录失败: {}", parent.display()))?;
    }

    Ok(path.display().to_string())
}

/// 加载 CSV 读取配置（环境变量指向的 JSON 文件，缺省用默认值）
fn load_settings() -> anyhow::Result<CsvSettings> {
    match std::env::var("CATALOG_IMPORT_SETTINGS") {
        Ok(path) => CsvSettings::load(&path).with_context(|| format!("读取配置失败: {}", path)),
        Err(_) => Ok(CsvSettings::default()),
    }
}

fn print_usage() {
    eprintln!("{} v{}", product_catalog_import::APP_NAME, product_catalog_import::VERSION);
    eprintln!();
    eprintln!("用法:");
    eprintln!("  product-catalog-import import <Products.csv> <Inventory.csv> <Prices.csv>");
    eprintln!("  product-catalog-import lookup <SKU>");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    product_catalog_import::logging::init();

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("import") if args.len() == 5 => {
            let db_path = resolve_db_path()?;
            tracing::info!(db = %db_path, "使用数据库");

            let conn = db::open_sqlite_connection(&db_path)?;
            db::init_schema(&conn)?;

            let repo = CatalogLoadRepositoryImpl::from_connection(Arc::new(Mutex::new(conn)));
            let importer = CatalogImporterImpl::new(repo, load_settings()?);

            let summary = importer
                .import_catalog(FeedPaths {
                    products: PathBuf::from(&args[2]),
                    inventory: PathBuf::from(&args[3]),
                    prices: PathBuf::from(&args[4]),
                })
                .await?;

            // 核心只产出数据，展示由入口层决定
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Some("lookup") if args.len() == 3 => {
            let db_path = resolve_db_path()?;
            let repo = ProductViewRepository::new(&db_path)?;

            match repo.get_by_sku(&args[2])? {
                Some(view) => println!("{}", serde_json::to_string_pretty(&view)?),
                None => {
                    eprintln!("未找到 SKU: {}", args[2]);
                    std::process::exit(2);
                }
            }
        }
        _ => {
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
