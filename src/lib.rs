// ==========================================
// 商品目录导入系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 职责: 三源 CSV（商品/库存/价格）按 SKU 汇聚，
//       事务化全量落库，提供单品联表查询
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 系统配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::catalog::{
    Inventory, Price, Product, ProductView, RawInventoryRecord, RawPriceRecord, RawProductRecord,
};

// 诊断与汇总
pub use domain::diagnostics::{
    FeedSummary, ImportSummary, LoadCounts, ReconcileDiagnostics, RejectedPrice,
    RejectedPriceReport,
};

// 导入层
pub use importer::{CatalogImporter, CatalogImporterImpl, FeedPaths, ImportError, ImportResult};

// 仓储层
pub use repository::{CatalogLoadRepository, CatalogLoadRepositoryImpl, ProductViewRepository};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "商品目录导入系统";
