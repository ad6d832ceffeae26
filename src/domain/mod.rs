// ==========================================
// 商品目录导入系统 - 领域层
// ==========================================

pub mod catalog;
pub mod diagnostics;

pub use catalog::{
    Inventory, Price, Product, ProductView, RawInventoryRecord, RawPriceRecord, RawProductRecord,
};
pub use diagnostics::{
    FeedSummary, ImportSummary, LoadCounts, ReconcileDiagnostics, RejectedPrice,
    RejectedPriceReport,
};
