// ==========================================
// 商品目录导入系统 - 导入层
// ==========================================
// 职责: 外部 CSV 数据导入，生成规范实体并落库
// 流程: 解析 → 映射 → 汇聚 → 转换/过滤 → 价格校验 → 落库
// ==========================================

// 模块声明
pub mod catalog_importer;
pub mod catalog_importer_impl;
pub mod data_cleaner;
pub mod error;
pub mod feed_spec;
pub mod field_mapper;
pub mod file_parser;
pub mod price_validator;
pub mod reconciler;
pub mod transformer;

// 重导出核心类型
pub use catalog_importer::{CatalogImporter, FeedPaths};
pub use catalog_importer_impl::CatalogImporterImpl;
pub use error::{ImportError, ImportResult};
pub use feed_spec::{
    ColumnRef, FeedSpec, INVENTORY_FEED, PRICE_FEED_NAMED, PRICE_FEED_POSITIONAL, PRODUCT_FEED,
};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvFeedParser, ParsedFeed, RawRow};
pub use price_validator::{validate_prices, PriceValidation, REJECTED_SAMPLE_LIMIT};
pub use reconciler::reconcile_by_key;
