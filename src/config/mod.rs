// ==========================================
// 商品目录导入系统 - 配置层
// ==========================================
// 职责: CSV 读取策略等系统配置
// ==========================================

pub mod csv_settings;

pub use csv_settings::{CsvSettings, PriceFeedVariant};
