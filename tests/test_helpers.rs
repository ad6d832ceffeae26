// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的数据库初始化、CSV 夹具生成
// ==========================================

use product_catalog_import::db;
use rusqlite::Connection;
use std::error::Error;
use std::io::Write;
use tempfile::NamedTempFile;

/// 创建临时测试数据库并初始化 schema
///
/// # 返回
/// - NamedTempFile: 临时数据库文件（需要保持存活）
/// - String: 数据库文件路径
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file.path().to_str().unwrap().to_string();

    let conn = Connection::open(&db_path)?;
    db::init_schema(&conn)?;

    Ok((temp_file, db_path))
}

/// 将若干行写入临时 CSV 文件
pub fn write_csv(lines: &[&str]) -> Result<NamedTempFile, Box<dyn Error>> {
    let mut temp_file = NamedTempFile::new()?;
    for line in lines {
        writeln!(temp_file, "{}", line)?;
    }
    temp_file.flush()?;
    Ok(temp_file)
}

/// 商品源表头（分号分隔）
pub const PRODUCT_HEADER: &str =
    "sku;name;ean;producer_name;category;is_wire;shipping;available;default_image";

/// 库存源表头（逗号分隔）
pub const INVENTORY_HEADER: &str =
    "sku,unit,qty,manufacturer_name,manufacturer_ref_num,shipping,shipping_cost";
