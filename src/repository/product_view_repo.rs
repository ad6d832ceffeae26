// ==========================================
// 商品目录导入系统 - 单品查询仓储
// ==========================================
// 职责: 按 SKU 联表查询单品视图（只读路径）
// 红线: 不含业务规则；与导入路径互不共享连接，
//       隔离性只依赖存储自身的事务语义
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::catalog::ProductView;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension, Row};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

// ==========================================
// ProductViewRepository - 单品查询仓储
// ==========================================
pub struct ProductViewRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ProductViewRepository {
    /// 创建新的 ProductViewRepository 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建仓储实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 按 SKU 查询单品视图
    ///
    /// # 语义
    /// - 空白 SKU 直接返回 Ok(None)，不发起查询
    /// - LEFT JOIN 库存与价格：缺少库存/价格数据的商品
    ///   返回 None 字段而非查询失败
    /// - 未找到是正常结果（Ok(None)），不是错误
    pub fn get_by_sku(&self, sku: &str) -> RepositoryResult<Option<ProductView>> {
        let sku = sku.trim();
        if sku.is_empty() {
            return Ok(None);
        }

        let conn = self.get_conn()?;
        let view = conn
            .query_row(
                r#"
                SELECT p.sku, p.name, p.ean, p.manufacturer, p.category, p.image_url,
                       i.qty, i.shipping_cost, i.unit,
                       pr.net_price
                FROM products p
                LEFT JOIN inventory i ON i.sku = p.sku
                LEFT JOIN prices pr ON pr.sku = p.sku
                WHERE p.sku = ?1
                "#,
                params![sku],
                map_product_view_row,
            )
            .optional()?;

        Ok(view)
    }
}

/// 行 → ProductView 映射
fn map_product_view_row(row: &Row<'_>) -> rusqlite::Result<ProductView> {
    Ok(ProductView {
        sku: row.get(0)?,
        name: row.get(1)?,
        ean: row.get(2)?,
        manufacturer: row.get(3)?,
        category: row.get(4)?,
        image_url: row.get(5)?,
        qty: row.get(6)?,
        shipping_cost: decimal_from_row(row, 7)?,
        unit: row.get(8)?,
        net_price: decimal_from_row(row, 9)?,
    })
}

/// 读取 TEXT 存储的十进制列
fn decimal_from_row(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<Decimal>> {
    match row.get::<_, Option<String>>(idx)? {
        Some(text) => Decimal::from_str(&text).map(Some).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                idx,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn setup_conn() -> Arc<Mutex<Connection>> {
        let conn = Connection::open_in_memory().unwrap();
        db::init_schema(&conn).unwrap();
        conn.execute_batch(
            r#"
            INSERT INTO products (sku, name, ean, manufacturer, category, image_url)
            VALUES ('P001', 'Widget', '111', 'Acme', 'Headphones', 'img.jpg'),
                   ('P002', 'Gadget', '222', 'Acme', 'Hand', NULL);
            INSERT INTO inventory (sku, qty, shipping_cost, unit)
            VALUES ('P001', 5, '10.50', 'szt');
            INSERT INTO prices (sku, net_price)
            VALUES ('P001', '99.99');
            "#,
        )
        .unwrap();
        Arc::new(Mutex::new(conn))
    }

    #[test]
    fn test_get_by_sku_full_join() {
        let repo = ProductViewRepository::from_connection(setup_conn());

        let view = repo.get_by_sku("P001").unwrap().unwrap();
        assert_eq!(view.sku, "P001");
        assert_eq!(view.name, Some("Widget".to_string()));
        assert_eq!(view.qty, Some(5));
        assert_eq!(
            view.shipping_cost,
            Some(Decimal::from_str("10.50").unwrap())
        );
        assert_eq!(view.unit, Some("szt".to_string()));
        assert_eq!(view.net_price, Some(Decimal::from_str("99.99").unwrap()));
    }

    #[test]
    fn test_get_by_sku_missing_inventory_and_price_yields_nulls() {
        let repo = ProductViewRepository::from_connection(setup_conn());

        let view = repo.get_by_sku("P002").unwrap().unwrap();
        assert_eq!(view.sku, "P002");
        assert_eq!(view.qty, None);
        assert_eq!(view.shipping_cost, None);
        assert_eq!(view.unit, None);
        assert_eq!(view.net_price, None);
    }

    #[test]
    fn test_get_by_sku_not_found() {
        let repo = ProductViewRepository::from_connection(setup_conn());
        assert!(repo.get_by_sku("NOPE").unwrap().is_none());
    }

    #[test]
    fn test_get_by_sku_blank_short_circuits() {
        let repo = ProductViewRepository::from_connection(setup_conn());
        assert!(repo.get_by_sku("").unwrap().is_none());
        assert!(repo.get_by_sku("   ").unwrap().is_none());
    }
}
