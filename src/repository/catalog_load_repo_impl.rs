// ==========================================
// 商品目录导入系统 - 目录落库 Repository 实现
// ==========================================
// 落库策略: 每次导入整体重建（先清空后批量写入），单事务成败
// 列映射: 每个规范实体一份静态列清单，SQL 由清单生成，
//         不做任何运行时类型内省
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::catalog::{Inventory, Price, Product};
use crate::domain::diagnostics::LoadCounts;
use crate::repository::catalog_load_repo::CatalogLoadRepository;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Transaction};
use std::sync::{Arc, Mutex};

// ==========================================
// 静态列清单（字段 → 列一一对应，与 db::init_schema 对齐）
// ==========================================
const PRODUCT_COLUMNS: &[&str] = &["sku", "name", "ean", "manufacturer", "category", "image_url"];
const INVENTORY_COLUMNS: &[&str] = &["sku", "qty", "shipping_cost", "unit"];
const PRICE_COLUMNS: &[&str] = &["sku", "net_price"];

/// 由列清单生成批量写入语句
fn insert_sql(table: &str, columns: &[&str]) -> String {
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{}", i)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        columns.join(", "),
        placeholders.join(", ")
    )
}

// ==========================================
// CatalogLoadRepositoryImpl
// ==========================================
pub struct CatalogLoadRepositoryImpl {
    conn: Arc<Mutex<Connection>>,
}

impl CatalogLoadRepositoryImpl {
    /// 创建新的 Repository 实例
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

    /// 在事务中批量写入商品
    fn bulk_insert_products_tx(tx: &Transaction, products: &[Product]) -> RepositoryResult<usize> {
        let mut stmt = tx.prepare(&insert_sql("products", PRODUCT_COLUMNS))?;

        let mut count = 0;
        for product in products {
            stmt.execute(params![
                product.sku,
                product.name,
                product.ean,
                product.manufacturer,
                product.category,
                product.image_url,
            ])?;
            count += 1;
        }

        Ok(count)
    }

    /// 在事务中批量写入库存
    fn bulk_insert_inventory_tx(
        tx: &Transaction,
        inventory: &[Inventory],
    ) -> RepositoryResult<usize> {
        let mut stmt = tx.prepare(&insert_sql("inventory", INVENTORY_COLUMNS))?;

        let mut count = 0;
        for item in inventory {
            stmt.execute(params![
                item.sku,
                item.qty,
                // 金额以十进制字面量入库，缺失值映射为 NULL
                item.shipping_cost.map(|d| d.to_string()),
                item.unit,
            ])?;
            count += 1;
        }

        Ok(count)
    }

    /// 在事务中批量写入价格
    fn bulk_insert_prices_tx(tx: &Transaction, prices: &[Price]) -> RepositoryResult<usize> {
        let mut stmt = tx.prepare(&insert_sql("prices", PRICE_COLUMNS))?;

        let mut count = 0;
        for price in prices {
            stmt.execute(params![
                price.sku,
                price.net_price.map(|d| d.to_string()),
            ])?;
            count += 1;
        }

        Ok(count)
    }
}

#[async_trait::async_trait]
impl CatalogLoadRepository for CatalogLoadRepositoryImpl {
    async fn replace_catalog(
        &self,
        products: Vec<Product>,
        inventory: Vec<Inventory>,
        prices: Vec<Price>,
    ) -> RepositoryResult<LoadCounts> {
        let conn = self.get_conn()?;
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        // 先清空三表（全量重建语义），再按序批量写入；
        // 任一步出错时 tx 随作用域丢弃即回滚
        tx.execute("DELETE FROM products", [])?;
        tx.execute("DELETE FROM inventory", [])?;
        tx.execute("DELETE FROM prices", [])?;

        let counts = LoadCounts {
            products: Self::bulk_insert_products_tx(&tx, &products)?,
            inventory: Self::bulk_insert_inventory_tx(&tx, &inventory)?,
            prices: Self::bulk_insert_prices_tx(&tx, &prices)?,
        };

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        Ok(counts)
    }
}
