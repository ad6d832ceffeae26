// ==========================================
// 商品目录导入系统 - 落库原子性测试
// ==========================================
// 覆盖: 第三张表写入失败时，前两张表的清空与写入
//       均不可被观察到（整体回滚）
// ==========================================

mod test_helpers;

use product_catalog_import::domain::catalog::{Inventory, Price, Product};
use product_catalog_import::repository::{CatalogLoadRepository, CatalogLoadRepositoryImpl};
use rusqlite::Connection;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use test_helpers::create_test_db;

fn product(sku: &str, name: &str) -> Product {
    Product {
        sku: sku.to_string(),
        name: Some(name.to_string()),
        ean: None,
        manufacturer: None,
        category: String::new(),
        image_url: None,
    }
}

#[tokio::test]
async fn test_failed_third_table_insert_rolls_back_everything() {
    let (_db_file, db_path) = create_test_db().unwrap();

    // 先成功导入一轮旧数据
    let repo = CatalogLoadRepositoryImpl::new(&db_path).unwrap();
    repo.replace_catalog(
        vec![product("OLD1", "Old"), product("OLD2", "Old")],
        vec![Inventory {
            sku: "OLD1".to_string(),
            qty: Some(1),
            shipping_cost: None,
            unit: None,
        }],
        vec![Price {
            sku: "OLD1".to_string(),
            net_price: Some(Decimal::from_str("5.00").unwrap()),
        }],
    )
    .await
    .unwrap();

    // 重建 prices 表并附加必败约束:
    // 清空步骤仍可成功，第三步批量写入必然失败
    {
        let conn = Connection::open(&db_path).unwrap();
        conn.execute_batch(
            r#"
            DROP TABLE prices;
            CREATE TABLE prices (
                sku TEXT PRIMARY KEY,
                net_price TEXT CHECK (net_price IS NULL)
            );
            "#,
        )
        .unwrap();
    }

    let result = repo
        .replace_catalog(
            vec![product("NEW1", "New")],
            Vec::new(),
            vec![Price {
                sku: "NEW1".to_string(),
                net_price: Some(Decimal::from_str("7.00").unwrap()),
            }],
        )
        .await;
    assert!(result.is_err());

    // 回滚后旧数据完好: products 清空不可见，库存仍在
    let conn = Connection::open(&db_path).unwrap();
    let product_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))
        .unwrap();
    let old_name: String = conn
        .query_row("SELECT name FROM products WHERE sku = 'OLD1'", [], |row| {
            row.get(0)
        })
        .unwrap();
    let inventory_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM inventory", [], |row| row.get(0))
        .unwrap();

    assert_eq!(product_count, 2);
    assert_eq!(old_name, "Old");
    assert_eq!(inventory_count, 1);
}

#[tokio::test]
async fn test_replace_catalog_with_empty_sets_clears_tables() {
    let (_db_file, db_path) = create_test_db().unwrap();

    let repo = CatalogLoadRepositoryImpl::new(&db_path).unwrap();
    repo.replace_catalog(vec![product("P001", "Widget")], Vec::new(), Vec::new())
        .await
        .unwrap();

    // 空集导入同样是合法的全量替换
    let counts = repo
        .replace_catalog(Vec::new(), Vec::new(), Vec::new())
        .await
        .unwrap();
    assert_eq!(counts.products, 0);
    assert_eq!(counts.inventory, 0);
    assert_eq!(counts.prices, 0);

    let conn = Connection::open(&db_path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_concurrent_reader_connection_is_independent() {
    let (_db_file, db_path) = create_test_db().unwrap();

    // 写路径与读路径各持独立连接
    let conn = product_catalog_import::db::open_sqlite_connection(&db_path).unwrap();
    let repo = CatalogLoadRepositoryImpl::from_connection(Arc::new(Mutex::new(conn)));
    repo.replace_catalog(vec![product("P001", "Widget")], Vec::new(), Vec::new())
        .await
        .unwrap();

    let reader = product_catalog_import::repository::ProductViewRepository::new(&db_path).unwrap();
    assert!(reader.get_by_sku("P001").unwrap().is_some());
}
