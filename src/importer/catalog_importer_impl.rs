// ==========================================
// 商品目录导入系统 - 目录导入器实现
// ==========================================
// 职责: 整合导入流程，从文件到数据库
// 流程: 解析 → 映射 → 汇聚 → 转换/过滤 → 价格校验 → 落库
// ==========================================

use crate::config::{CsvSettings, PriceFeedVariant};
use crate::domain::diagnostics::{FeedSummary, ImportSummary};
use crate::importer::catalog_importer::{CatalogImporter, FeedPaths};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::feed_spec::{
    FeedSpec, INVENTORY_FEED, PRICE_FEED_NAMED, PRICE_FEED_POSITIONAL, PRODUCT_FEED,
};
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::{CsvFeedParser, ParsedFeed};
use crate::importer::price_validator::validate_prices;
use crate::importer::reconciler::reconcile_by_key;
use crate::importer::transformer::{transform_inventory, transform_prices, transform_products};
use crate::repository::catalog_load_repo::CatalogLoadRepository;
use chrono::Utc;
use futures::future::try_join3;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// CatalogImporterImpl - 目录导入器实现
// ==========================================
pub struct CatalogImporterImpl<R>
where
    R: CatalogLoadRepository,
{
    // 数据访问层
    load_repo: R,

    // CSV 读取配置
    settings: CsvSettings,
}

impl<R> CatalogImporterImpl<R>
where
    R: CatalogLoadRepository,
{
    /// 创建新的 CatalogImporter 实例
    pub fn new(load_repo: R, settings: CsvSettings) -> Self {
        Self {
            load_repo,
            settings,
        }
    }

    /// 在阻塞线程池中解析单个源
    ///
    /// CSV 解析是同步 CPU/IO 工作，放入 spawn_blocking 以便三源并行。
    fn parse_feed_task(
        path: PathBuf,
        spec: &'static FeedSpec,
        tolerate_bad_data: bool,
    ) -> tokio::task::JoinHandle<ImportResult<ParsedFeed>> {
        tokio::task::spawn_blocking(move || CsvFeedParser.parse(&path, spec, tolerate_bad_data))
    }
}

#[async_trait::async_trait]
impl<R> CatalogImporter for CatalogImporterImpl<R>
where
    R: CatalogLoadRepository + Send + Sync,
{
    #[instrument(skip(self, feeds), fields(run_id))]
    async fn import_catalog(&self, feeds: FeedPaths) -> ImportResult<ImportSummary> {
        let start_time = Instant::now();
        let started_at = Utc::now();
        let run_id = Uuid::new_v4().to_string();

        info!(run_id = %run_id, "开始导入商品目录");

        // === 步骤 1: 并发解析三个源 ===
        debug!("步骤 1: 解析源文件");
        let tolerate = self.settings.ignore_bad_data;
        let price_spec: &'static FeedSpec = match self.settings.price_feed_variant {
            PriceFeedVariant::Positional => &PRICE_FEED_POSITIONAL,
            PriceFeedVariant::Named => &PRICE_FEED_NAMED,
        };

        let (products_feed, inventory_feed, prices_feed) = try_join3(
            Self::parse_feed_task(feeds.products.clone(), &PRODUCT_FEED, tolerate),
            Self::parse_feed_task(feeds.inventory.clone(), &INVENTORY_FEED, tolerate),
            Self::parse_feed_task(feeds.prices.clone(), price_spec, tolerate),
        )
        .await
        .map_err(|e| ImportError::InternalError(format!("解析任务失败: {}", e)))?;

        let products_feed = products_feed?;
        let inventory_feed = inventory_feed?;
        let prices_feed = prices_feed?;

        let products_rows_read = products_feed.rows.len();
        let inventory_rows_read = inventory_feed.rows.len();
        let prices_rows_read = prices_feed.rows.len();

        info!(
            products = products_rows_read,
            inventory = inventory_rows_read,
            prices = prices_rows_read,
            skipped_bad = products_feed.skipped_bad_rows
                + inventory_feed.skipped_bad_rows
                + prices_feed.skipped_bad_rows,
            "源文件解析完成"
        );

        // === 步骤 2: 字段映射（保持字符串态）===
        debug!("步骤 2: 字段映射");
        let mapper = FieldMapper;
        let raw_products: Vec<_> = products_feed
            .rows
            .into_iter()
            .map(|row| mapper.map_to_raw_product(row))
            .collect();
        let raw_inventory: Vec<_> = inventory_feed
            .rows
            .into_iter()
            .map(|row| mapper.map_to_raw_inventory(row))
            .collect();
        let raw_prices: Vec<_> = prices_feed
            .rows
            .into_iter()
            .map(|row| mapper.map_to_raw_price(row))
            .collect();

        // === 步骤 3: 按 SKU 汇聚去重 ===
        debug!("步骤 3: SKU 汇聚");
        let (product_map, product_diag) =
            reconcile_by_key(raw_products, |r| r.sku.as_deref(), PRODUCT_FEED.label);
        let (inventory_map, inventory_diag) =
            reconcile_by_key(raw_inventory, |r| r.sku.as_deref(), INVENTORY_FEED.label);
        let (price_map, price_diag) =
            reconcile_by_key(raw_prices, |r| r.sku.as_deref(), price_spec.label);

        for diag in [&product_diag, &inventory_diag, &price_diag] {
            if diag.missing_key > 0 {
                warn!(source = %diag.source, count = diag.missing_key, "剔除空键记录");
            }
            if !diag.duplicate_keys.is_empty() {
                warn!(
                    source = %diag.source,
                    count = diag.duplicate_keys.len(),
                    keys = ?diag.duplicate_keys,
                    "发现重复键，保留首见记录"
                );
            }
        }

        // === 步骤 4: 转换/过滤 ===
        debug!("步骤 4: 转换与业务过滤");
        let (products, filtered_products) = transform_products(product_map);
        let inventory = transform_inventory(inventory_map);
        let prices = transform_prices(price_map);
        info!(
            products = products.len(),
            filtered = filtered_products,
            "商品转换完成"
        );

        // === 步骤 5: 价格校验 ===
        debug!("步骤 5: 价格校验");
        let validation = validate_prices(prices);
        if !validation.rejected.is_empty() {
            warn!(
                rejected = validation.rejected.total,
                sample = ?validation.rejected.sample,
                "剔除无效/越界价格"
            );
        }

        // === 步骤 6: 事务化落库 ===
        debug!("步骤 6: 落库");
        let loaded = self
            .load_repo
            .replace_catalog(products, inventory, validation.valid)
            .await?;

        let elapsed = start_time.elapsed();
        let summary = ImportSummary {
            run_id: run_id.clone(),
            started_at,
            products: FeedSummary {
                rows_read: products_rows_read,
                skipped_bad_rows: products_feed.skipped_bad_rows,
                reconcile: product_diag,
            },
            inventory: FeedSummary {
                rows_read: inventory_rows_read,
                skipped_bad_rows: inventory_feed.skipped_bad_rows,
                reconcile: inventory_diag,
            },
            prices: FeedSummary {
                rows_read: prices_rows_read,
                skipped_bad_rows: prices_feed.skipped_bad_rows,
                reconcile: price_diag,
            },
            filtered_products,
            rejected_prices: validation.rejected,
            loaded,
            elapsed_ms: elapsed.as_millis() as u64,
        };

        info!(
            run_id = %run_id,
            products = summary.loaded.products,
            inventory = summary.loaded.inventory,
            prices = summary.loaded.prices,
            elapsed_ms = summary.elapsed_ms,
            "商品目录导入完成"
        );

        Ok(summary)
    }
}
