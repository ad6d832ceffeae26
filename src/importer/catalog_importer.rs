// ==========================================
// 商品目录导入系统 - 目录导入 Trait
// ==========================================
// 职责: 定义导入接口（不包含实现）
// ==========================================

use crate::domain::diagnostics::ImportSummary;
use crate::importer::error::ImportResult;
use async_trait::async_trait;
use std::path::PathBuf;

// ==========================================
// FeedPaths - 三个源文件路径
// ==========================================
// 远端取文件不在本层职责内：上游先把字节落到本地路径
#[derive(Debug, Clone)]
pub struct FeedPaths {
    pub products: PathBuf,
    pub inventory: PathBuf,
    pub prices: PathBuf,
}

// ==========================================
// CatalogImporter Trait
// ==========================================
// 用途: 目录导入主接口
// 实现者: CatalogImporterImpl
#[async_trait]
pub trait CatalogImporter: Send + Sync {
    /// 执行一次全量导入
    ///
    /// # 流程
    /// 1. 并发解析三个 CSV 源（相互无数据依赖）
    /// 2. 字段映射（保持字符串态）
    /// 3. 按 SKU 汇聚去重（空键/重复键进诊断）
    /// 4. 转换/过滤（商品业务过滤、类目派生、数值宽容定型）
    /// 5. 价格校验（有效/拒绝划分）
    /// 6. 事务化落库（三表先清空后批量写入，整体成败）
    ///
    /// # 返回
    /// - Ok(ImportSummary): 导入成功，附结构化诊断汇总
    /// - Err: 结构性失败（文件/坏行严格模式/落库），无任何数据变更
    async fn import_catalog(&self, feeds: FeedPaths) -> ImportResult<ImportSummary>;
}
