// ==========================================
// 商品目录导入系统 - 目录落库 Repository Trait
// ==========================================
// 职责: 定义落库能力接口（不包含业务逻辑）
// 红线: Repository 不含业务规则，只做数据写入
// ==========================================

use crate::domain::catalog::{Inventory, Price, Product};
use crate::domain::diagnostics::LoadCounts;
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

// ==========================================
// CatalogLoadRepository Trait
// ==========================================
// 用途: 一次导入的原子落库能力
// 实现者: CatalogLoadRepositoryImpl（使用 rusqlite）
#[async_trait]
pub trait CatalogLoadRepository: Send + Sync {
    /// 全量替换三张目录表
    ///
    /// # 事务语义
    /// - 单个事务内: 清空 products/inventory/prices，
    ///   再按序批量写入三个集合
    /// - 任一步失败整体回滚，读取方永远看不到半成品状态
    /// - 批量写入无逐行重试：失败即放弃整个事务
    ///
    /// # 返回
    /// - Ok(LoadCounts): 各表写入行数
    /// - Err: 数据库错误（已回滚）
    async fn replace_catalog(
        &self,
        products: Vec<Product>,
        inventory: Vec<Inventory>,
        prices: Vec<Price>,
    ) -> RepositoryResult<LoadCounts>;
}
