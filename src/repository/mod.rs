// ==========================================
// 商品目录导入系统 - 数据仓储层
// ==========================================
// 职责: 数据访问（写路径: 原子落库；读路径: 联表查询）
// 红线: Repository 不含业务规则
// ==========================================

pub mod catalog_load_repo;
pub mod catalog_load_repo_impl;
pub mod error;
pub mod product_view_repo;

pub use catalog_load_repo::CatalogLoadRepository;
pub use catalog_load_repo_impl::CatalogLoadRepositoryImpl;
pub use error::{RepositoryError, RepositoryResult};
pub use product_view_repo::ProductViewRepository;
