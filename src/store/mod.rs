// ==========================================
// 跨境电商库存利润分析系统 - 存储层
// ==========================================
// 职责: 核心计算的三个协作方集合 (产品档案/销售台账/库存状态)
// 红线: 只做数据存取,不含预测/决策逻辑
// ==========================================
// 说明: 文件导入导出与落盘由外部协作方负责,
// 本层仅提供内存集合与字段级更新语义。
// ==========================================

pub mod catalog;
pub mod error;
pub mod inventory;
pub mod ledger;

// 重导出核心类型
pub use catalog::ProductCatalog;
pub use error::{StoreError, StoreResult};
pub use inventory::InventoryStore;
pub use ledger::SalesLedger;
