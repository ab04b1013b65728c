// ==========================================
// 跨境电商库存利润分析系统 - 核心库
// ==========================================
// 系统定位: 补货决策支持 (人工最终控制权)
// 范围: 纯计算核心; 文件导入导出/落盘/界面由外部协作方负责
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 存储层 - 协作方集合
pub mod store;

// 引擎层 - 预测与补货规则
pub mod engine;

// 配置层 - 策略配置
pub mod config;

// API 层 - 业务接口
pub mod api;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{SaleKind, StockHealth, TrendDirection};

// 领域实体
pub use domain::{InventorySnapshot, Product, SaleEvent, SkuForecast};

// 引擎
pub use engine::{
    ForecastEngine, ReplenishmentEngine, StockReconciler, TimelineEngine, VelocityEngine,
};

// 配置
pub use config::PolicySettings;

// 存储
pub use store::{InventoryStore, ProductCatalog, SalesLedger, StoreError};

// API
pub use api::{ApiError, ApiResult, InventoryApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "跨境电商库存利润分析系统";
