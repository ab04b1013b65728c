// ==========================================
// 跨境电商库存利润分析系统 - 引擎层
// ==========================================
// 职责: 实现预测与补货业务规则,不做数据存取
// 红线: 纯函数重算; 当前日期显式传参; 所有规则必须输出 reason
// ==========================================

pub mod forecast;
pub mod reconciliation;
pub mod replenishment;
pub mod timeline;
pub mod velocity;

// 重导出核心引擎
pub use forecast::ForecastEngine;
pub use reconciliation::{StockPosition, StockReconciler};
pub use replenishment::{ReplenishmentEngine, RestockDecision};
pub use timeline::{TimelineEngine, TimelineProjection};
pub use velocity::{VelocityEngine, VelocityEstimate};
