// ==========================================
// 跨境电商库存利润分析系统 - 库存校准引擎
// ==========================================
// 职责: 由盘点基数 + 盘点日后销量推算现货
// 输入: 库存快照 + 销售台账
// 输出: StockPosition (盘点日后销量, 现货)
// 红线: 退款不回补库存,实物盘点是唯一的上调路径
// ==========================================

use crate::domain::inventory::InventorySnapshot;
use crate::domain::sale::SaleEvent;
use serde::{Deserialize, Serialize};

// ==========================================
// StockPosition - 库存校准结果
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockPosition {
    pub sales_since: i64,   // 盘点日之后的销量 (按事件条数)
    pub current_stock: i64, // 推算现货 (非负钳制)
}

// ==========================================
// StockReconciler - 库存校准引擎
// ==========================================
pub struct StockReconciler {
    // 无状态引擎,不需要注入依赖
}

impl StockReconciler {
    /// 创建新的库存校准引擎
    pub fn new() -> Self {
        Self {}
    }

    /// 推算单 SKU 现货
    ///
    /// 规则:
    /// - 统计 sku 匹配、类型为 Sale、日期严格晚于盘点日的事件条数
    /// - 现货 = max(0, 盘点基数 - 盘点日后销量)
    ///
    /// 边界处理:
    /// - 盘点日期缺失 (从未盘点) → 销量计 0,全部基数视为在库
    /// - 盘点日当天的销售不计入扣减 (严格不等式)
    pub fn reconcile(
        &self,
        sku: &str,
        snapshot: &InventorySnapshot,
        ledger: &[SaleEvent],
    ) -> StockPosition {
        let sales_since = match snapshot.base_date {
            Some(base_date) => ledger
                .iter()
                .filter(|e| e.sku == sku && e.counts_as_sale() && e.date > base_date)
                .count() as i64,
            None => 0,
        };

        let current_stock = (snapshot.base_qty - sales_since).max(0);

        StockPosition {
            sales_since,
            current_stock,
        }
    }
}

impl Default for StockReconciler {
    fn default() -> Self {
        Self::new()
    }
}
