// ==========================================
// 跨境电商库存利润分析系统 - 预测结果领域模型
// ==========================================
// 职责: 单 SKU 预测/补货决策输出结构
// 红线: 临时派生值,每次访问重算,不落库
// ==========================================

use crate::domain::types::{StockHealth, TrendDirection};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// SkuForecast - 单 SKU 预测快照
// ==========================================
// 四段流水线 (库存校准 → 销速估计 → 时间线推演 → 补货决策) 的汇总输出
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkuForecast {
    // ===== 标识 =====
    pub sku: String,        // 子体 SKU
    pub parent_sku: String, // 父体 SKU
    pub name: String,       // 中文名称

    // ===== 库存校准 =====
    pub sales_since: i64,   // 盘点日之后的销量 (按事件条数)
    pub current_stock: i64, // 推算现货 (非负)

    // ===== 销速估计 =====
    pub avg7: f64,                      // 近 7 天平均日销
    pub avg30: f64,                     // 近 30 天平均日销
    pub algo_daily: f64,                // 加权算法日销 (7天*0.6 + 30天*0.4)
    pub final_daily: f64,               // 最终日销 (人工干预优先,带下限保护)
    pub is_manual: bool,                // 是否人工锁定日销
    pub trend: Option<TrendDirection>,  // 销速趋势 (人工锁定时不输出)

    // ===== 时间线推演 =====
    pub run_out_date: NaiveDate, // 预计断货日
    pub gap_days: i64,           // 断货缺口天数 (到货日晚于断货日的部分)
    pub gap_qty: i64,            // 缺口期预计需求量
    pub dos: i64,                // 可售天数 (现货+在途, 999 = 销速过低无法估计)
    pub health: StockHealth,     // 库存健康度档位

    // ===== 补货决策 =====
    pub target_qty: i64,           // 目标库存水位 (备货周期+安全库存)
    pub total_restock_needed: i64, // 总补货需求
    pub air_restock: i64,          // 空运补货量 (仅覆盖缺口)
    pub sea_restock: i64,          // 海运补货量 (剩余部分)

    // ===== 滞销风险 =====
    pub dead_qty: f64,          // 滞销数量 (超出阈值窗口可消化的部分)
    pub dead_value_usd: f64,    // 滞销占用资金 (USD)
    pub monthly_bleed_usd: f64, // 滞销月度仓储流失 (USD)

    // ===== 可解释性 =====
    pub decision_reason: String, // 决策原因 (JSON,所有规则必须输出 reason)
}
