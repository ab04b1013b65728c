// ==========================================
// 跨境电商库存利润分析系统 - 销速估计引擎
// ==========================================
// 职责: 双轨加权日销估计 + 人工干预仲裁 + 趋势判定
// 输入: 销售台账 + 人工日销 + 当前日期
// 输出: VelocityEstimate
// 红线: 最终日销永不为零 (下限保护,防下游除零)
// ==========================================

use crate::config::policy;
use crate::domain::sale::SaleEvent;
use crate::domain::types::TrendDirection;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

// ==========================================
// VelocityEstimate - 销速估计结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocityEstimate {
    pub avg7: f64,                     // 近7天平均日销
    pub avg30: f64,                    // 近30天平均日销
    pub algo_daily: f64,               // 加权算法日销
    pub final_daily: f64,              // 最终日销 (>0 恒成立)
    pub is_manual: bool,               // 是否人工锁定
    pub trend: Option<TrendDirection>, // 趋势 (人工锁定时不输出)
}

// ==========================================
// VelocityEngine - 销速估计引擎
// ==========================================
pub struct VelocityEngine {
    // 无状态引擎,不需要注入依赖
}

impl VelocityEngine {
    /// 创建新的销速估计引擎
    pub fn new() -> Self {
        Self {}
    }

    /// 估计单 SKU 日销
    ///
    /// 规则 (顺序执行):
    /// 1) 统计近7天/近30天 Sale 事件条数 (date ≥ today−窗口,闭区间)
    /// 2) algo_daily = avg7*0.6 + avg30*0.4
    /// 3) 人工日销 > 0 → 无条件采用人工值并锁定
    /// 4) 否则采用算法值; 算法值为0时落到下限 0.001
    ///
    /// # 参数
    /// - daily_override: 人工日销 (0 = 不干预)
    /// - today: 当前日期 (显式传入,保证可重现)
    pub fn estimate(
        &self,
        sku: &str,
        daily_override: f64,
        ledger: &[SaleEvent],
        today: NaiveDate,
    ) -> VelocityEstimate {
        let cutoff7 = today - Duration::days(policy::SHORT_WINDOW_DAYS);
        let cutoff30 = today - Duration::days(policy::LONG_WINDOW_DAYS);

        let count7 = self.count_sales_since(sku, ledger, cutoff7);
        let count30 = self.count_sales_since(sku, ledger, cutoff30);

        let avg7 = count7 as f64 / policy::SHORT_WINDOW_DAYS as f64;
        let avg30 = count30 as f64 / policy::LONG_WINDOW_DAYS as f64;

        let algo_daily =
            avg7 * policy::SHORT_WINDOW_WEIGHT + avg30 * policy::LONG_WINDOW_WEIGHT;

        let is_manual = daily_override > 0.0;
        let final_daily = if is_manual {
            daily_override
        } else if algo_daily > 0.0 {
            algo_daily
        } else {
            policy::VELOCITY_FLOOR
        };

        // 趋势仅作提示,人工锁定时不输出
        let trend = if is_manual {
            None
        } else {
            Some(Self::classify_trend(avg7, avg30))
        };

        VelocityEstimate {
            avg7,
            avg30,
            algo_daily,
            final_daily,
            is_manual,
            trend,
        }
    }

    /// 统计指定日期 (含) 以来的 Sale 事件条数
    fn count_sales_since(&self, sku: &str, ledger: &[SaleEvent], cutoff: NaiveDate) -> i64 {
        ledger
            .iter()
            .filter(|e| e.sku == sku && e.counts_as_sale() && e.date >= cutoff)
            .count() as i64
    }

    /// 趋势判定
    ///
    /// 规则:
    /// - avg7 > avg30*1.1 → up
    /// - avg7 < avg30*0.9 → down
    /// - 其余 → flat
    fn classify_trend(avg7: f64, avg30: f64) -> TrendDirection {
        if avg7 > avg30 * policy::TREND_UP_RATIO {
            TrendDirection::Up
        } else if avg7 < avg30 * policy::TREND_DOWN_RATIO {
            TrendDirection::Down
        } else {
            TrendDirection::Flat
        }
    }
}

impl Default for VelocityEngine {
    fn default() -> Self {
        Self::new()
    }
}
