// ==========================================
// 跨境电商库存利润分析系统 - 时间线推演引擎
// ==========================================
// 职责: 断货日推演 + 到货缺口检测 + 可售天数 (DOS)
// 输入: 现货/在途 + 最终日销 + 当前日期
// 输出: TimelineProjection
// ==========================================

use crate::config::policy;
use crate::domain::types::StockHealth;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

// ==========================================
// TimelineProjection - 时间线推演结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineProjection {
    pub days_left: f64,          // 现货可售天数 (未取整)
    pub run_out_date: NaiveDate, // 预计断货日 (today + floor(days_left))
    pub gap_days: i64,           // 断货缺口天数 (无缺口为0)
    pub gap_qty: i64,            // 缺口期预计需求量 (向上取整)
    pub dos: i64,                // 可售天数 (现货+在途; 999 = 销速过低)
    pub health: StockHealth,     // DOS 健康度档位
}

// ==========================================
// TimelineEngine - 时间线推演引擎
// ==========================================
pub struct TimelineEngine {
    // 无状态引擎,不需要注入依赖
}

impl TimelineEngine {
    /// 创建新的时间线推演引擎
    pub fn new() -> Self {
        Self {}
    }

    /// 推演单 SKU 断货时间线
    ///
    /// 规则:
    /// 1) 断货日 = today + floor(现货/日销)
    /// 2) 到货日严格晚于断货日 → 存在缺口:
    ///    gap_days = 到货日 − 断货日, gap_qty = ceil(gap_days*日销)
    /// 3) 无到货日或到货日不晚于断货日 → 无缺口 (补货先于断货到达)
    /// 4) DOS = round((现货+在途)/日销); 日销 ≤ 0.01 时输出哨兵 999
    ///
    /// # 参数
    /// - final_daily: 最终日销 (上游保证 > 0)
    /// - inbound_date: 预计到货日 (None = 无信息)
    pub fn project(
        &self,
        current_stock: i64,
        inbound: i64,
        inbound_date: Option<NaiveDate>,
        final_daily: f64,
        today: NaiveDate,
    ) -> TimelineProjection {
        let days_left = current_stock as f64 / final_daily;
        let run_out_date = today + Duration::days(days_left.floor() as i64);

        let (gap_days, gap_qty) = match inbound_date {
            Some(eta) if eta > run_out_date => {
                let gap_days = (eta - run_out_date).num_days();
                let gap_qty = (gap_days as f64 * final_daily).ceil() as i64;
                (gap_days, gap_qty)
            }
            _ => (0, 0),
        };

        let total_inventory = current_stock + inbound;
        let dos = if final_daily > policy::DOS_VELOCITY_EPSILON {
            (total_inventory as f64 / final_daily).round() as i64
        } else {
            policy::DOS_SENTINEL
        };

        TimelineProjection {
            days_left,
            run_out_date,
            gap_days,
            gap_qty,
            dos,
            health: Self::classify_health(dos),
        }
    }

    /// DOS 健康度分档 (固定展示口径)
    ///
    /// - DOS < 30 → 断货风险
    /// - DOS > 120 → 积压
    /// - 其余 → 健康
    pub fn classify_health(dos: i64) -> StockHealth {
        if dos < policy::DOS_CRITICAL_DAYS {
            StockHealth::Critical
        } else if dos > policy::DOS_OVERSTOCKED_DAYS {
            StockHealth::Overstocked
        } else {
            StockHealth::Healthy
        }
    }
}

impl Default for TimelineEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    /// 基准日期: 2025-06-30
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }

    #[test]
    fn test_scenario_1_gap_detected() {
        // 场景1: 现货50,日销5 → 10天后断货; 到货日 +15天 → 缺口5天/25件
        let engine = TimelineEngine::new();

        let eta = today() + Duration::days(15);
        let projection = engine.project(50, 0, Some(eta), 5.0, today());

        assert!((projection.days_left - 10.0).abs() < 1e-9);
        assert_eq!(projection.run_out_date, today() + Duration::days(10));
        assert_eq!(projection.gap_days, 5, "缺口应为5天");
        assert_eq!(projection.gap_qty, 25, "缺口需求应为25件");
    }

    #[test]
    fn test_scenario_2_no_eta_no_gap() {
        // 场景2: 无到货日 → 无缺口
        let engine = TimelineEngine::new();

        let projection = engine.project(50, 0, None, 5.0, today());

        assert_eq!(projection.gap_days, 0);
        assert_eq!(projection.gap_qty, 0);
    }

    #[test]
    fn test_scenario_3_eta_before_runout_no_gap() {
        // 场景3: 到货日不晚于断货日 → 补货先到,无缺口
        let engine = TimelineEngine::new();

        // 断货日 = today + 10; 到货日 = today + 10 (恰等,不算缺口)
        let eta = today() + Duration::days(10);
        let projection = engine.project(50, 0, Some(eta), 5.0, today());

        assert_eq!(projection.gap_days, 0, "到货日恰等于断货日不构成缺口");
        assert_eq!(projection.gap_qty, 0);
    }

    #[test]
    fn test_scenario_4_dos_includes_inbound() {
        // 场景4: DOS 按现货+在途口径
        let engine = TimelineEngine::new();

        let projection = engine.project(50, 100, None, 5.0, today());

        assert_eq!(projection.dos, 30, "(50+100)/5 = 30");
        assert_eq!(projection.health, StockHealth::Healthy, "DOS=30 不低于临界线");
    }

    #[test]
    fn test_scenario_5_dos_sentinel_at_floor_velocity() {
        // 场景5: 日销处于下限 0.001 (≤0.01) → DOS 哨兵 999
        let engine = TimelineEngine::new();

        let projection = engine.project(100, 0, None, 0.001, today());

        assert_eq!(projection.dos, 999, "近零销速应输出哨兵值");
        assert_eq!(projection.health, StockHealth::Overstocked);
    }

    #[test]
    fn test_scenario_6_dos_rounding() {
        // 场景6: DOS 四舍五入
        let engine = TimelineEngine::new();

        // 10/3 = 3.33 → 3
        assert_eq!(engine.project(10, 0, None, 3.0, today()).dos, 3);
        // 11/2 = 5.5 → 6 (round half away from zero)
        assert_eq!(engine.project(11, 0, None, 2.0, today()).dos, 6);
    }

    #[test]
    fn test_scenario_7_fractional_days_left_floored() {
        // 场景7: 断货日按整天向下取整
        let engine = TimelineEngine::new();

        // 10/3 = 3.33天 → 断货日 today+3
        let projection = engine.project(10, 0, None, 3.0, today());

        assert_eq!(projection.run_out_date, today() + Duration::days(3));
    }

    #[test]
    fn test_health_bands() {
        // 健康度分档边界
        assert_eq!(TimelineEngine::classify_health(29), StockHealth::Critical);
        assert_eq!(TimelineEngine::classify_health(30), StockHealth::Healthy);
        assert_eq!(TimelineEngine::classify_health(120), StockHealth::Healthy);
        assert_eq!(TimelineEngine::classify_health(121), StockHealth::Overstocked);
    }

    #[test]
    fn test_zero_stock_runs_out_today() {
        // 现货为0 → 断货日即当天,缺口从今天起算
        let engine = TimelineEngine::new();

        let eta = today() + Duration::days(4);
        let projection = engine.project(0, 0, Some(eta), 2.0, today());

        assert_eq!(projection.run_out_date, today());
        assert_eq!(projection.gap_days, 4);
        assert_eq!(projection.gap_qty, 8);
    }
}
