// ==========================================
// ForecastEngine 引擎集成测试
// ==========================================
// 测试目标: 验证四段流水线的端到端口径
// 覆盖范围: 库存校准/销速估计/缺口检测/补货分单/滞销估值
// ==========================================


use nebula_inventory::config::PolicySettings;
use nebula_inventory::domain::types::{StockHealth, TrendDirection};
use nebula_inventory::engine::ForecastEngine;
use test_helpers::*;

// ==========================================
// 测试用例 1: 盘点校准
// ==========================================

#[test]
fn test_stock_calibration_from_base_date() {
    // 基数100,盘点日后10笔销售 → 现货90
    let engine = ForecastEngine::new();

    let product = ProductBuilder::new("A-1").build();
    // 10 笔销售落在 40~31 天前 (盘点日之后,销速窗口之外)
    let ledger = daily_sales("A-1", 40, 10);
    let snapshot = SnapshotBuilder::new().base(100, days_ago(60)).build();

    let forecast = engine.evaluate_single(
        &product,
        &snapshot,
        &ledger,
        &PolicySettings::default(),
        today(),
    );

    assert_eq!(forecast.sales_since, 10);
    assert_eq!(forecast.current_stock, 90, "现货 = 100 - 10");
    // 销售全部落在双窗口之外 → 销速落下限
    assert_eq!(forecast.final_daily, 0.001);
}

#[test]
fn test_current_stock_never_negative() {
    // 销量远超基数 → 现货钳制为0
    let engine = ForecastEngine::new();

    let product = ProductBuilder::new("A-1").build();
    let ledger = daily_sales("A-1", 20, 15);
    let snapshot = SnapshotBuilder::new().base(5, days_ago(30)).build();

    let forecast = engine.evaluate_single(
        &product,
        &snapshot,
        &ledger,
        &PolicySettings::default(),
        today(),
    );

    assert_eq!(forecast.current_stock, 0, "现货不允许为负");
}

// ==========================================
// 测试用例 2: 双轨销速与趋势
// ==========================================

#[test]
fn test_weighted_velocity_and_trend_up() {
    // count7=14 (avg7=2.0), count30=30 (avg30=1.0)
    // → algo = 2.0*0.6 + 1.0*0.4 = 1.6, 趋势 up
    let engine = ForecastEngine::new();

    let product = ProductBuilder::new("A-1").build();
    let mut ledger = Vec::new();
    // 近7天每天2笔 (days 0..=6)
    for i in 0..7 {
        ledger.push(sale("A-1", days_ago(i)));
        ledger.push(sale("A-1", days_ago(i)));
    }
    // 8~23 天前再铺16笔,30天窗口合计30笔
    for i in 0..16 {
        ledger.push(sale("A-1", days_ago(8 + i)));
    }
    let snapshot = SnapshotBuilder::new().base(500, days_ago(60)).build();

    let forecast = engine.evaluate_single(
        &product,
        &snapshot,
        &ledger,
        &PolicySettings::default(),
        today(),
    );

    assert!((forecast.avg7 - 2.0).abs() < 1e-9);
    assert!((forecast.avg30 - 1.0).abs() < 1e-9);
    assert!((forecast.algo_daily - 1.6).abs() < 1e-9);
    assert!((forecast.final_daily - 1.6).abs() < 1e-9);
    assert!(!forecast.is_manual);
    assert_eq!(forecast.trend, Some(TrendDirection::Up), "2.0 > 1.1 应判上升");
}

#[test]
fn test_manual_override_wins_exactly() {
    // 人工日销 > 0 时,最终日销严格等于人工值
    let engine = ForecastEngine::new();

    let product = ProductBuilder::new("A-1").build();
    let ledger = daily_sales("A-1", 6, 7); // 有算法销速
    let snapshot = SnapshotBuilder::new()
        .base(100, days_ago(60))
        .daily_override(3.7)
        .build();

    let forecast = engine.evaluate_single(
        &product,
        &snapshot,
        &ledger,
        &PolicySettings::default(),
        today(),
    );

    assert!(forecast.is_manual);
    assert_eq!(forecast.final_daily, 3.7, "人工值应精确生效");
    assert_eq!(forecast.trend, None, "人工锁定时不输出趋势");
}

// ==========================================
// 测试用例 3: 缺口检测与补货分单
// ==========================================

#[test]
fn test_gap_detection_and_split() {
    // 现货50,日销5 → 断货日+10天; 到货日+15天 → 缺口5天/25件
    // 目标 = ceil(5*(60+30)) = 450 → 总需求400 → 空运25/海运375
    let engine = ForecastEngine::new();

    let product = ProductBuilder::new("A-1").build();
    let ledger = daily_sales("A-1", 40, 10); // 盘点日后10笔,窗口外
    let snapshot = SnapshotBuilder::new()
        .base(60, days_ago(55))
        .inbound(0, Some(days_ahead(15)))
        .daily_override(5.0)
        .build();

    let forecast = engine.evaluate_single(
        &product,
        &snapshot,
        &ledger,
        &PolicySettings::default(),
        today(),
    );

    assert_eq!(forecast.current_stock, 50);
    assert_eq!(forecast.run_out_date, days_ahead(10));
    assert_eq!(forecast.gap_days, 5);
    assert_eq!(forecast.gap_qty, 25);
    assert_eq!(forecast.target_qty, 450);
    assert_eq!(forecast.total_restock_needed, 400);
    assert_eq!(forecast.air_restock, 25, "空运只承接缺口量");
    assert_eq!(forecast.sea_restock, 375, "海运承接剩余需求");
    // 分单不变式: 缺口不超过总需求时,空运+海运恰补足总需求
    assert_eq!(
        forecast.air_restock + forecast.sea_restock,
        forecast.total_restock_needed
    );
}

#[test]
fn test_no_gap_when_eta_before_runout() {
    // 到货日早于断货日 → 无缺口,补货全部走海运
    let engine = ForecastEngine::new();

    let product = ProductBuilder::new("A-1").build();
    let snapshot = SnapshotBuilder::new()
        .base(50, days_ago(10))
        .inbound(100, Some(days_ahead(5)))
        .daily_override(5.0)
        .build();

    let forecast = engine.evaluate_single(
        &product,
        &snapshot,
        &[],
        &PolicySettings::default(),
        today(),
    );

    assert_eq!(forecast.gap_days, 0);
    assert_eq!(forecast.gap_qty, 0);
    assert_eq!(forecast.air_restock, 0);
    // 目标450 - (50+100) = 300
    assert_eq!(forecast.sea_restock, 300);
}

#[test]
fn test_gap_exceeding_total_needed_clamps_sea() {
    // 缺口量超过总需求 → 海运钳制为0,空运+海运 > 总需求
    let engine = ForecastEngine::new();

    let product = ProductBuilder::new("A-1").build();
    // 现货40,日销0.5 → 断货日+80天; 到货日+130天 → 缺口50天/25件
    // 目标 = ceil(0.5*90) = 45 → 总需求5 < 空运25
    let snapshot = SnapshotBuilder::new()
        .base(40, days_ago(10))
        .inbound(0, Some(days_ahead(130)))
        .daily_override(0.5)
        .build();

    let forecast = engine.evaluate_single(
        &product,
        &snapshot,
        &[],
        &PolicySettings::default(),
        today(),
    );

    assert_eq!(forecast.gap_days, 50);
    assert_eq!(forecast.gap_qty, 25);
    assert_eq!(forecast.total_restock_needed, 5);
    assert_eq!(forecast.air_restock, 25);
    assert_eq!(forecast.sea_restock, 0, "海运不允许为负");
    assert!(
        forecast.air_restock + forecast.sea_restock >= forecast.total_restock_needed,
        "合计补货量不得低于总需求"
    );
}

// ==========================================
// 测试用例 4: 滞销估值
// ==========================================

#[test]
fn test_dead_stock_exposure() {
    // 库存1000,日销1,阈值120 → 滞销880
    // 单件到岸成本 (50+22)/7.2 = 10 USD → 占用8800; 月流失 880*0.4 = 352
    let engine = ForecastEngine::new();

    let product = ProductBuilder::new("A-1").build();
    let snapshot = SnapshotBuilder::new()
        .base(1000, days_ago(5))
        .daily_override(1.0)
        .build();

    let forecast = engine.evaluate_single(
        &product,
        &snapshot,
        &[],
        &PolicySettings::default(),
        today(),
    );

    assert!((forecast.dead_qty - 880.0).abs() < 1e-9);
    assert!((forecast.dead_value_usd - 8800.0).abs() < 1e-6);
    assert!((forecast.monthly_bleed_usd - 352.0).abs() < 1e-9);
    assert!(forecast.decision_reason.contains("dead_stock"));
}

#[test]
fn test_no_dead_stock_within_threshold() {
    // 库存可在阈值窗口内消化 → 滞销为0
    let engine = ForecastEngine::new();

    let product = ProductBuilder::new("A-1").build();
    let snapshot = SnapshotBuilder::new()
        .base(100, days_ago(5))
        .daily_override(1.0)
        .build();

    let forecast = engine.evaluate_single(
        &product,
        &snapshot,
        &[],
        &PolicySettings::default(),
        today(),
    );

    assert_eq!(forecast.dead_qty, 0.0);
    assert_eq!(forecast.dead_value_usd, 0.0);
}

// ==========================================
// 测试用例 5: 哨兵与健康度
// ==========================================

#[test]
fn test_dormant_sku_dos_sentinel() {
    // 人工日销为0、双窗口零销售 → 日销0.001,DOS=999,判积压
    let engine = ForecastEngine::new();

    let product = ProductBuilder::new("A-1").build();
    let snapshot = SnapshotBuilder::new().base(100, days_ago(90)).build();

    let forecast = engine.evaluate_single(
        &product,
        &snapshot,
        &[],
        &PolicySettings::default(),
        today(),
    );

    assert_eq!(forecast.algo_daily, 0.0);
    assert_eq!(forecast.final_daily, 0.001);
    assert_eq!(forecast.dos, 999);
    assert_eq!(forecast.health, StockHealth::Overstocked);
}

#[test]
fn test_health_critical_when_dos_low() {
    // 现货+在途仅够20天 → 断货风险档
    let engine = ForecastEngine::new();

    let product = ProductBuilder::new("A-1").build();
    let snapshot = SnapshotBuilder::new()
        .base(100, days_ago(5))
        .daily_override(5.0)
        .build();

    let forecast = engine.evaluate_single(
        &product,
        &snapshot,
        &[],
        &PolicySettings::default(),
        today(),
    );

    assert_eq!(forecast.dos, 20);
    assert_eq!(forecast.health, StockHealth::Critical);
}

// ==========================================
// 测试用例 6: 配置快照一致性
// ==========================================

#[test]
fn test_batch_consistent_policy_across_skus() {
    // 同一轮批量预测内,所有 SKU 使用同一份配置口径
    let engine = ForecastEngine::new();

    let pairs: Vec<_> = (1..=3)
        .map(|i| {
            (
                ProductBuilder::new(&format!("A-{}", i)).build(),
                SnapshotBuilder::new()
                    .base(100, days_ago(5))
                    .daily_override(2.0)
                    .build(),
            )
        })
        .collect();

    let settings = PolicySettings {
        lead_time_days: 45,
        safety_stock_days: 15,
        ..PolicySettings::default()
    };

    let forecasts = engine.evaluate_batch(&pairs, &[], &settings, today());

    assert_eq!(forecasts.len(), 3);
    for f in &forecasts {
        // 目标 = ceil(2*(45+15)) = 120, 全员一致
        assert_eq!(f.target_qty, 120, "同轮内目标水位口径应一致");
    }
}
