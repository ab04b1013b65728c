// ==========================================
// 跨境电商库存利润分析系统 - 配置层
// ==========================================
// 职责: 全局策略配置的定义、默认值与文件往返
// 红线: 引擎只读配置,单轮重算内视为不可变快照
// ==========================================

pub mod settings;

pub use settings::{default_settings_path, PolicySettings};

// ==========================================
// 固定策略常量
// ==========================================
// 算法内置口径,不开放配置 (与可配置的滞销阈值解耦)
pub mod policy {
    // 双轨销速窗口
    pub const SHORT_WINDOW_DAYS: i64 = 7; // 短窗口 (天)
    pub const LONG_WINDOW_DAYS: i64 = 30; // 长窗口 (天)

    // 加权算法权重: 近期活跃占主导,30 天基线抑制单日脉冲
    pub const SHORT_WINDOW_WEIGHT: f64 = 0.6;
    pub const LONG_WINDOW_WEIGHT: f64 = 0.4;

    // 趋势判定比例 (7天 vs 30天基线)
    pub const TREND_UP_RATIO: f64 = 1.1;
    pub const TREND_DOWN_RATIO: f64 = 0.9;

    // 日销下限: 防止下游天数推算除零
    pub const VELOCITY_FLOOR: f64 = 0.001;

    // DOS 计算的最小有效销速,低于此值输出哨兵值
    pub const DOS_VELOCITY_EPSILON: f64 = 0.01;
    pub const DOS_SENTINEL: i64 = 999;

    // DOS 健康度分档 (展示口径,固定不可配)
    pub const DOS_CRITICAL_DAYS: i64 = 30;
    pub const DOS_OVERSTOCKED_DAYS: i64 = 120;
}
