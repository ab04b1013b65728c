// ==========================================
// 跨境电商库存利润分析系统 - 策略配置
// ==========================================
// 职责: 全局补货策略参数 (所有 SKU 共享一份)
// 存储: JSON 文件 (应用数据目录)
// ==========================================

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ==========================================
// PolicySettings - 全局策略配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicySettings {
    pub exchange_rate: f64,            // CNY→USD 结算汇率
    pub lead_time_days: i64,           // 备货周期 (常规渠道补货天数)
    pub safety_stock_days: i64,        // 安全库存 (缓冲天数)
    pub dead_stock_threshold_days: i64, // 滞销阈值 (超出此窗口的库存计为滞销)
}

impl Default for PolicySettings {
    /// 出厂默认值
    fn default() -> Self {
        Self {
            exchange_rate: 7.2,
            lead_time_days: 60,
            safety_stock_days: 30,
            dead_stock_threshold_days: 120,
        }
    }
}

impl PolicySettings {
    /// 校验配置合法性
    ///
    /// # 返回
    /// - Ok(()): 配置可用
    /// - Err: 带显式原因的校验错误
    pub fn validate(&self) -> Result<()> {
        if !self.exchange_rate.is_finite() || self.exchange_rate <= 0.0 {
            anyhow::bail!("汇率必须为正数: exchange_rate={}", self.exchange_rate);
        }
        if self.lead_time_days < 0 {
            anyhow::bail!("备货周期不能为负: lead_time_days={}", self.lead_time_days);
        }
        if self.safety_stock_days < 0 {
            anyhow::bail!("安全库存不能为负: safety_stock_days={}", self.safety_stock_days);
        }
        if self.dead_stock_threshold_days < 0 {
            anyhow::bail!(
                "滞销阈值不能为负: dead_stock_threshold_days={}",
                self.dead_stock_threshold_days
            );
        }
        Ok(())
    }

    /// 从 JSON 文件加载配置
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {}", path.display()))?;
        let settings: PolicySettings = serde_json::from_str(&raw)
            .with_context(|| format!("解析配置文件失败: {}", path.display()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// 加载配置,失败时回退默认值
    ///
    /// 文件缺失或格式错误不阻断启动,仅记录告警。
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from_path(path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "配置加载失败,使用出厂默认值"
                );
                Self::default()
            }
        }
    }

    /// 保存配置到 JSON 文件 (目录不存在时自动创建)
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("创建配置目录失败: {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)
            .with_context(|| format!("写入配置文件失败: {}", path.display()))?;
        Ok(())
    }
}

/// 默认配置文件路径 (平台应用数据目录下)
///
/// 数据目录不可用时回退到当前目录。
pub fn default_settings_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nebula-inventory")
        .join("settings.json")
}
