// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 请求节奏控制
//!
//! 导航后的稳定等待与详情页之间的请求间隔都通过 [`DelayProvider`] 实现，
//! 测试中替换为 [`NoDelay`] 或 [`RecordingDelay`] 以保证确定性。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use std::time::Duration;

/// 抖动延迟区间（毫秒，闭区间）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayWindow {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayWindow {
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    pub const fn fixed(ms: u64) -> Self {
        Self::new(ms, ms)
    }

    /// 在区间内随机采样一次
    pub fn sample(&self) -> Duration {
        if self.max_ms <= self.min_ms {
            return Duration::from_millis(self.min_ms);
        }
        Duration::from_millis(rand::random_range(self.min_ms..=self.max_ms))
    }
}

/// 延迟提供者特质
#[async_trait]
pub trait DelayProvider: Send + Sync {
    async fn pause(&self, window: DelayWindow);
}

/// 真实的随机抖动延迟
#[derive(Debug, Default, Clone, Copy)]
pub struct JitteredDelay;

#[async_trait]
impl DelayProvider for JitteredDelay {
    async fn pause(&self, window: DelayWindow) {
        let delay = window.sample();
        tracing::trace!("Pausing for {}ms", delay.as_millis());
        tokio::time::sleep(delay).await;
    }
}

/// 不等待
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

#[async_trait]
impl DelayProvider for NoDelay {
    async fn pause(&self, _window: DelayWindow) {}
}

/// 记录每次请求的等待区间但不真正等待
#[derive(Debug, Default)]
pub struct RecordingDelay {
    windows: Mutex<Vec<DelayWindow>>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorded(&self) -> Vec<DelayWindow> {
        match self.windows.lock() {
            Ok(windows) => windows.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl DelayProvider for RecordingDelay {
    async fn pause(&self, window: DelayWindow) {
        match self.windows.lock() {
            Ok(mut windows) => windows.push(window),
            Err(poisoned) => poisoned.into_inner().push(window),
        }
    }
}
