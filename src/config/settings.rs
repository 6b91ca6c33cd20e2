// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::job::JobBoard;
use crate::engines::pacing::DelayWindow;
use crate::engines::traits::DESKTOP_USER_AGENT;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// 应用程序配置设置
///
/// 包含服务器、浏览器、导航节奏和提取限制等所有配置项
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 浏览器配置
    pub browser: BrowserSettings,
    /// 导航与节奏配置
    pub navigation: NavigationSettings,
    /// 提取配置
    pub extraction: ExtractionSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 浏览器配置设置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrowserSettings {
    /// Chrome 可执行文件路径，缺省时自动探测
    pub executable: Option<String>,
    /// 远程调试地址，设置后连接已有浏览器而不是启动新进程
    pub remote_debugging_url: Option<String>,
    /// 是否无头模式
    pub headless: bool,
    /// 单个 CDP 请求超时（毫秒）
    pub request_timeout_ms: u64,
    /// User-Agent
    pub user_agent: String,
}

/// 单个招聘网站的超时设置（毫秒）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoardTimeouts {
    pub listing_timeout_ms: u64,
    pub detail_timeout_ms: u64,
}

/// 导航与节奏配置设置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationSettings {
    pub awign: BoardTimeouts,
    pub indeed: BoardTimeouts,
    /// 单个 URL 抓取的超时
    pub single_timeout_ms: u64,
    /// 列表页就绪后的稳定等待
    pub listing_settle: DelayWindow,
    /// 详情页就绪后的稳定等待
    pub detail_settle: DelayWindow,
    /// 单个 URL 页面就绪后的稳定等待
    pub single_settle: DelayWindow,
    /// 相邻两次详情页访问之间的间隔
    pub inter_request: DelayWindow,
}

impl NavigationSettings {
    /// 获取指定网站的超时设置，手动来源没有对应网站，使用单 URL 超时
    pub fn timeouts_for(&self, board: JobBoard) -> BoardTimeouts {
        match board {
            JobBoard::Awign => self.awign,
            JobBoard::Indeed => self.indeed,
            JobBoard::Manual => BoardTimeouts {
                listing_timeout_ms: self.single_timeout_ms,
                detail_timeout_ms: self.single_timeout_ms,
            },
        }
    }
}

/// 提取配置设置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractionSettings {
    /// 每次搜索最多返回的职位数（上限 10）
    pub max_listings: usize,
    /// 单个 URL 抓取时描述的最小字符数
    pub min_single_description: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            browser: BrowserSettings {
                executable: None,
                remote_debugging_url: None,
                headless: true,
                request_timeout_ms: 30000,
                user_agent: DESKTOP_USER_AGENT.to_string(),
            },
            navigation: NavigationSettings {
                awign: BoardTimeouts {
                    listing_timeout_ms: 30000,
                    detail_timeout_ms: 20000,
                },
                indeed: BoardTimeouts {
                    listing_timeout_ms: 45000,
                    detail_timeout_ms: 30000,
                },
                single_timeout_ms: 45000,
                listing_settle: DelayWindow::new(2000, 4000),
                detail_settle: DelayWindow::new(1000, 2000),
                single_settle: DelayWindow::new(1500, 3000),
                inter_request: DelayWindow::new(1500, 3000),
            },
            extraction: ExtractionSettings {
                max_listings: 10,
                min_single_description: 50,
            },
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加内置默认值、`config/default`、`config/{APP_ENVIRONMENT}` 与
    /// `JOBCRAWL__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("JOBCRAWL")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}
