// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义 HTTP 请求与响应的数据结构，字段名统一为 camelCase
pub mod crawl_request;
pub mod fetch_job_request;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// 非字符串的 JSON 值按空字符串处理，交给后续校验给出统一的错误信息
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) => value,
        _ => String::new(),
    })
}
