// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::CrawlError;
use std::net::IpAddr;
use tracing::debug;
use url::{Host, Url};

/// 验证职位详情页 URL
///
/// 只接受 http/https，且主机不能是 localhost 或私有地址字面量，
/// 在创建浏览器会话之前调用。
pub fn validate_job_url(raw: &str) -> Result<Url, CrawlError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CrawlError::MalformedInput("Job URL is required".to_string()));
    }

    let url = Url::parse(raw).map_err(|e| {
        debug!("Unparsable job URL {:?}: {}", raw, e);
        CrawlError::MalformedInput("Invalid URL format".to_string())
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(CrawlError::MalformedInput(format!(
            "Unsupported URL scheme: {}",
            url.scheme()
        )));
    }

    match url.host() {
        None => Err(CrawlError::MalformedInput("Missing host".to_string())),
        Some(Host::Domain(domain)) if domain.eq_ignore_ascii_case("localhost") => Err(
            CrawlError::MalformedInput("localhost is not allowed".to_string()),
        ),
        Some(Host::Ipv4(ip)) if is_private_ip(IpAddr::V4(ip)) => Err(CrawlError::MalformedInput(
            format!("Private IP access is not allowed: {}", ip),
        )),
        Some(Host::Ipv6(ip)) if is_private_ip(IpAddr::V6(ip)) => Err(CrawlError::MalformedInput(
            format!("Private IP access is not allowed: {}", ip),
        )),
        Some(_) => Ok(url),
    }
}

/// 验证搜索职位名称，返回去除首尾空白后的值
pub fn validate_job_role(raw: &str) -> Result<&str, CrawlError> {
    let role = raw.trim();
    if role.is_empty() {
        return Err(CrawlError::MalformedInput("Job role is required".to_string()));
    }
    Ok(role)
}

fn is_private_ip(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(ipv4) => {
            ipv4.is_private()
                || ipv4.is_loopback()
                || ipv4.is_link_local()
                || ipv4.is_unspecified()
                || ipv4.is_multicast()
        }
        IpAddr::V6(ipv6) => {
            // Unique local (fc00::/7) and link-local (fe80::/10)
            let first = ipv6.segments()[0];
            ipv6.is_loopback()
                || ipv6.is_unspecified()
                || (first & 0xfe00) == 0xfc00
                || (first & 0xffc0) == 0xfe80
        }
    }
}
