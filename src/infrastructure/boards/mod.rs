// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod awign;
pub mod generic;
pub mod indeed;

use crate::domain::boards::BoardCatalog;
use std::sync::Arc;

pub use awign::AwignSource;
pub use generic::single_page_profile;
pub use indeed::IndeedSource;

/// 内置的招聘网站集合
pub fn default_catalog() -> BoardCatalog {
    BoardCatalog::new(single_page_profile())
        .with_source(Arc::new(AwignSource::new()))
        .with_source(Arc::new(IndeedSource::new()))
}
