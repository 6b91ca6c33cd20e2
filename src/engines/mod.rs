// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod chromium_engine;
pub mod navigation;
pub mod pacing;
pub mod session;
pub mod traits;
pub mod validators;
