// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles shared by the UI components.

pub mod button;
pub mod container;
