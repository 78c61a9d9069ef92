// SPDX-License-Identifier: MPL-2.0
//! `paperview` is a desktop wallpaper gallery built with the Iced GUI framework.
//!
//! It browses a wallpaper catalog served by a headless CMS, previews each
//! wallpaper in a device mockup (phone or monitor), and saves the selected
//! image to disk. It demonstrates internationalization with Fluent, user
//! preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/paperview/0.2.0")]

pub mod app;
pub mod catalog;
pub mod content;
pub mod error;
pub mod i18n;
pub mod ui;
