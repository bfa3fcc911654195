//! Capability descriptor resolution for test-run reporting.
//!
//! WebDriver sessions describe themselves with capability objects whose
//! shape depends on protocol generation and grid vendor:
//! - Legacy JSON Wire Protocol: flat keys (`browserName`, `version`, `platform`)
//! - W3C: the same fields nested under `alwaysMatch`
//! - Cloud grids: vendor keys (`browser_version`, `os`, `os_version`, `app`)
//! - Mobile: device keys (`deviceName`, `platformVersion`)
//!
//! This crate classifies the dialect ([`CapabilityView::classify`]) and
//! applies ordered field-precedence tables ([`fields`]) to produce the
//! canonical [browser, platform] tag pair ([`tags_for`]). Resolution is
//! total: any JSON input yields a pair, degrading to the literal
//! `"unknown"` name and an absent version when nothing matches.

pub mod dialect;
pub mod fields;
pub mod tags;

pub use dialect::{is_w3c, CapabilityView, Dialect};
pub use fields::{
    FieldKey, Precedence, BROWSER_NAME, BROWSER_VERSION, FALLBACK_NAME, PLATFORM_NAME,
    PLATFORM_VERSION, SAUCE_STORAGE_PREFIX,
};
pub use tags::{tag_set_for, tags_for};
