// harmony-build: Lynx HarmonyOS Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Concrete task implementations, one per build stage.
//!
//! ```text
//! task::tasks
//! Scripts:   LynxCoreTask (js_tools/build.py + devtool resources)
//!            BundleTask   (explorer showcase + homepage)
//! Native:    NativeTask   (gn --> ninja --> copy .so, per ABI)
//! Packaging: HarTask      (patch --> assembleHar --> verify, per module)
//!            HapTask      (assembleApp)
//! ```

pub mod bundle;
pub mod hap;
pub mod har;
pub mod js_core;
pub mod native;

#[cfg(test)]
pub(crate) mod test_support;
