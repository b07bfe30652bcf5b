// SPDX-License-Identifier: MPL-2.0
//! Application-layer boundaries between the engine and the outside world.

pub mod port;
