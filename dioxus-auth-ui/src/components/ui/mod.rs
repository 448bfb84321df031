// SPDX-License-Identifier: MIT OR Apache-2.0

//! Presentational primitives shared by the auth widgets.

pub mod button;
pub mod container;
pub mod divider;

pub use button::Button;
pub use container::{Container, Gap};
pub use divider::Divider;
