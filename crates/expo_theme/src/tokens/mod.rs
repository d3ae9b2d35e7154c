//! Design tokens for theming
//!
//! Tokens are the atomic values the site's style rules read:
//! - Colors
//! - Fonts
//! - Spacing scale
//! - Border radius
//! - Shadow style
//!
//! Color, font, and radius values are opaque style expressions. They are
//! stored and published exactly as given.

mod color;
mod design;
mod radius;
mod shadow;
mod spacing;
mod typography;

pub use color::*;
pub use design::*;
pub use radius::*;
pub use shadow::*;
pub use spacing::*;
pub use typography::*;
