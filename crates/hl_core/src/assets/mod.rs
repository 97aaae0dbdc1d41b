//! Asset description index and best-image matching for highlights.

pub mod descriptions;
pub mod matcher;

pub use descriptions::{load_asset_descriptions, parse_asset_descriptions, AssetDescription};
pub use matcher::{pick_asset_for_event, PLACEHOLDER_ASSET};
