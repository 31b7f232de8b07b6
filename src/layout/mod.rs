//! Height estimation and page packing

mod estimate;
mod paginator;

pub use estimate::HeightEstimator;
pub use paginator::{LayoutError, Page, PageSide, Paginator, USABLE_HEIGHT_RATIO};
