pub mod color;
pub mod props;
pub mod types;

pub use color::{
    ColorMode, gradient_reference, is_resolved_color, resolve_color_reference, scale_color,
};
pub use props::{PropBag, prop_bag};
pub use types::{ChartSize, Dataset, Dimension, Record};
