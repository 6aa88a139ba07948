// File: crates/strata-core/src/lib.rs
// Summary: Core library entry point; exports the container/window layout API, renderers and export.

pub mod config;
pub mod container;
pub mod draw;
pub mod error;
pub mod export;
pub mod geometry;
pub mod grid;
pub mod scale;
pub mod scene;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;
pub mod window;

pub use config::{ContainerOptions, TimeLabels};
pub use container::Container;
pub use error::{ChartError, Result};
pub use scale::{map_time, map_value, TimeScale, ValueScale};
pub use grid::{gridlines_x, gridlines_y};
pub use scene::{Group, Node, Style};
pub use series::{BarStyle, Candle, CandleStyle, HistBar, VolumeBar};
pub use theme::Theme;
pub use types::{AxisTick, Insets, TimePoint, TimeTick, Timestamp, ValueTick};
pub use window::{EdgeSpace, Window};
pub use skia_safe::Color;
