pub mod angle;
pub mod animation;
pub mod config;
pub mod engine;
pub mod error;
pub mod label_layout;
pub mod palette;
pub mod rotation;
pub mod segments;
pub mod selection;
pub mod stats;
pub mod validation;
pub mod wheel_option;

pub use config::SpinConfig;
pub use engine::{SpinEngine, SpinOutcome, SpinPlan, SpinRejection, FrameUpdate};
pub use error::{WheelError, Result};
pub use segments::Segment;
pub use wheel_option::WheelOption;
