//! Tool definitions module.
//!
//! One file per tool. The conversion tools (`dac`, `cfn`) go through the
//! safe-execution layer in `core::execution`.

pub mod calculate;
pub mod cfn;
pub mod dac;
pub mod image;

pub use calculate::{CalculateParams, CalculateTool, Operation};
pub use cfn::{CfnParams, CfnTool};
pub use dac::{DacParams, DacTool};
pub use image::{ImageParams, ImageTool};
