pub mod liquid;
pub mod options;
pub mod point;
pub mod pointer;
pub mod target;
pub mod ticker;
pub mod waves;
