pub mod outline;
pub mod spline;
