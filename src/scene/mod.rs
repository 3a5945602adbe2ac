pub mod model;
pub mod playback;
pub mod snapshot;
