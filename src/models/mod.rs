pub mod filter;
pub mod observation;
pub mod stats;
pub mod variant;

pub use filter::*;
pub use observation::*;
pub use stats::*;
pub use variant::*;
