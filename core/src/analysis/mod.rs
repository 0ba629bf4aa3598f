pub use moves::*;
pub use observation::*;

mod moves;
mod observation;
