pub mod iterated;
pub mod sampled;
mod traits;
pub mod transition;

pub use self::iterated::IteratedPageRank;
pub use self::sampled::SampledPageRank;
pub use self::traits::*;
pub use self::transition::{transition_model, TransitionModel};
