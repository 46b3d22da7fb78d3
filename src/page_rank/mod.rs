//! Two estimators of the same stationary distribution: a random surfer
//! ([`sampled`]) and a power iteration ([`iterated`]), both driven by the
//! damped link-following model in [`transition`].

pub mod estimate;
pub mod iterated;
pub mod sampled;
pub mod traits;
pub mod transition;

pub use self::estimate::{Method, RankEstimate};
pub use self::iterated::IteratedPageRank;
pub use self::sampled::SampledPageRank;
pub use self::traits::*;
pub use self::transition::{transition_model, TransitionModel};

use crate::{Error, Result};

pub const DEFAULT_DAMPING: f64 = 0.85;

pub(crate) fn check_damping(damping: f64) -> Result<()> {
    if (0.0..=1.0).contains(&damping) {
        Ok(())
    } else {
        Err(Error::InvalidConfiguration(format!(
            "damping={damping}, expected a value in [0, 1]"
        )))
    }
}

pub(crate) fn discard_logger() -> slog::Logger {
    slog::Logger::root(slog::Discard, o!())
}
