use super::{transition::TransitionModel, *};
use crate::*;
use rand::Rng;
use slog::Logger;

pub const DEFAULT_SAMPLES: usize = 10_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub samples: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        check_damping(self.damping)?;
        if self.samples == 0 {
            return Err(Error::InvalidConfiguration(
                "samples=0, expected at least one".to_string(),
            ));
        }
        Ok(())
    }
}

/// Estimates PageRank by counting where a random surfer goes.
///
/// The walk starts on a uniformly chosen page and takes `samples` steps
/// through the [`TransitionModel`]; the rank of a page is the share of steps
/// that landed on it. The start itself is not counted.
pub struct SampledPageRank<'a, P, R>
where
    P: Page,
    R: Rng,
{
    model: TransitionModel<'a, P>,
    samples: usize,
    rng: R,
    log: Logger,
}

impl<'a, P: Page, R: Rng> SampledPageRank<'a, P, R> {
    pub fn new(g: &'a LinkGraph<P>, config: &Config, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            model: TransitionModel::new(g, config.damping)?,
            samples: config.samples,
            rng,
            log: discard_logger(),
        })
    }

    pub fn with_logger(mut self, log: Logger) -> Self {
        self.log = log;
        self
    }
}

impl<P: Page, R: Rng> PageRank<P> for SampledPageRank<'_, P, R> {
    fn calc(&mut self) -> Result<RankEstimate<P>> {
        let graph = self.model.graph();
        let n = graph.page_count();
        let mut visits = vec![0usize; n];
        let mut current = self.rng.random_range(0..n);
        debug!(self.log, "Sampling pageranks";
            "pages" => n,
            "samples" => self.samples,
            "damping" => self.model.damping(),
            "start" => ?graph.page(current));

        for _ in 0..self.samples {
            current = self.model.step(current, &mut self.rng);
            visits[current] += 1;
        }

        let total = self.samples as f64;
        let ranks = visits.into_iter().map(|c| c as f64 / total).collect();
        let res = RankEstimate::from_vector(
            graph,
            ranks,
            Method::Sampling {
                samples: self.samples,
            },
        );
        info!(self.log, "Sampled pageranks";
            "samples" => self.samples,
            "sum" => res.total_mass());
        Ok(res)
    }
}

/// Runs one [`SampledPageRank`] walk driven by `rng`.
pub fn estimate<P: Page, R: Rng>(
    graph: &LinkGraph<P>,
    config: &Config,
    rng: R,
) -> Result<RankEstimate<P>> {
    SampledPageRank::new(graph, config, rng)?.calc()
}
