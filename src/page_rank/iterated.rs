use super::*;
use crate::*;
use slog::Logger;

pub const DEFAULT_EPSILON: f64 = 0.001;
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

pub struct IteratedPageRank<'a, P>
where
    P: Page,
{
    graph: &'a LinkGraph<P>,
    damping: f64,
    epsilon: f64,
    max_iterations: usize,
    log: Logger,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    /// Largest per-page change between two sweeps that counts as converged.
    pub epsilon: f64,
    pub max_iterations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            epsilon: DEFAULT_EPSILON,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        check_damping(self.damping)?;
        let epsilon = self.epsilon;
        if !(epsilon > 0.0 && epsilon.is_finite()) {
            return Err(Error::InvalidConfiguration(format!(
                "epsilon={epsilon}, expected a positive finite value"
            )));
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidConfiguration(
                "max_iterations=0, expected at least one".to_string(),
            ));
        }
        Ok(())
    }
}

impl<'a, P: Page> IteratedPageRank<'a, P> {
    pub fn new(g: &'a LinkGraph<P>, config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            graph: g,
            damping: config.damping,
            epsilon: config.epsilon,
            max_iterations: config.max_iterations,
            log: discard_logger(),
        })
    }

    pub fn with_logger(mut self, log: Logger) -> Self {
        self.log = log;
        self
    }

    /// One sweep of the recurrence: reads `p`, overwrites `r`.
    ///
    /// Every page starts from the jump share plus an even split of whatever
    /// the dangling pages hold, then each linking page hands `damping` of its
    /// rank to its outlinks in equal parts.
    fn sweep(&self, p: &[f64], r: &mut [f64]) {
        let damping = self.damping;
        let n = self.graph.page_count() as f64;
        let dangling: f64 = self
            .graph
            .dangling_indices()
            .iter()
            .map(|&u| p[u])
            .sum();
        r.fill((1.0 - damping) / n + damping * dangling / n);
        for (u, w) in p.iter().enumerate() {
            let targets = self.graph.targets(u);
            if targets.is_empty() {
                continue;
            }
            let share = damping * w / targets.len() as f64;
            for &v in targets {
                r[v] += share;
            }
        }
    }
}

impl<P: Page> PageRank<P> for IteratedPageRank<'_, P> {
    fn calc(&mut self) -> Result<RankEstimate<P>> {
        let n = self.graph.page_count();
        let mut p = vec![1.0 / n as f64; n];
        let mut r = vec![0.0; n];
        let mut delta = f64::MAX;
        debug!(self.log, "Iterating pageranks";
            "pages" => n,
            "damping" => self.damping,
            "epsilon" => self.epsilon);

        for iteration in 1..=self.max_iterations {
            self.sweep(&p, &mut r);
            delta = max_delta(&p, &r);
            std::mem::swap(&mut p, &mut r);
            trace!(self.log, "Sweep done"; "iteration" => iteration, "max_delta" => delta);

            if delta <= self.epsilon {
                let res = RankEstimate::from_vector(
                    self.graph,
                    p,
                    Method::Iteration {
                        iterations: iteration,
                        max_delta: delta,
                    },
                );
                info!(self.log, "Computed pageranks with ε={} after {} iterations",
                    self.epsilon, iteration;
                    "sum" => res.total_mass());
                return Ok(res);
            }
        }

        warn!(self.log, "Pageranks did not converge";
            "iterations" => self.max_iterations,
            "max_delta" => delta);
        Err(Error::NonConvergence {
            iterations: self.max_iterations,
            max_delta: delta,
        })
    }
}

/// Runs [`IteratedPageRank`] to convergence.
pub fn solve<P: Page>(graph: &LinkGraph<P>, config: &Config) -> Result<RankEstimate<P>> {
    IteratedPageRank::new(graph, config)?.calc()
}
