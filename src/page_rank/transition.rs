use super::check_damping;
use crate::*;
use rand::Rng;

/// The random surfer's next-page distribution.
///
/// From a page with outlinks the surfer follows one of them, chosen
/// uniformly, with probability `damping`, and otherwise jumps to a page
/// chosen uniformly from the whole graph (the current page included). A
/// dangling page always jumps.
#[derive(Debug, Clone)]
pub struct TransitionModel<'a, P: Page> {
    graph: &'a LinkGraph<P>,
    damping: f64,
}

impl<'a, P: Page> TransitionModel<'a, P> {
    pub fn new(graph: &'a LinkGraph<P>, damping: f64) -> Result<Self> {
        check_damping(damping)?;
        Ok(Self { graph, damping })
    }

    pub fn graph(&self) -> &'a LinkGraph<P> {
        self.graph
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Probability of moving from `page` to each page of the graph.
    ///
    /// Every page gets the jump share `(1 - damping) / N`; every outlink of
    /// `page` additionally gets `damping / k`. A dangling page spreads its
    /// mass evenly, `1 / N` per page.
    pub fn distribution(&self, page: &P) -> Result<Distribution<P>> {
        let u = self
            .graph
            .index_of(page)
            .ok_or_else(|| Error::UnknownPage(format!("{page:?}")))?;
        let n = self.graph.page_count() as f64;
        let targets = self.graph.targets(u);
        let (base, share) = if targets.is_empty() {
            (1.0 / n, 0.0)
        } else {
            (
                (1.0 - self.damping) / n,
                self.damping / targets.len() as f64,
            )
        };
        let mut dist: Distribution<P> = self.graph.pages().map(|p| (p.clone(), base)).collect();
        for &v in targets {
            if let Some(w) = dist.get_mut(self.graph.page(v)) {
                *w += share;
            }
        }
        Ok(dist)
    }

    /// Draws the page following the `from`-th page. The outcome is
    /// distributed exactly as [`TransitionModel::distribution`] says, without
    /// building the distribution.
    pub(crate) fn step<R: Rng>(&self, from: usize, rng: &mut R) -> usize {
        let targets = self.graph.targets(from);
        if !targets.is_empty() && rng.random::<f64>() < self.damping {
            targets[rng.random_range(0..targets.len())]
        } else {
            rng.random_range(0..self.graph.page_count())
        }
    }
}

/// Shorthand for [`TransitionModel::distribution`].
pub fn transition_model<P: Page>(
    graph: &LinkGraph<P>,
    page: &P,
    damping: f64,
) -> Result<Distribution<P>> {
    TransitionModel::new(graph, damping)?.distribution(page)
}
