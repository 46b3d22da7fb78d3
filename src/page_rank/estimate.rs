use super::PageRankResult;
use crate::*;

/// How a [`RankEstimate`] was produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Method {
    /// Random-surfer walk of `samples` steps.
    Sampling { samples: usize },
    /// Power iteration that stopped after `iterations` sweeps, the last of
    /// which moved no page by more than `max_delta`.
    Iteration { iterations: usize, max_delta: f64 },
}

#[derive(Debug, Clone)]
pub struct RankEstimate<P: Page> {
    pub page_rank: Distribution<P>,
    pub method: Method,
}

impl<P: Page> RankEstimate<P> {
    /// `ranks[i]` is the rank of the `i`-th page of `graph`.
    pub(crate) fn from_vector(graph: &LinkGraph<P>, ranks: Vec<f64>, method: Method) -> Self {
        debug_assert_eq!(ranks.len(), graph.page_count());
        let page_rank = ranks
            .into_iter()
            .enumerate()
            .map(|(i, r)| (graph.page(i).clone(), r))
            .collect();
        Self { page_rank, method }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn rank(&self, page: &P) -> Option<f64> {
        self.page_rank.get(page).copied()
    }

    pub fn total_mass(&self) -> f64 {
        total_mass(&self.page_rank)
    }

    /// Pages from highest to lowest rank. Equal ranks keep page order.
    pub fn ranked(&self) -> Vec<(&P, f64)> {
        let mut res: Vec<_> = self.page_rank.iter().map(|(p, r)| (p, *r)).collect();
        res.sort_by(|a, b| {
            FullOrdFloat(b.1)
                .cmp(&FullOrdFloat(a.1))
                .then_with(|| a.0.cmp(b.0))
        });
        res
    }
}

impl<P: Page> PageRankResult<P> for RankEstimate<P> {
    fn page_rank(&self) -> &Distribution<P> {
        &self.page_rank
    }

    fn debug<'a>(&'a self, graph: &'a LinkGraph<P>) -> impl std::fmt::Debug + 'a {
        ResultDebug {
            graph,
            result: self,
        }
    }
}

pub struct ResultDebug<'a, P: Page> {
    graph: &'a LinkGraph<P>,
    result: &'a RankEstimate<P>,
}

impl<P: Page> std::fmt::Debug for ResultDebug<'_, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for p in self.graph.pages() {
            let r = self.result.rank(p).unwrap_or(0.0);
            writeln!(f, "{p:?}: {r:.4}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate() -> (LinkGraph<&'static str>, RankEstimate<&'static str>) {
        let g = LinkGraph::new([("a", vec!["b"]), ("b", vec!["c"]), ("c", vec!["a"])]).unwrap();
        let res = RankEstimate::from_vector(&g, vec![0.25, 0.5, 0.25], Method::Sampling { samples: 4 });
        (g, res)
    }

    #[test]
    fn views() {
        let (_, res) = estimate();
        assert_eq!(res.rank(&"b"), Some(0.5));
        assert_eq!(res.rank(&"z"), None);
        assert_eq!(res.total_mass(), 1.0);
        assert_eq!(res.method(), Method::Sampling { samples: 4 });
        assert_eq!(
            res.ranked(),
            vec![(&"b", 0.5), (&"a", 0.25), (&"c", 0.25)]
        );
    }

    #[test]
    fn debug_lists_pages_in_order() {
        let (g, res) = estimate();
        let out = format!("{:?}", res.debug(&g));
        assert_eq!(out, "\"a\": 0.2500\n\"b\": 0.5000\n\"c\": 0.2500\n");
    }
}
