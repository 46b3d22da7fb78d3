use super::RankEstimate;
use crate::{Distribution, LinkGraph, Page, Result};

pub trait PageRank<P: Page> {
    fn calc(&mut self) -> Result<RankEstimate<P>>;
}

pub trait PageRankResult<P: Page> {
    fn page_rank(&self) -> &Distribution<P>;
    fn debug<'a>(&'a self, graph: &'a LinkGraph<P>) -> impl std::fmt::Debug + 'a;
}
