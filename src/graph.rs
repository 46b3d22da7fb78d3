use crate::{Error, Page, Result};
use algograph::graph::{QueryableGraph, VertexId};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// An immutable directed link graph.
///
/// Pages are kept in their `Ord` order and addressed internally by position,
/// so every walk over the graph visits pages in the same order from run to
/// run. Every link target is itself a page and no page links to itself.
#[derive(Debug, Clone)]
pub struct LinkGraph<P> {
    pages: Vec<P>,
    index: HashMap<P, usize, ahash::RandomState>,
    outlinks: Vec<Vec<usize>>,
    dangling: Vec<usize>,
    link_count: usize,
}

impl<P: Page> LinkGraph<P> {
    /// Builds a graph from `(page, outlinks)` pairs, rejecting self-links,
    /// links to pages that are not keys, and empty corpora.
    ///
    /// A page listed more than once gets the union of its outlinks.
    pub fn new<I, L>(links: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, L)>,
        L: IntoIterator<Item = P>,
    {
        let adjacency = collect_adjacency(links);
        for (page, targets) in adjacency.iter() {
            if targets.contains(page) {
                return Err(Error::InvalidGraph(format!("{page:?} links to itself")));
            }
            if let Some(t) = targets.iter().find(|t| !adjacency.contains_key(*t)) {
                return Err(Error::InvalidGraph(format!(
                    "{page:?} links to {t:?}, which is outside the corpus"
                )));
            }
        }
        Self::from_adjacency(adjacency)
    }

    /// Like [`LinkGraph::new`], but silently drops self-links and links
    /// leaving the corpus instead of failing on them.
    pub fn from_links_lossy<I, L>(links: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, L)>,
        L: IntoIterator<Item = P>,
    {
        let mut adjacency = collect_adjacency(links);
        let corpus: BTreeSet<P> = adjacency.keys().cloned().collect();
        for (page, targets) in adjacency.iter_mut() {
            targets.retain(|t| t != page && corpus.contains(t));
        }
        Self::from_adjacency(adjacency)
    }

    fn from_adjacency(adjacency: BTreeMap<P, BTreeSet<P>>) -> Result<Self> {
        if adjacency.is_empty() {
            return Err(Error::InvalidGraph("graph has no pages".to_string()));
        }
        let pages: Vec<P> = adjacency.keys().cloned().collect();
        let index: HashMap<_, _, ahash::RandomState> = pages
            .iter()
            .enumerate()
            .map(|(i, p)| (p.clone(), i))
            .collect();
        let outlinks: Vec<Vec<usize>> = adjacency
            .values()
            .map(|targets| targets.iter().map(|t| index[t]).collect())
            .collect();
        let dangling = outlinks
            .iter()
            .enumerate()
            .filter(|(_, targets)| targets.is_empty())
            .map(|(i, _)| i)
            .collect();
        let link_count = outlinks.iter().map(Vec::len).sum();
        Ok(Self {
            pages,
            index,
            outlinks,
            dangling,
            link_count,
        })
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn link_count(&self) -> usize {
        self.link_count
    }

    /// All pages, in ascending order.
    pub fn pages(&self) -> impl Iterator<Item = &P> + '_ {
        self.pages.iter()
    }

    pub fn contains(&self, page: &P) -> bool {
        self.index.contains_key(page)
    }

    /// Outgoing links of `page`. Yields nothing for a dangling page, and
    /// also for a page outside the graph.
    pub fn outlinks(&self, page: &P) -> impl Iterator<Item = &P> + '_ {
        let targets: &[usize] = match self.index_of(page) {
            Some(i) => self.outlinks[i].as_slice(),
            None => &[],
        };
        targets.iter().map(|&v| &self.pages[v])
    }

    pub fn out_degree(&self, page: &P) -> Option<usize> {
        self.index_of(page).map(|i| self.outlinks[i].len())
    }

    pub fn is_dangling(&self, page: &P) -> bool {
        self.index_of(page)
            .is_some_and(|i| self.outlinks[i].is_empty())
    }

    pub fn dangling_pages(&self) -> impl Iterator<Item = &P> + '_ {
        self.dangling.iter().map(|&i| &self.pages[i])
    }

    pub(crate) fn index_of(&self, page: &P) -> Option<usize> {
        self.index.get(page).copied()
    }

    pub(crate) fn page(&self, i: usize) -> &P {
        &self.pages[i]
    }

    pub(crate) fn targets(&self, i: usize) -> &[usize] {
        &self.outlinks[i]
    }

    pub(crate) fn dangling_indices(&self) -> &[usize] {
        &self.dangling
    }
}

impl LinkGraph<VertexId> {
    /// Converts an `algograph` graph. Undirected edges link both ways and
    /// self-loops are dropped.
    pub fn from_queryable<G: QueryableGraph>(g: &G) -> Result<Self> {
        let links = g.iter_vertices().map(|u| {
            let targets: Vec<VertexId> = g
                .out_edges(&u)
                .map(|e| if e.source == u { e.sink } else { e.source })
                .filter(|v| *v != u)
                .collect();
            (u, targets)
        });
        Self::new(links)
    }
}

fn collect_adjacency<P, I, L>(links: I) -> BTreeMap<P, BTreeSet<P>>
where
    P: Page,
    I: IntoIterator<Item = (P, L)>,
    L: IntoIterator<Item = P>,
{
    let mut adjacency: BTreeMap<P, BTreeSet<P>> = BTreeMap::new();
    for (page, targets) in links {
        adjacency.entry(page).or_default().extend(targets);
    }
    adjacency
}
