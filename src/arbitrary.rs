use crate::LinkGraph;
use quickcheck::{Arbitrary, Gen};

/// A small random link graph together with a damping factor in `[0, 0.95]`.
#[derive(Debug, Clone)]
pub struct RandomGraph {
    pub graph: LinkGraph<u32>,
    pub damping: f64,
}

impl Arbitrary for RandomGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        const N: u32 = 10;

        let n = u32::arbitrary(g) % N + 1;
        let mut links = vec![];
        for u in 0..n {
            let k = u32::arbitrary(g) % n;
            let mut targets = vec![];
            for _ in 0..k {
                targets.push(u32::arbitrary(g) % n);
            }
            links.push((u, targets));
        }
        let graph = LinkGraph::from_links_lossy(links).unwrap();
        let damping = f64::from(u8::arbitrary(g) % 96) / 100.0;
        Self { graph, damping }
    }
}
