use criterion::*;
use link_rank::{
    page_rank::{iterated, sampled},
    LinkGraph,
};
use rand::{prelude::*, rngs::SmallRng};

criterion_main!(benches);
criterion_group!(benches, rope, random_graph, random_graph_sampled);

fn rope(c: &mut Criterion) {
    let mut group = c.benchmark_group("Rope");
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    group.plot_config(plot_config);
    const SIZES: &[u32] = &[10u32, 20u32, 40u32, 80u32, 160u32];
    for n in SIZES.iter() {
        let g = LinkGraph::new((0..*n).map(|u| {
            let next: Vec<u32> = if u + 1 < *n { vec![u + 1] } else { vec![] };
            (u, next)
        }))
        .unwrap();
        group.bench_with_input(BenchmarkId::new("Iterated", n), n, |b, _| {
            b.iter(|| black_box(iterated::solve(&g, &iterated::Config::default()).unwrap()))
        });
    }
    group.finish();
}

fn random_graph(c: &mut Criterion) {
    const V_SIZE: &[usize] = &[10usize, 20usize, 40usize, 80usize, 160usize];
    const E_POW: &[f64] = &[1.0, 1.25, 1.5];
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    let mut rng = SmallRng::seed_from_u64(3407);
    for e_m in E_POW.iter() {
        let mut group = c.benchmark_group(format!("RandomGraph_{e_m:.2}"));
        group.plot_config(plot_config.clone());
        for v_n in V_SIZE.iter() {
            let e_n = (*v_n as f64).powf(*e_m) as usize;
            let g = gen_random_graph(&mut rng, *v_n, e_n);
            group.bench_with_input(BenchmarkId::new("Iterated", v_n), v_n, |b, _| {
                b.iter(|| black_box(iterated::solve(&g, &iterated::Config::default()).unwrap()))
            });
        }
        group.finish();
    }
}

fn random_graph_sampled(c: &mut Criterion) {
    const V_SIZE: &[usize] = &[10usize, 40usize, 160usize];
    const SAMPLES: &[usize] = &[1_000usize, 10_000usize, 100_000usize];
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    let mut rng = SmallRng::seed_from_u64(3407);
    for v_n in V_SIZE.iter() {
        let mut group = c.benchmark_group(format!("RandomGraphSampled_{v_n}"));
        group.plot_config(plot_config.clone());
        let g = gen_random_graph(&mut rng, *v_n, *v_n * 2);
        for samples in SAMPLES.iter() {
            let cfg = sampled::Config {
                samples: *samples,
                ..sampled::Config::default()
            };
            group.bench_with_input(BenchmarkId::new("Sampled", samples), samples, |b, _| {
                b.iter(|| {
                    let walker = SmallRng::seed_from_u64(42);
                    black_box(sampled::estimate(&g, &cfg, walker).unwrap())
                })
            });
        }
        group.finish();
    }
}

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn gen_random_graph<R>(rng: &mut R, v_n: usize, e_n: usize) -> LinkGraph<usize>
where
    R: SeedableRng + Rng,
{
    let vs: Vec<usize> = (0..v_n).collect();
    let mut links: Vec<(usize, Vec<usize>)> = vs.iter().map(|u| (*u, vec![])).collect();
    for _ in 0..e_n {
        let u = *vs.choose(rng).unwrap();
        let v = *vs.choose(rng).unwrap();
        links[u].1.push(v);
    }
    LinkGraph::from_links_lossy(links).unwrap()
}
