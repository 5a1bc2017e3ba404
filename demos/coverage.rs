//! Reports, for each query window, which stored features it touches and how
//! many positions of the window are covered.
//!
//! Run with `RUST_LOG=debug cargo run --example coverage` to see build logs.

use static_interval_tree::{traverse::Pretty, Interval, IntervalTree};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn covered_positions(hits: &[Interval<u64>]) -> u64 {
    let mut covered = 0;
    let mut reach: Option<u64> = None;
    for hit in hits {
        let start = reach.map_or(hit.start, |r| hit.start.max(r + 1));
        if start <= hit.end {
            covered += hit.end - start + 1;
        }
        reach = Some(reach.map_or(hit.end, |r| r.max(hit.end)));
    }
    covered
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let features = [(0, 0), (3, 40), (10, 14), (20, 35), (29, 98)];
    let tree = IntervalTree::<u64>::from_bounds(features)?;
    print!("{}", Pretty(&tree));

    let mut hits = Vec::new();
    for (start, end) in [(40, 59), (0, 2), (99, 120), (12, 30)] {
        let window = Interval::try_new(start, end)?;
        hits.clear();
        tree.intersect_into(&window, &mut hits);
        hits.sort_unstable();
        let covered = covered_positions(&hits);
        info!(start, end, hits = hits.len(), covered, "queried window");
        println!(
            "[{start}, {end}]: {} hit(s), {covered}/{} positions covered",
            hits.len(),
            end - start + 1
        );
    }
    Ok(())
}
