use static_interval_tree::{Interval, IntervalTree};

trait Point<T> {
    fn new_point(x: T) -> Interval<T>;
}

impl Point<u32> for Interval<u32> {
    fn new_point(x: u32) -> Self {
        Interval::new(x, x)
    }
}

fn main() {
    let tree: IntervalTree<u32> = [Interval::new(3, 7), Interval::new(2, 6), Interval::new_point(5)]
        .into_iter()
        .collect();

    // Closed bounds: a point touching an end still counts.
    assert_eq!(tree.count_overlaps(&Interval::new_point(5)), 3);
    assert_eq!(tree.count_overlaps(&Interval::new_point(7)), 1);
    assert!(!tree.overlaps(&Interval::new_point(8)));
}
