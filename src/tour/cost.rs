//! Tour cost evaluation.

use crate::instance::Instance;
use crate::tour::Tour;

/// Total Euclidean length of the tour, summed over adjacent id pairs.
///
/// The sequence is an open path: it already begins and ends at the depot,
/// so no closing edge is added. Pure and side-effect free; this sits on the
/// annealing inner loop.
pub fn cost(tour: &Tour, instance: &Instance) -> f64 {
    tour.stops()
        .windows(2)
        .map(|edge| instance.distance(edge[0], edge[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Customer;

    fn instance() -> Instance {
        let registry = vec![
            Customer { id: 0, x: 0.0, y: 0.0, demand: 0 },
            Customer { id: 1, x: 0.0, y: 5.0, demand: 3 },
            Customer { id: 2, x: 3.0, y: 9.0, demand: 4 },
        ];
        Instance::new("tiny", "", 1, 10, None, registry).unwrap()
    }

    #[test]
    fn test_cost_sums_edges() {
        let instance = instance();
        // 0→1 = 5, 1→2 = 5, 2→0 = sqrt(90)
        let tour = Tour::new(vec![0, 1, 2, 0]);
        let expected = 5.0 + 5.0 + 90.0_f64.sqrt();
        assert!((cost(&tour, &instance) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_cost_of_trivial_tours_is_zero() {
        let instance = instance();
        assert_eq!(cost(&Tour::empty(), &instance), 0.0);
        assert_eq!(cost(&Tour::new(vec![0]), &instance), 0.0);
    }

    #[test]
    fn test_cost_is_deterministic() {
        let instance = instance();
        let tour = Tour::new(vec![0, 2, 1, 0]);
        assert_eq!(cost(&tour, &instance), cost(&tour, &instance));
    }
}
