//! Capacity feasibility and assignment completeness.

use crate::instance::Instance;
use crate::tour::Tour;

/// Capacity scan: walks the sequence with a running remaining-capacity
/// counter, resetting to `Q` at every depot separator. Returns `false` the
/// instant any route's demand exceeds capacity.
///
/// The one routine applied to current tours and candidate neighbors alike.
pub fn is_feasible(tour: &Tour, instance: &Instance) -> bool {
    let capacity = i64::from(instance.capacity());
    let mut remaining = capacity;
    for &id in tour.stops() {
        if id == 0 {
            remaining = capacity;
        } else {
            remaining -= i64::from(instance.customer(id).demand);
            if remaining < 0 {
                return false;
            }
        }
    }
    true
}

/// Whether every non-depot customer of the instance appears exactly once.
///
/// Capacity-feasible tours can still be incomplete: first-fit construction
/// may have dropped a customer no route had room for.
pub fn is_complete(tour: &Tour, instance: &Instance) -> bool {
    let mut seen = vec![false; instance.num_locations()];
    let mut assigned = 0usize;
    for &id in tour.stops() {
        if id == 0 {
            continue;
        }
        if id >= seen.len() || seen[id] {
            return false;
        }
        seen[id] = true;
        assigned += 1;
    }
    assigned == instance.num_customers()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Customer;

    /// Depot at the origin plus four customers with demands 3, 4, 3, 6.
    fn instance(vehicles: usize, capacity: u32) -> Instance {
        let coords = [(0.0, 0.0), (0.0, 5.0), (5.0, 0.0), (0.0, -5.0), (-5.0, 0.0)];
        let demands = [0u32, 3, 4, 3, 6];
        let registry = coords
            .iter()
            .zip(demands)
            .enumerate()
            .map(|(id, (&(x, y), demand))| Customer { id, x, y, demand })
            .collect();
        Instance::new("tiny", "", vehicles, capacity, None, registry).unwrap()
    }

    #[test]
    fn test_feasible_within_capacity() {
        let instance = instance(2, 10);
        assert!(is_feasible(&Tour::new(vec![0, 1, 2, 3, 0, 4, 0]), &instance));
    }

    #[test]
    fn test_infeasible_route_over_capacity() {
        let instance = instance(2, 10);
        // first route demands 3 + 4 + 3 + 6 = 16 > 10
        assert!(!is_feasible(
            &Tour::new(vec![0, 1, 2, 3, 4, 0, 0]),
            &instance
        ));
    }

    #[test]
    fn test_separator_resets_capacity() {
        let instance = instance(2, 10);
        // each route alone fits although the total demand 16 exceeds Q
        assert!(is_feasible(&Tour::new(vec![0, 2, 4, 0, 1, 3, 0]), &instance));
    }

    #[test]
    fn test_empty_tour_is_feasible_but_incomplete() {
        let instance = instance(2, 10);
        assert!(is_feasible(&Tour::empty(), &instance));
        assert!(!is_complete(&Tour::empty(), &instance));
    }

    #[test]
    fn test_complete_exactly_once() {
        let instance = instance(2, 10);
        assert!(is_complete(&Tour::new(vec![0, 1, 2, 0, 3, 4, 0]), &instance));
        // customer 4 missing
        assert!(!is_complete(&Tour::new(vec![0, 1, 2, 0, 3, 0]), &instance));
        // customer 1 twice
        assert!(!is_complete(
            &Tour::new(vec![0, 1, 2, 0, 3, 4, 1, 0]),
            &instance
        ));
    }
}
