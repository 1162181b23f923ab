//! Customer registry and instance metadata.

/// A single location with a delivery demand.
///
/// Id 0 is the depot; ids `1..n` are customers. Coordinates are planar,
/// distances Euclidean.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Customer {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub demand: u32,
}

/// An immutable CVRP instance: registry of locations plus fleet metadata.
///
/// The registry is a `Vec` indexed by id (ids are contiguous from 0), so
/// lookups on the evaluation hot path are plain slice indexing.
#[derive(Debug, Clone)]
pub struct Instance {
    name: String,
    comment: String,
    vehicles: usize,
    capacity: u32,
    best_known: Option<f64>,
    registry: Vec<Customer>,
}

impl Instance {
    /// Builds an instance, checking the registry contract: at least the
    /// depot plus one customer, ids contiguous from 0, and a positive
    /// fleet size and capacity.
    pub fn new(
        name: impl Into<String>,
        comment: impl Into<String>,
        vehicles: usize,
        capacity: u32,
        best_known: Option<f64>,
        registry: Vec<Customer>,
    ) -> Result<Self, String> {
        if registry.len() < 2 {
            return Err("registry must contain the depot and at least one customer".into());
        }
        if let Some((pos, c)) = registry.iter().enumerate().find(|(i, c)| c.id != *i) {
            return Err(format!(
                "registry ids must be contiguous from 0, found id {} at position {}",
                c.id, pos
            ));
        }
        if vehicles == 0 {
            return Err("vehicle count must be at least 1".into());
        }
        if capacity == 0 {
            return Err("vehicle capacity must be positive".into());
        }
        Ok(Self {
            name: name.into(),
            comment: comment.into(),
            vehicles,
            capacity,
            best_known,
            registry,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Fleet size K: the number of routes in every tour.
    pub fn vehicles(&self) -> usize {
        self.vehicles
    }

    /// Vehicle capacity Q, shared by all routes.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Best known cost for this instance, if the file carried one.
    pub fn best_known(&self) -> Option<f64> {
        self.best_known
    }

    pub fn depot(&self) -> &Customer {
        &self.registry[0]
    }

    /// Looks up any location (depot included) by id.
    ///
    /// # Panics
    /// Panics if `id` is not in the registry.
    pub fn customer(&self, id: usize) -> &Customer {
        &self.registry[id]
    }

    /// Number of non-depot customers.
    pub fn num_customers(&self) -> usize {
        self.registry.len() - 1
    }

    /// Total registry size including the depot.
    pub fn num_locations(&self) -> usize {
        self.registry.len()
    }

    /// Ids of all non-depot customers, in id order.
    pub fn customer_ids(&self) -> impl Iterator<Item = usize> + '_ {
        1..self.registry.len()
    }

    /// Euclidean distance between two registered locations.
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        let p = &self.registry[a];
        let q = &self.registry[b];
        (q.x - p.x).hypot(q.y - p.y)
    }
}
