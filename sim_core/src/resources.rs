use rand::rngs::StdRng;
use rand::SeedableRng;

/// Random number generator used for initial ball placement
pub struct SimRng(pub StdRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Seeded when a reproducible run is wanted, from OS entropy otherwise
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self(StdRng::from_entropy()),
        }
    }
}

/// Events that occurred during the last tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub wall_contacts: usize, // Axis corrections applied by the bounce step
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.wall_contacts = 0;
    }
}
