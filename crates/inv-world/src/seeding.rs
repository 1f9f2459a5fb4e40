//! Initial alien placement.
//!
//! Cities are ranked by how many roads lead out of them; the best-connected
//! city is filled to capacity first, then the next, and so on.  Ties between
//! equally connected cities fall out in heap order.

use inv_core::{AlienId, CityId};
use inv_queue::{Priority, PriorityQueue};

use crate::{WorldError, WorldMap, WorldResult};

/// A city waiting in the seeding queue.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SeedCandidate {
    pub city:       CityId,
    pub out_degree: usize,
}

impl Priority for SeedCandidate {
    fn higher_priority(&self, other: &Self) -> bool {
        self.out_degree > other.out_degree
    }
}

impl WorldMap {
    /// Place `n` new aliens, named sequentially after any already on the map.
    ///
    /// Fails with [`WorldError::InsufficientCapacity`] before placing anyone
    /// if the cities cannot hold `n` more aliens.  Seeding never destroys a
    /// city; call [`resolve_collisions`](Self::resolve_collisions) afterwards
    /// to fight the cities that were filled to capacity.
    pub fn seed_aliens(&mut self, n: usize) -> WorldResult<Vec<AlienId>> {
        let available = self.free_slots();
        if n > available {
            return Err(WorldError::InsufficientCapacity { requested: n, available });
        }

        let mut queue: PriorityQueue<SeedCandidate> = self
            .cities()
            .map(|(city, c)| SeedCandidate { city, out_degree: c.out_degree() })
            .collect();

        let mut seeded = Vec::with_capacity(n);
        while seeded.len() < n {
            let Some(next) = queue.pop() else { break };
            while seeded.len() < n && self.has_room(next.city) {
                seeded.push(self.place_alien(next.city));
            }
        }
        Ok(seeded)
    }

    fn has_room(&self, city: CityId) -> bool {
        self.city(city)
            .is_some_and(|c| c.occupant_count() < self.capacity)
    }
}
