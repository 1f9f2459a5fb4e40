//! The world map: cities, the roads between them, and who is where.
//!
//! # Storage
//!
//! Cities and aliens live in slot vectors indexed by [`CityId`] /
//! [`AlienId`].  Destroying an entity empties its slot (`None`); slots are
//! never reused.  Iteration is therefore always in creation order, which keeps
//! runs reproducible for a given RNG seed.
//!
//! Each city keeps both directions of every road:
//!
//! ```text
//! A.out_links["north"] = B      ⇔      B.in_links ∋ ("north", A)
//! ```
//!
//! so destroying a city can find and drop every road that touches it without
//! scanning the whole map.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use rustc_hash::FxHashMap;

use inv_core::rng::rotated;
use inv_core::{AlienId, CityId, DEFAULT_CITY_CAPACITY, SimRng};

use crate::{WorldError, WorldResult};

// ── City ──────────────────────────────────────────────────────────────────────

/// A node of the map.
#[derive(Clone, Debug)]
pub struct City {
    pub(crate) name:      String,
    /// Lower-cased direction → destination.
    pub(crate) out_links: BTreeMap<String, CityId>,
    /// `(direction, origin)` for every road that ends here.
    pub(crate) in_links:  BTreeSet<(String, CityId)>,
    pub(crate) occupants: BTreeSet<AlienId>,
}

impl City {
    fn new(name: &str) -> Self {
        Self {
            name:      name.to_owned(),
            out_links: BTreeMap::new(),
            in_links:  BTreeSet::new(),
            occupants: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outbound roads as `(direction, destination)`, ordered by direction.
    pub fn out_links(&self) -> impl Iterator<Item = (&str, CityId)> + '_ {
        self.out_links.iter().map(|(dir, &to)| (dir.as_str(), to))
    }

    /// Inbound roads as `(direction, origin)`.
    pub fn in_links(&self) -> impl Iterator<Item = (&str, CityId)> + '_ {
        self.in_links.iter().map(|(dir, from)| (dir.as_str(), *from))
    }

    /// Destination of the road labelled `direction` (case-insensitive).
    pub fn link(&self, direction: &str) -> Option<CityId> {
        self.out_links.get(&direction.to_lowercase()).copied()
    }

    #[inline]
    pub fn out_degree(&self) -> usize {
        self.out_links.len()
    }

    pub fn occupants(&self) -> impl Iterator<Item = AlienId> + '_ {
        self.occupants.iter().copied()
    }

    #[inline]
    pub fn occupant_count(&self) -> usize {
        self.occupants.len()
    }
}

// ── Alien ─────────────────────────────────────────────────────────────────────

/// A live alien and the city it is in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Alien {
    pub id:   AlienId,
    pub city: CityId,
}

impl Alien {
    pub fn name(&self) -> String {
        self.id.name()
    }
}

// ── Events ────────────────────────────────────────────────────────────────────

/// One successful move returned by [`WorldMap::move_one_alien`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub alien: AlienId,
    pub from:  CityId,
    pub to:    CityId,
}

/// A city destroyed by a fight, and the aliens that died with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Destruction {
    pub city:   CityId,
    pub name:   String,
    pub aliens: Vec<AlienId>,
}

impl Destruction {
    pub fn alien_names(&self) -> Vec<String> {
        self.aliens.iter().map(|a| a.name()).collect()
    }
}

impl fmt::Display for Destruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} has been destroyed by {}!", self.name, self.alien_names().join(" and "))
    }
}

// ── WorldMap ──────────────────────────────────────────────────────────────────

/// Cities, roads, and aliens.
///
/// Build with [`add_link`](Self::add_link) (or the [`loader`](crate::loader)),
/// populate with [`seed_aliens`](Self::seed_aliens), then alternate
/// [`move_one_alien`](Self::move_one_alien) and
/// [`resolve_collisions`](Self::resolve_collisions).
#[derive(Clone, Debug)]
pub struct WorldMap {
    pub(crate) cities:      Vec<Option<City>>,
    pub(crate) by_name:     FxHashMap<String, CityId>,
    pub(crate) aliens:      Vec<Option<Alien>>,
    /// Occupants at which a city is destroyed.
    pub(crate) capacity:    usize,
    pub(crate) live_cities: usize,
    pub(crate) live_aliens: usize,
}

impl WorldMap {
    /// An empty map whose cities are destroyed once `capacity` aliens meet.
    pub fn new(capacity: usize) -> Self {
        Self {
            cities:      Vec::new(),
            by_name:     FxHashMap::default(),
            aliens:      Vec::new(),
            capacity,
            live_cities: 0,
            live_aliens: 0,
        }
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Return the id of city `name`, creating it without roads if absent.
    pub fn add_city(&mut self, name: &str) -> CityId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = CityId(self.cities.len() as u32);
        self.cities.push(Some(City::new(name)));
        self.by_name.insert(name.to_owned(), id);
        self.live_cities += 1;
        id
    }

    /// Add a directed road `from --direction--> to`, creating either city if
    /// needed.
    ///
    /// `direction` is lower-cased.  Reusing a direction on the same origin
    /// replaces the old road.
    pub fn add_link(&mut self, from: &str, direction: &str, to: &str) {
        let from_id = self.add_city(from);
        let to_id   = self.add_city(to);
        let dir     = direction.to_lowercase();

        let replaced = self
            .city_mut(from_id)
            .and_then(|c| c.out_links.insert(dir.clone(), to_id));
        if let Some(old) = replaced {
            if let Some(old_city) = self.city_mut(old) {
                old_city.in_links.remove(&(dir.clone(), from_id));
            }
        }
        if let Some(dest) = self.city_mut(to_id) {
            dest.in_links.insert((dir, from_id));
        }
    }

    /// Place one new alien in `city` by hand.
    ///
    /// Fails if the city is dead or already full.  Like seeding, this may
    /// bring the city to capacity; the fight happens at the next
    /// [`resolve_collisions`](Self::resolve_collisions).
    pub fn spawn_alien(&mut self, city: CityId) -> WorldResult<AlienId> {
        let occupants = self
            .city(city)
            .ok_or(WorldError::UnknownCity(city))?
            .occupant_count();
        if occupants >= self.capacity {
            return Err(WorldError::InsufficientCapacity { requested: 1, available: 0 });
        }
        Ok(self.place_alien(city))
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn num_cities(&self) -> usize {
        self.live_cities
    }

    pub fn num_aliens(&self) -> usize {
        self.live_aliens
    }

    pub fn city(&self, id: CityId) -> Option<&City> {
        self.cities.get(id.index())?.as_ref()
    }

    pub fn city_id(&self, name: &str) -> Option<CityId> {
        self.by_name.get(name).copied()
    }

    pub fn city_by_name(&self, name: &str) -> Option<&City> {
        self.city(self.city_id(name)?)
    }

    /// Live cities in creation order.
    pub fn cities(&self) -> impl Iterator<Item = (CityId, &City)> + '_ {
        self.cities
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.as_ref().map(|c| (CityId(i as u32), c)))
    }

    pub fn alien(&self, id: AlienId) -> Option<&Alien> {
        self.aliens.get(id.index())?.as_ref()
    }

    /// Live aliens in seeding order.
    pub fn aliens(&self) -> impl Iterator<Item = &Alien> + '_ {
        self.aliens.iter().flatten()
    }

    pub fn alien_names(&self) -> Vec<String> {
        self.aliens().map(Alien::name).collect()
    }

    /// Aliens that can still be seeded before every city is full.
    pub fn free_slots(&self) -> usize {
        self.cities()
            .map(|(_, c)| self.capacity.saturating_sub(c.occupant_count()))
            .sum()
    }

    // ── Simulation primitives ─────────────────────────────────────────────

    /// Move one alien along one road into a city that still has room.
    ///
    /// Both choices are random but reproducible: the scan over aliens and the
    /// scan over the chosen alien's roads each start at an offset drawn from
    /// `rng` and wrap around.  Aliens for which `eligible` returns `false` are
    /// skipped.
    ///
    /// Fails with [`WorldError::NoMovePossible`] if no eligible alien has a
    /// road to a city under capacity.
    pub fn move_one_alien<F>(&mut self, rng: &mut SimRng, eligible: F) -> WorldResult<Move>
    where
        F: Fn(AlienId) -> bool,
    {
        let slots = self.aliens.len();
        let start = rng.start_offset(slots);

        for i in rotated(slots, start) {
            let Some(alien) = self.aliens[i] else { continue };
            if !eligible(alien.id) {
                continue;
            }
            if let Some(to) = self.open_destination(alien.city, rng) {
                self.relocate(alien.id, alien.city, to);
                return Ok(Move { alien: alien.id, from: alien.city, to });
            }
        }
        Err(WorldError::NoMovePossible)
    }

    /// Destroy every city holding `capacity` or more aliens.
    ///
    /// Returns one [`Destruction`] per city, in city creation order.
    pub fn resolve_collisions(&mut self) -> Vec<Destruction> {
        let doomed: Vec<CityId> = self
            .cities()
            .filter(|(_, c)| c.occupant_count() >= self.capacity)
            .map(|(id, _)| id)
            .collect();

        doomed
            .into_iter()
            .filter_map(|id| self.destroy_city(id))
            .collect()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    pub(crate) fn city_mut(&mut self, id: CityId) -> Option<&mut City> {
        self.cities.get_mut(id.index())?.as_mut()
    }

    /// A random road out of `from` that ends in a city with room.
    fn open_destination(&self, from: CityId, rng: &mut SimRng) -> Option<CityId> {
        let city  = self.city(from)?;
        let roads = city.out_degree();
        let start = rng.start_offset(roads);

        city.out_links
            .values()
            .copied()
            .cycle()
            .skip(start)
            .take(roads)
            .find(|&to| {
                self.city(to)
                    .is_some_and(|c| c.occupant_count() < self.capacity)
            })
    }

    fn relocate(&mut self, alien: AlienId, from: CityId, to: CityId) {
        if let Some(c) = self.city_mut(from) {
            c.occupants.remove(&alien);
        }
        if let Some(c) = self.city_mut(to) {
            c.occupants.insert(alien);
        }
        if let Some(a) = self.aliens[alien.index()].as_mut() {
            a.city = to;
        }
    }

    pub(crate) fn place_alien(&mut self, city: CityId) -> AlienId {
        let id = AlienId(self.aliens.len() as u32);
        self.aliens.push(Some(Alien { id, city }));
        if let Some(c) = self.city_mut(city) {
            c.occupants.insert(id);
        }
        self.live_aliens += 1;
        id
    }

    /// Remove a city, its occupants, and every road into or out of it.
    fn destroy_city(&mut self, id: CityId) -> Option<Destruction> {
        let city = self.cities.get_mut(id.index())?.take()?;
        self.by_name.remove(&city.name);
        self.live_cities -= 1;

        for &alien in &city.occupants {
            if self.aliens[alien.index()].take().is_some() {
                self.live_aliens -= 1;
            }
        }

        // Roads ending here: drop them from each origin's outbound table.
        for (_, origin) in &city.in_links {
            if let Some(c) = self.city_mut(*origin) {
                c.out_links.retain(|_, to| *to != id);
            }
        }
        // Roads starting here: drop the mirror entry at each destination.
        for dest in city.out_links.values() {
            if let Some(c) = self.city_mut(*dest) {
                c.in_links.retain(|(_, from)| *from != id);
            }
        }

        Some(Destruction {
            city:   id,
            name:   city.name,
            aliens: city.occupants.into_iter().collect(),
        })
    }
}

impl Default for WorldMap {
    fn default() -> Self {
        Self::new(DEFAULT_CITY_CAPACITY)
    }
}
