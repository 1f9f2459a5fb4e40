//! Unit tests for inv-world.
//!
//! All tests build small hand-written maps; none depend on a particular
//! random selection beyond "same seed, same result".

#[cfg(test)]
mod helpers {
    use crate::WorldMap;

    /// Check every structural invariant of the map.
    pub fn assert_consistent(world: &WorldMap) {
        for (id, city) in world.cities() {
            for (dir, to) in city.out_links() {
                let dest = world
                    .city(to)
                    .unwrap_or_else(|| panic!("{} has a road {dir} to a dead city", city.name()));
                assert!(
                    dest.in_links().any(|(d, from)| d == dir && from == id),
                    "{} -> {} ({dir}) has no mirror in-link",
                    city.name(),
                    dest.name(),
                );
            }
            for (dir, from) in city.in_links() {
                let origin = world
                    .city(from)
                    .unwrap_or_else(|| panic!("{} has an in-link from a dead city", city.name()));
                assert_eq!(origin.link(dir), Some(id), "stale in-link on {}", city.name());
            }
            for alien in city.occupants() {
                assert_eq!(world.alien(alien).map(|a| a.city), Some(id));
            }
            assert!(city.occupant_count() <= world.capacity());
        }
        for alien in world.aliens() {
            let city = world.city(alien.city).expect("alien in a dead city");
            assert!(city.occupants().any(|a| a == alien.id));
        }
        assert_eq!(world.cities().count(), world.num_cities());
        assert_eq!(world.aliens().count(), world.num_aliens());
    }

    /// `A north=B`, `B south=A`.
    pub fn pair() -> WorldMap {
        let mut w = WorldMap::default();
        w.add_link("A", "north", "B");
        w.add_link("B", "south", "A");
        w
    }

    /// Hub with roads to four spokes and back again.
    pub fn star() -> WorldMap {
        let mut w = WorldMap::default();
        for (dir, back, spoke) in [
            ("north", "south", "N"),
            ("south", "north", "S"),
            ("east",  "west",  "E"),
            ("west",  "east",  "W"),
        ] {
            w.add_link("Hub", dir, spoke);
            w.add_link(spoke, back, "Hub");
        }
        w
    }

    /// Directed ring `C0 -> C1 -> … -> C(n-1) -> C0`.
    pub fn ring(n: usize) -> WorldMap {
        let mut w = WorldMap::default();
        for i in 0..n {
            w.add_link(&format!("C{i}"), "east", &format!("C{}", (i + 1) % n));
        }
        w
    }
}

// ── Graph construction ────────────────────────────────────────────────────────

#[cfg(test)]
mod links {
    use super::helpers::{assert_consistent, pair};
    use crate::WorldMap;

    #[test]
    fn add_link_creates_both_endpoints() {
        let mut w = WorldMap::default();
        w.add_link("Foo", "north", "Bar");
        assert_eq!(w.num_cities(), 2);
        let foo = w.city_by_name("Foo").unwrap();
        let bar = w.city_by_name("Bar").unwrap();
        assert_eq!(foo.out_degree(), 1);
        assert_eq!(foo.in_links().count(), 0);
        assert_eq!(bar.out_degree(), 0);
        assert_eq!(bar.in_links().count(), 1);
        assert_eq!(foo.link("north"), w.city_id("Bar"));
        assert_consistent(&w);
    }

    #[test]
    fn directions_are_case_insensitive() {
        let mut w = WorldMap::default();
        w.add_link("Foo", "NoRtH", "Bar");
        let foo = w.city_by_name("Foo").unwrap();
        assert_eq!(foo.out_links().next().map(|(d, _)| d), Some("north"));
        assert_eq!(foo.link("NORTH"), w.city_id("Bar"));
    }

    #[test]
    fn reused_direction_replaces_road() {
        let mut w = WorldMap::default();
        w.add_link("Foo", "north", "Bar");
        w.add_link("Foo", "North", "Baz");
        let foo = w.city_by_name("Foo").unwrap();
        assert_eq!(foo.out_degree(), 1);
        assert_eq!(foo.link("north"), w.city_id("Baz"));
        assert_eq!(w.city_by_name("Bar").unwrap().in_links().count(), 0);
        assert_consistent(&w);
    }

    #[test]
    fn same_label_from_two_origins_is_kept_twice() {
        let mut w = WorldMap::default();
        w.add_link("A", "north", "C");
        w.add_link("B", "north", "C");
        assert_eq!(w.city_by_name("C").unwrap().in_links().count(), 2);
        assert_consistent(&w);
    }

    #[test]
    fn add_city_is_idempotent() {
        let mut w = pair();
        let a = w.city_id("A").unwrap();
        assert_eq!(w.add_city("A"), a);
        assert_eq!(w.num_cities(), 2);
        let lone = w.add_city("Lone");
        assert_eq!(w.num_cities(), 3);
        assert_eq!(w.city(lone).unwrap().out_degree(), 0);
    }
}

// ── Seeding ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod seeding {
    use super::helpers::{assert_consistent, pair, star};
    use crate::{WorldError, WorldMap};

    #[test]
    fn pair_seeding_respects_capacity() {
        let mut w = pair();
        let seeded = w.seed_aliens(2).unwrap();
        assert_eq!(seeded.len(), 2);
        assert_eq!(w.num_aliens(), 2);
        // Seeding alone never destroys anything.
        assert_eq!(w.num_cities(), 2);
        assert_consistent(&w);
    }

    #[test]
    fn aliens_named_sequentially() {
        let mut w = star();
        w.seed_aliens(3).unwrap();
        assert_eq!(w.alien_names(), vec!["alien1", "alien2", "alien3"]);
        w.seed_aliens(1).unwrap();
        assert_eq!(w.alien_names().last().map(String::as_str), Some("alien4"));
    }

    #[test]
    fn best_connected_city_fills_first() {
        let mut w = star();
        w.seed_aliens(2).unwrap();
        let hub = w.city_by_name("Hub").unwrap();
        assert_eq!(hub.occupant_count(), 2, "hub has 4 roads out, spokes have 1");
    }

    #[test]
    fn overflow_spills_to_next_city() {
        let mut w = star();
        w.seed_aliens(5).unwrap();
        assert_eq!(w.city_by_name("Hub").unwrap().occupant_count(), 2);
        let on_spokes: usize = ["N", "S", "E", "W"]
            .iter()
            .map(|n| w.city_by_name(n).unwrap().occupant_count())
            .sum();
        assert_eq!(on_spokes, 3);
        assert_consistent(&w);
    }

    #[test]
    fn too_many_aliens_is_rejected_up_front() {
        let mut w = pair();
        let err = w.seed_aliens(5).unwrap_err();
        assert!(matches!(
            err,
            WorldError::InsufficientCapacity { requested: 5, available: 4 }
        ));
        assert_eq!(w.num_aliens(), 0);
    }

    #[test]
    fn spawn_places_by_hand() {
        let mut w = star();
        let n = w.city_id("N").unwrap();
        let first = w.spawn_alien(n).unwrap();
        w.spawn_alien(n).unwrap();
        assert_eq!(w.alien(first).map(|a| a.city), Some(n));
        assert!(matches!(
            w.spawn_alien(n),
            Err(WorldError::InsufficientCapacity { requested: 1, available: 0 })
        ));
        w.resolve_collisions();
        assert!(matches!(w.spawn_alien(n), Err(WorldError::UnknownCity(id)) if id == n));
    }

    #[test]
    fn empty_map_has_no_room() {
        let mut w = WorldMap::default();
        assert!(w.seed_aliens(0).unwrap().is_empty());
        assert!(w.seed_aliens(1).is_err());
    }
}

// ── Collisions & destruction ──────────────────────────────────────────────────

#[cfg(test)]
mod collisions {
    use super::helpers::{assert_consistent, star};
    use crate::WorldMap;

    #[test]
    fn lone_city_with_two_aliens_is_destroyed() {
        let mut w = WorldMap::default();
        w.add_city("A");
        w.seed_aliens(2).unwrap();
        let events = w.resolve_collisions();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "A");
        assert_eq!(events[0].alien_names(), vec!["alien1", "alien2"]);
        assert_eq!(events[0].to_string(), "A has been destroyed by alien1 and alien2!");
        assert_eq!(w.num_cities(), 0);
        assert_eq!(w.num_aliens(), 0);
        assert_consistent(&w);
    }

    #[test]
    fn single_occupant_survives() {
        let mut w = star();
        let n = w.city_id("N").unwrap();
        w.place_alien(n);
        assert!(w.resolve_collisions().is_empty());
        assert_eq!(w.num_cities(), 5);
        assert_eq!(w.num_aliens(), 1);
    }

    #[test]
    fn destroying_hub_cuts_every_road() {
        let mut w = star();
        let hub = w.city_id("Hub").unwrap();
        w.place_alien(hub);
        w.place_alien(hub);
        let spoke = w.city_id("E").unwrap();
        let survivor = w.place_alien(spoke);

        let events = w.resolve_collisions();
        assert_eq!(events.len(), 1);
        assert_eq!(w.num_cities(), 4);
        assert_eq!(w.num_aliens(), 1);
        assert!(w.alien(survivor).is_some());
        for (_, city) in w.cities() {
            assert_eq!(city.out_degree(), 0, "{} still has a road", city.name());
            assert_eq!(city.in_links().count(), 0, "{} still has an in-link", city.name());
        }
        assert!(w.city_id("Hub").is_none());
        assert_consistent(&w);
    }

    #[test]
    fn shared_label_roads_are_all_removed() {
        let mut w = WorldMap::default();
        w.add_link("A", "north", "C");
        w.add_link("B", "north", "C");
        w.add_link("A", "south", "C");
        let c = w.city_id("C").unwrap();
        w.place_alien(c);
        w.place_alien(c);
        w.resolve_collisions();
        assert_eq!(w.city_by_name("A").unwrap().out_degree(), 0);
        assert_eq!(w.city_by_name("B").unwrap().out_degree(), 0);
        assert_consistent(&w);
    }

    #[test]
    fn several_cities_fall_in_one_pass() {
        let mut w = star();
        for name in ["N", "S", "Hub"] {
            let id = w.city_id(name).unwrap();
            w.place_alien(id);
            w.place_alien(id);
        }
        let before = w.num_aliens();
        let events = w.resolve_collisions();
        let killed: usize = events.iter().map(|e| e.aliens.len()).sum();
        assert_eq!(events.len(), 3);
        assert_eq!(w.num_aliens(), before - killed);
        assert_eq!(w.num_cities(), 2);
        assert_consistent(&w);
    }

    #[test]
    fn self_loop_city_is_removed_cleanly() {
        let mut w = WorldMap::default();
        w.add_link("Loop", "north", "Loop");
        w.add_link("Loop", "south", "Other");
        let id = w.city_id("Loop").unwrap();
        w.place_alien(id);
        w.place_alien(id);
        w.resolve_collisions();
        assert_eq!(w.num_cities(), 1);
        assert_eq!(w.city_by_name("Other").unwrap().in_links().count(), 0);
        assert_consistent(&w);
    }
}

// ── Moves ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod moves {
    use inv_core::SimRng;

    use super::helpers::{assert_consistent, pair, ring};
    use crate::{WorldError, WorldMap};

    #[test]
    fn no_aliens_means_no_move() {
        let mut w = pair();
        let err = w.move_one_alien(&mut SimRng::new(1), |_| true).unwrap_err();
        assert!(matches!(err, WorldError::NoMovePossible));
    }

    #[test]
    fn city_without_roads_traps_alien() {
        let mut w = WorldMap::default();
        w.add_city("Island");
        w.seed_aliens(1).unwrap();
        assert!(w.move_one_alien(&mut SimRng::new(1), |_| true).is_err());
    }

    #[test]
    fn full_neighbour_blocks_move() {
        let mut w = WorldMap::default();
        w.add_link("A", "north", "B");
        w.seed_aliens(4).unwrap();
        assert_eq!(w.city_by_name("A").unwrap().occupant_count(), 2);
        assert_eq!(w.city_by_name("B").unwrap().occupant_count(), 2);
        assert!(w.move_one_alien(&mut SimRng::new(1), |_| true).is_err());
    }

    #[test]
    fn move_follows_a_road() {
        let mut w = pair();
        let alien = w.seed_aliens(1).unwrap()[0];
        let start = w.alien(alien).unwrap().city;

        let mv = w.move_one_alien(&mut SimRng::new(9), |_| true).unwrap();
        assert_eq!(mv.alien, alien);
        assert_eq!(mv.from, start);
        assert_ne!(mv.to, start);
        assert_eq!(w.alien(alien).unwrap().city, mv.to);
        assert_eq!(w.city(start).unwrap().occupant_count(), 0);
        assert_eq!(w.city(mv.to).unwrap().occupant_count(), 1);
        assert_consistent(&w);
    }

    #[test]
    fn ineligible_aliens_stay_put() {
        let mut w = pair();
        w.seed_aliens(1).unwrap();
        assert!(w.move_one_alien(&mut SimRng::new(1), |_| false).is_err());
    }

    #[test]
    fn eligibility_picks_the_mover() {
        let mut w = ring(6);
        let aliens = w.seed_aliens(3).unwrap();
        let chosen = aliens[1];
        let mut rng = SimRng::new(5);
        for _ in 0..10 {
            let mv = w.move_one_alien(&mut rng, |a| a == chosen).unwrap();
            assert_eq!(mv.alien, chosen);
            w.resolve_collisions();
            if w.alien(chosen).is_none() {
                break;
            }
        }
    }

    #[test]
    fn same_seed_same_moves() {
        let run = |seed: u64| {
            let mut w = ring(8);
            w.seed_aliens(3).unwrap();
            let mut rng = SimRng::new(seed);
            let mut log = Vec::new();
            for _ in 0..40 {
                match w.move_one_alien(&mut rng, |_| true) {
                    Ok(mv) => log.push(mv),
                    Err(_) => break,
                }
                w.resolve_collisions();
                assert_consistent(&w);
            }
            log
        };
        assert_eq!(run(11), run(11));
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use crate::{load_map, load_map_reader, WorldError};

    use super::helpers::assert_consistent;

    #[test]
    fn two_line_map() {
        let w = load_map_reader(Cursor::new("Foo north=Bar\nBar south=Foo\n"), 2).unwrap();
        assert_eq!(w.num_cities(), 2);
        let foo = w.city_id("Foo").unwrap();
        let bar = w.city_id("Bar").unwrap();
        for (me, other) in [(foo, bar), (bar, foo)] {
            let city = w.city(me).unwrap();
            assert_eq!(city.out_degree(), 1);
            assert_eq!(city.in_links().count(), 1);
            assert_eq!(city.out_links().next().map(|(_, to)| to), Some(other));
            assert_eq!(city.in_links().next().map(|(_, from)| from), Some(other));
        }
        assert_consistent(&w);
    }

    #[test]
    fn many_roads_per_line() {
        let w = load_map_reader(
            Cursor::new("Foo north=Bar west=Baz South=Qu-ux\nBar south=Foo west=Bee\n"),
            2,
        )
        .unwrap();
        assert_eq!(w.num_cities(), 5);
        assert_eq!(w.city_by_name("Foo").unwrap().out_degree(), 3);
        assert_eq!(w.city_by_name("Foo").unwrap().link("south"), w.city_id("Qu-ux"));
        assert_consistent(&w);
    }

    #[test]
    fn lone_city_is_kept() {
        let w = load_map_reader(Cursor::new("Island\n"), 2).unwrap();
        assert_eq!(w.num_cities(), 1);
        assert_eq!(w.city_by_name("Island").unwrap().out_degree(), 0);
    }

    #[test]
    fn missing_equals_is_malformed() {
        let err = load_map_reader(Cursor::new("Foo north=Bar\nBar north-Baz\n"), 2).unwrap_err();
        match err {
            WorldError::MalformedInput { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("north-Baz"), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_road_tokens_are_malformed() {
        for bad in ["Foo north=", "Foo =Bar", "Foo a=b=c", "Foo ="] {
            let result = load_map_reader(Cursor::new(bad), 2);
            assert!(
                matches!(result, Err(WorldError::MalformedInput { line: 1, .. })),
                "{bad:?} should be rejected",
            );
        }
    }

    #[test]
    fn blank_line_is_malformed() {
        let result = load_map_reader(Cursor::new("Foo north=Bar\n   \nBar south=Foo\n"), 2);
        assert!(matches!(result, Err(WorldError::MalformedInput { line: 2, .. })));
    }

    #[test]
    fn empty_input_gives_empty_map() {
        let w = load_map_reader(Cursor::new(""), 2).unwrap();
        assert_eq!(w.num_cities(), 0);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        writeln!(file, "Foo north=Bar").unwrap();
        writeln!(file, "Bar south=Foo").unwrap();
        file.flush().unwrap();

        let w = load_map(file.path(), 3).unwrap();
        assert_eq!(w.num_cities(), 2);
        assert_eq!(w.capacity(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let result = load_map(&dir.path().join("nope.txt"), 2);
        assert!(matches!(result, Err(WorldError::Io(_))));
    }
}
