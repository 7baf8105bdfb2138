use tower_building::load_building;
use tower_core::ResidentId;

use crate::{Persona, Resident, ResidentFactory};

fn populated(seed: u64) -> (tower_building::Building, Vec<Resident>) {
    let mut building = load_building();
    let residents = ResidentFactory::new(seed).populate(&mut building);
    (building, residents)
}

mod population {
    use super::*;

    #[test]
    fn one_resident_per_unit() {
        let (building, residents) = populated(42);
        assert_eq!(residents.len(), building.units().len());
        for (i, resident) in residents.iter().enumerate() {
            assert_eq!(resident.id, ResidentId(i as u32));
        }
    }

    #[test]
    fn residents_registered_on_their_units() {
        let (building, residents) = populated(42);
        for resident in &residents {
            let unit = building.unit(resident.home_unit).unwrap();
            assert!(
                unit.residents.contains(&resident.id),
                "{} not registered on unit {}",
                resident.name,
                unit.number
            );
        }
    }

    #[test]
    fn demographics_match_persona() {
        let (_, residents) = populated(7);
        for resident in &residents {
            let (min_age, max_age) = resident.persona.age_range();
            assert!((min_age..=max_age).contains(&resident.age));
            assert!(resident.persona.occupations().contains(&resident.occupation.as_str()));
            assert!((0.45..0.55).contains(&resident.mood));
            assert!(resident.hair_color.starts_with('#'));
        }
    }

    #[test]
    fn same_seed_same_population() {
        let (_, a) = populated(99);
        let (_, b) = populated(99);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.name, y.name);
            assert_eq!(x.persona, y.persona);
            assert_eq!(x.schedule.events().len(), y.schedule.events().len());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let (_, a) = populated(1);
        let (_, b) = populated(2);
        let same = a.iter().zip(&b).filter(|(x, y)| x.name == y.name).count();
        assert!(same < a.len(), "seed had no effect on generation");
    }
}

mod schedules {
    use super::*;

    #[test]
    fn every_schedule_covers_the_day() {
        for seed in [0, 17, 1234] {
            let (_, residents) = populated(seed);
            for resident in &residents {
                resident.schedule.validate_coverage().unwrap_or_else(|err| {
                    panic!("{} ({}): {err}", resident.name, resident.persona)
                });
            }
        }
    }

    #[test]
    fn schedules_start_asleep_at_home_and_fill_the_day() {
        let (building, residents) = populated(42);
        for resident in &residents {
            let events = resident.schedule.events();
            let home = building.home_location(resident.home_unit).unwrap();
            let first = &events[0];
            assert_eq!(first.activity, tower_schedule::Activity::Sleep);
            assert_eq!(first.location, home);
            assert_eq!(events.last().unwrap().end_minute, tower_core::MINUTES_PER_DAY);
        }
    }

    #[test]
    fn amenity_visits_stay_inside_the_building() {
        let (building, residents) = populated(5);
        for resident in &residents {
            for event in resident.schedule.events() {
                if event.activity == tower_schedule::Activity::Amenity {
                    assert!(
                        building.amenity(&event.location.label).is_some(),
                        "unknown amenity {:?}",
                        event.location.label
                    );
                }
            }
        }
    }

    #[test]
    fn all_personas_appear_in_a_full_building() {
        let (_, residents) = populated(42);
        for persona in Persona::ALL {
            assert!(
                residents.iter().any(|r| r.persona == persona),
                "no {persona} generated across {} residents",
                residents.len()
            );
        }
    }
}
