//! Seeded population generation: one resident per unit, with a persona-shaped
//! daily schedule.

use tower_building::{Amenity, Building, Location};
use tower_core::{MINUTES_PER_DAY, ResidentId, SimRng, UnitId};
use tower_schedule::{Activity, DaySchedule, ScheduleEvent};

use crate::names::{FIRST_NAMES, LAST_NAMES};
use crate::{Persona, Resident};

/// Builds residents and their schedules from a single seeded RNG.
pub struct ResidentFactory {
    rng: SimRng,
}

impl ResidentFactory {
    pub fn new(seed: u64) -> Self {
        ResidentFactory { rng: SimRng::new(seed) }
    }

    /// Fill every unit in `building` with one resident.
    ///
    /// Returned residents carry sequential ids matching their position in
    /// the vector; each is also registered on its home unit.
    pub fn populate(&mut self, building: &mut Building) -> Vec<Resident> {
        let unit_ids: Vec<UnitId> = building.units().iter().map(|u| u.id).collect();
        let mut residents = Vec::with_capacity(unit_ids.len());
        for unit_id in unit_ids {
            let id = ResidentId(residents.len() as u32);
            let persona = *self
                .rng
                .choose(&Persona::ALL)
                .unwrap_or(&Persona::UrbanProfessional);
            let resident = self.create_resident(id, unit_id, persona, building);
            building.add_resident(unit_id, id);
            residents.push(resident);
        }
        residents
    }

    fn create_resident(
        &mut self,
        id: ResidentId,
        unit_id: UnitId,
        persona: Persona,
        building: &Building,
    ) -> Resident {
        let first = self.rng.choose(FIRST_NAMES).copied().unwrap_or("Alex");
        let last = self.rng.choose(LAST_NAMES).copied().unwrap_or("Doe");
        let (min_age, max_age) = persona.age_range();
        let occupation = self
            .rng
            .choose(persona.occupations())
            .copied()
            .unwrap_or("Resident");
        let palette = persona.palette();
        let hair = self.rng.choose(palette.hair).copied().unwrap_or("#ffffff");
        let outfit = self.rng.choose(palette.outfit).copied().unwrap_or("#94a3b8");
        let accent = self.rng.choose(palette.accent).copied().unwrap_or("#22d3ee");

        let home = match building.unit(unit_id) {
            Some(unit) => unit.location(),
            // Unreachable for ids taken from the arena; keep a sane fallback.
            None => Location::outside("Street", 0.15),
        };
        let schedule = self.build_schedule(persona, building, &home);

        Resident {
            id,
            name: format!("{first} {last}"),
            age: self.rng.gen_range(min_age..=max_age),
            occupation: occupation.to_string(),
            persona,
            home_unit: unit_id,
            schedule,
            mood: self.rng.gen_range(0.45..0.55),
            hair_color: hair.to_string(),
            outfit_color: outfit.to_string(),
            accent_color: accent.to_string(),
        }
    }

    // ── Schedule builders ─────────────────────────────────────────────────

    fn build_schedule(&mut self, persona: Persona, building: &Building, home: &Location) -> DaySchedule {
        match persona {
            Persona::UrbanProfessional => self.urban_professional(building, home),
            Persona::RemoteWorker => self.remote_worker(building, home),
            Persona::FamilyParent => self.family_parent(building, home),
            Persona::GradStudent => self.grad_student(building, home),
            Persona::FitnessEnthusiast => self.fitness_enthusiast(building, home),
        }
    }

    fn urban_professional(&mut self, building: &Building, home: &Location) -> DaySchedule {
        let mut day = DayPlanner::new();
        let wake = self.rng.gen_range(6 * 60 + 15..=7 * 60 + 15);
        day.until(wake, Activity::Sleep, home.clone(), "Sleep");
        day.lasting(self.rng.gen_range(25..=45), Activity::AtHome, home.clone(), "Morning routine");
        day.lasting(
            self.rng.gen_range(30..=45),
            Activity::Commute,
            outside("Commute to office"),
            "Commute",
        );
        day.lasting(
            self.rng.gen_range(3 * 60 + 30..=4 * 60),
            Activity::Work,
            work_location(),
            "Office work",
        );
        day.lasting(60, Activity::Eat, outside("Lunch near office"), "Lunch");
        day.lasting(
            self.rng.gen_range(3 * 60 + 15..=4 * 60 + 15),
            Activity::Work,
            work_location(),
            "Afternoon work",
        );
        day.lasting(
            self.rng.gen_range(30..=50),
            Activity::Commute,
            outside("Commute home"),
            "Commute home",
        );
        if self.rng.gen_bool(0.65)
            && let Some(amenity) = self.choose_amenity(building, &["fitness", "pool"])
        {
            let label = format!("Visit {}", amenity.name);
            day.lasting(self.rng.gen_range(45..=75), Activity::Amenity, amenity.location(), label);
        }
        day.lasting(60, Activity::Eat, home.clone(), "Dinner");
        day.lasting(self.rng.gen_range(90..=150), Activity::Leisure, home.clone(), "Evening leisure");
        if self.rng.gen_bool(0.35)
            && let Some(amenity) = self.choose_amenity(building, &["lounge", "workspace"])
        {
            let label = format!("Hang out at {}", amenity.name);
            day.lasting(self.rng.gen_range(60..=90), Activity::Amenity, amenity.location(), label);
        }
        let lights_out = (day.cursor() + 30).max(23 * 60 + self.rng.gen_range(0..=45));
        day.until(lights_out, Activity::AtHome, home.clone(), "Wind down");
        day.finish(home)
    }

    fn remote_worker(&mut self, building: &Building, home: &Location) -> DaySchedule {
        let mut day = DayPlanner::new();
        let cowork = self.choose_amenity(building, &["workspace"]);
        let wake = self.rng.gen_range(7 * 60..=8 * 60 + 30);
        day.until(wake, Activity::Sleep, home.clone(), "Sleep");
        day.lasting(self.rng.gen_range(45..=70), Activity::AtHome, home.clone(), "Breakfast & prep");
        let desk = cowork.as_ref().map_or_else(|| home.clone(), Amenity::location);
        day.lasting(self.rng.gen_range(4 * 60..=5 * 60), Activity::Work, desk, "Coworking");
        day.lasting(60, Activity::Eat, outside("Lunch walk"), "Grab lunch");
        day.lasting(self.rng.gen_range(2 * 60..=3 * 60), Activity::Work, home.clone(), "Remote work");
        day.lasting(self.rng.gen_range(45..=75), Activity::Leisure, home.clone(), "Streaming break");
        if self.rng.gen_bool(0.5)
            && let Some(amenity) = self.choose_amenity(building, &["fitness", "pool"])
        {
            let label = format!("Workout at {}", amenity.name);
            day.lasting(self.rng.gen_range(45..=60), Activity::Amenity, amenity.location(), label);
        }
        day.lasting(60, Activity::Eat, home.clone(), "Dinner");
        day.lasting(self.rng.gen_range(90..=150), Activity::Leisure, home.clone(), "Gaming / calls");
        day.finish(home)
    }

    fn family_parent(&mut self, building: &Building, home: &Location) -> DaySchedule {
        let mut day = DayPlanner::new();
        let wake = self.rng.gen_range(5 * 60 + 30..=6 * 60 + 30);
        day.until(wake, Activity::Sleep, home.clone(), "Sleep");
        day.lasting(
            self.rng.gen_range(90..=110),
            Activity::AtHome,
            home.clone(),
            "Breakfast & prep kids",
        );
        day.lasting(45, Activity::Errand, outside("School drop-off"), "School run");
        day.lasting(
            self.rng.gen_range(2 * 60..=3 * 60),
            Activity::Work,
            home.clone(),
            "Remote work / chores",
        );
        day.lasting(60, Activity::Eat, home.clone(), "Lunch");
        day.lasting(self.rng.gen_range(90..=150), Activity::Errand, outside("Errands"), "Errands");
        day.lasting(45, Activity::Errand, outside("School pickup"), "Pickup");
        let play_spot = self
            .choose_amenity(building, &["family", "lounge"])
            .map_or_else(|| home.clone(), |a| a.location());
        day.lasting(self.rng.gen_range(90..=120), Activity::Leisure, play_spot, "Playtime");
        day.lasting(90, Activity::Eat, home.clone(), "Dinner");
        day.lasting(60, Activity::AtHome, home.clone(), "Family time");
        day.finish(home)
    }

    fn grad_student(&mut self, building: &Building, home: &Location) -> DaySchedule {
        let mut day = DayPlanner::new();
        let sleep_in = self.rng.gen_range(7 * 60 + 30..=8 * 60 + 45);
        day.until(sleep_in, Activity::Sleep, home.clone(), "Sleep");
        day.lasting(self.rng.gen_range(45..=70), Activity::AtHome, home.clone(), "Prep & breakfast");
        day.lasting(
            self.rng.gen_range(3 * 60..=4 * 60),
            Activity::Work,
            outside("University"),
            "Classes",
        );
        day.lasting(60, Activity::Eat, outside("Campus lunch"), "Lunch");
        let study_spot = building
            .amenity("Coworking Lounge")
            .map_or_else(|| home.clone(), Amenity::location);
        day.lasting(self.rng.gen_range(2 * 60..=3 * 60), Activity::Work, study_spot, "Study");
        if self.rng.gen_bool(0.5)
            && let Some(amenity) = self.choose_amenity(building, &["fitness", "sports"])
        {
            let label = format!("Workout at {}", amenity.name);
            day.lasting(self.rng.gen_range(60..=80), Activity::Amenity, amenity.location(), label);
        }
        day.lasting(self.rng.gen_range(90..=180), Activity::Leisure, outside("Hangout"), "Social");
        day.finish(home)
    }

    fn fitness_enthusiast(&mut self, building: &Building, home: &Location) -> DaySchedule {
        let mut day = DayPlanner::new();
        let gym = self
            .choose_amenity(building, &["fitness"])
            .map_or_else(|| home.clone(), |a| a.location());
        let pool = self
            .choose_amenity(building, &["pool"])
            .map_or_else(|| home.clone(), |a| a.location());
        let wake = self.rng.gen_range(5 * 60..=6 * 60);
        day.until(wake, Activity::Sleep, home.clone(), "Sleep");
        day.lasting(self.rng.gen_range(75..=90), Activity::Amenity, gym.clone(), "Morning workout");
        day.lasting(45, Activity::Amenity, pool, "Pool recovery");
        day.lasting(45, Activity::Eat, home.clone(), "Breakfast");
        day.lasting(self.rng.gen_range(8 * 60..=9 * 60), Activity::Work, work_location(), "Work");
        day.lasting(40, Activity::Commute, outside("Commute"), "Commute");
        day.lasting(self.rng.gen_range(45..=60), Activity::Amenity, gym, "Evening training");
        day.lasting(75, Activity::Eat, home.clone(), "Dinner");
        day.lasting(90, Activity::Leisure, home.clone(), "Recovery");
        day.finish(home)
    }

    // ── Location helpers ──────────────────────────────────────────────────

    /// A random amenity from any of `categories`; `None` when the building
    /// has none (the builder falls back to staying home).
    fn choose_amenity(&mut self, building: &Building, categories: &[&str]) -> Option<Amenity> {
        let mut choices: Vec<&Amenity> = Vec::new();
        for category in categories {
            choices.extend(building.amenities_in_category(category));
        }
        self.rng.choose(&choices).map(|a| (*a).clone())
    }
}

/// Work happens outside the building, abstracted as the downtown core.
fn work_location() -> Location {
    Location::outside("Office Tower", 0.1)
}

fn outside(label: &str) -> Location {
    Location::outside(label, 0.15)
}

// ── DayPlanner ───────────────────────────────────────────────────────────────

/// Append-only builder for a gap-free day.
///
/// Events are laid down back-to-back from a running cursor; ends are
/// clamped to the day boundary and empty intervals are dropped, so any
/// sequence of pushes yields a schedule that passes coverage validation
/// once [`finish`][Self::finish] pads the tail with sleep.
struct DayPlanner {
    events: Vec<ScheduleEvent>,
    cursor: u32,
}

impl DayPlanner {
    fn new() -> Self {
        DayPlanner { events: Vec::new(), cursor: 0 }
    }

    fn cursor(&self) -> u32 {
        self.cursor
    }

    /// Push an event running from the cursor to `end` (clamped to 1440).
    fn until(&mut self, end: u32, activity: Activity, location: Location, label: impl Into<String>) {
        let end = end.min(MINUTES_PER_DAY);
        if end > self.cursor {
            self.events
                .push(ScheduleEvent::new(self.cursor, end, activity, location, label));
            self.cursor = end;
        }
    }

    /// Push an event of `duration` minutes starting at the cursor.
    fn lasting(
        &mut self,
        duration: u32,
        activity: Activity,
        location: Location,
        label: impl Into<String>,
    ) {
        self.until(self.cursor + duration, activity, location, label);
    }

    /// Pad the remainder of the day with sleep at home and normalize.
    fn finish(mut self, home: &Location) -> DaySchedule {
        if self.cursor < MINUTES_PER_DAY {
            self.until(MINUTES_PER_DAY, Activity::Sleep, home.clone(), "Sleep");
        }
        DaySchedule::new(self.events)
    }
}
