//! The simulation proper: construction-time validation and the tick loop.

use std::collections::BTreeMap;

use tower_building::{Building, Location, LocationType};
use tower_core::{Tick, WallClock, minutes_to_clock};
use tower_elevator::{ElevatorSystem, StepOutcome};
use tower_population::Resident;
use tower_schedule::Activity;
use tracing::warn;

use crate::error::{SimError, SimResult};
use crate::events::EventLog;
use crate::runtime::{ResidentRuntime, ResidentStatus};
use crate::snapshot::{
    ElevatorSnapshot, FloorOutline, ResidentSnapshot, StateSnapshot, build_outline, round2, round3,
    sunlight_at,
};

/// Fixed x of the elevator shaft on every floor.
pub const ELEVATOR_X: f64 = 0.5;
/// Where residents stand while waiting for the car.
pub const ELEVATOR_WAIT_X: f64 = 0.45;
/// Horizontal distance covered per tick while walking.
pub const WALK_SPEED: f64 = 0.18;
/// Maximum x distance that still counts as "at" a destination.
const ARRIVAL_TOLERANCE: f64 = 0.05;

/// Start time and tick granularity for a run.
#[derive(Copy, Clone, Debug)]
pub struct SimConfig {
    pub start: WallClock,
    /// Simulated minutes advanced per [`Simulation::step`].
    pub tick_minutes: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig { start: WallClock::default(), tick_minutes: 1 }
    }
}

/// The whole simulated building for one run.
///
/// Owns everything: the static [`Building`], the residents, their runtime
/// records (parallel to the resident list, indexed by `ResidentId`), the
/// elevator, and the event feed.  Construction validates; [`step`]
/// [Self::step] thereafter never fails.
#[derive(Debug)]
pub struct Simulation {
    building: Building,
    residents: Vec<Resident>,
    runtime: Vec<ResidentRuntime>,
    elevator: ElevatorSystem,
    events: EventLog,
    clock: WallClock,
    minute_of_day: u32,
    tick_minutes: u32,
    tick: Tick,
    outline: Vec<FloorOutline>,
}

impl Simulation {
    /// Build a simulation starting at the default clock, one minute per tick.
    pub fn new(building: Building, residents: Vec<Resident>) -> SimResult<Self> {
        Self::with_config(building, residents, SimConfig::default())
    }

    /// Build a simulation, validating every resident against the building:
    /// home units must exist, schedules must cover the full day, and every
    /// scheduled floor must be one the building (and so the elevator) has.
    pub fn with_config(
        building: Building,
        residents: Vec<Resident>,
        config: SimConfig,
    ) -> SimResult<Self> {
        let clock = config.start;
        let minute = clock.minute_of_day();
        let mut runtime = Vec::with_capacity(residents.len());

        for (i, resident) in residents.iter().enumerate() {
            if resident.id.index() != i {
                return Err(SimError::MisnumberedResident { expected: i, found: resident.id });
            }
            let home = building.home_location(resident.home_unit).ok_or_else(|| {
                SimError::HomeUnitNotInBuilding {
                    resident: resident.id,
                    name: resident.name.clone(),
                }
            })?;
            resident.schedule.validate_coverage().map_err(|source| {
                SimError::InvalidSchedule {
                    resident: resident.id,
                    name: resident.name.clone(),
                    source,
                }
            })?;
            for event in resident.schedule.events() {
                if let Some(floor) = event.location.floor
                    && !building.has_floor(floor)
                {
                    return Err(SimError::UnknownDestinationFloor {
                        resident: resident.id,
                        name: resident.name.clone(),
                        floor,
                    });
                }
            }

            let index = resident.schedule.event_index_at(minute, 0);
            let (activity, label) = resident
                .schedule
                .events()
                .get(index)
                .map(|e| (e.activity, e.label.clone()))
                .unwrap_or((Activity::AtHome, "Idle".to_string()));
            let mut record = ResidentRuntime::at_rest(&home, index, activity);
            record.pending_event_label = Some(label);
            runtime.push(record);
        }

        let elevator = ElevatorSystem::new(0, building.max_floor());
        let outline = build_outline(&building);
        Ok(Simulation {
            building,
            residents,
            runtime,
            elevator,
            events: EventLog::new(),
            clock,
            minute_of_day: minute,
            tick_minutes: config.tick_minutes,
            tick: Tick::ZERO,
            outline,
        })
    }

    // ── Observers ─────────────────────────────────────────────────────────

    pub fn building(&self) -> &Building {
        &self.building
    }

    pub fn residents(&self) -> &[Resident] {
        &self.residents
    }

    pub fn runtimes(&self) -> &[ResidentRuntime] {
        &self.runtime
    }

    pub fn elevator(&self) -> &ElevatorSystem {
        &self.elevator
    }

    pub fn clock(&self) -> WallClock {
        self.clock
    }

    pub fn minute_of_day(&self) -> u32 {
        self.minute_of_day
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance the whole simulation one tick.
    ///
    /// Order within a tick is fixed: clock, then every resident's schedule
    /// reaction (which may file elevator requests), then one elevator step,
    /// then its boarding/disembarking side effects, then per-resident
    /// movement, mood, and arrival detection.
    pub fn step(&mut self) {
        self.clock.advance_minutes(self.tick_minutes);
        self.minute_of_day = self.clock.minute_of_day();
        self.tick = self.tick + 1;

        for i in 0..self.residents.len() {
            self.advance_resident(i);
        }

        let outcome = self.elevator.step();
        self.apply_elevator_outcome(&outcome);

        for i in 0..self.residents.len() {
            self.settle_resident(i, &outcome);
        }
    }

    /// Run [`step`][Self::step] `count` times.
    pub fn run_ticks(&mut self, count: u32) {
        for _ in 0..count {
            self.step();
        }
    }

    // ── Snapshot ──────────────────────────────────────────────────────────

    /// Aggregate the current state into an owned, serializable snapshot.
    ///
    /// Read-only: calling this any number of times between steps yields
    /// identical values and perturbs nothing.
    pub fn state_snapshot(&self) -> StateSnapshot {
        let mut activity_breakdown: BTreeMap<&'static str, usize> = BTreeMap::new();
        let mut amenity_load: BTreeMap<String, usize> = BTreeMap::new();
        let mut resident_states = Vec::with_capacity(self.residents.len());

        for (resident, record) in self.residents.iter().zip(&self.runtime) {
            let activity = if record.status == ResidentStatus::InEvent {
                resident
                    .schedule
                    .events()
                    .get(record.event_index)
                    .map_or(Activity::AtHome, |e| e.activity)
            } else {
                Activity::Commute
            };
            *activity_breakdown.entry(activity.as_str()).or_default() += 1;
            if record.location_kind == LocationType::Amenity
                && record.status == ResidentStatus::InEvent
            {
                *amenity_load.entry(record.location_label.clone()).or_default() += 1;
            }
            resident_states.push(ResidentSnapshot {
                resident_id: resident.id,
                name: resident.name.clone(),
                persona: resident.persona,
                activity,
                location: record.location_label.clone(),
                location_type: record.location_kind,
                floor: record.floor,
                floor_label: self.building.floor_label(record.floor),
                mood: round2(resident.mood),
                x: round3(record.x),
                target_x: round3(record.target_x),
                status: record.status,
                vertical_position: round3(record.vertical_position),
                hair_color: resident.hair_color.clone(),
                outfit_color: resident.outfit_color.clone(),
                accent_color: resident.accent_color.clone(),
            });
        }

        StateSnapshot {
            timestamp: self.clock.iso8601(),
            minute_of_day: self.minute_of_day,
            clock: minutes_to_clock(self.minute_of_day),
            activity_breakdown,
            amenity_load,
            residents: resident_states,
            events: self.events.to_vec(),
            tick: self.tick.0,
            sunlight: sunlight_at(self.minute_of_day),
            elevator: ElevatorSnapshot {
                position: round3(self.elevator.position()),
                floor: self.elevator.current_floor(),
                doors_open: self.elevator.doors_open(),
                passengers: self.elevator.passenger_count(),
                waiting: self.elevator.waiting_counts(),
            },
            building: self.outline.clone(),
        }
    }

    // ── Per-resident phases ───────────────────────────────────────────────

    /// React to the schedule: detect event changes and steer toward the
    /// current event's location.
    fn advance_resident(&mut self, i: usize) {
        let minute = self.minute_of_day;
        let destination = {
            let Simulation { residents, runtime, events, clock, .. } = &mut *self;
            let resident = &residents[i];
            let record = &mut runtime[i];

            let index = resident.schedule.event_index_at(minute, record.event_index);
            let Some(event) = resident.schedule.events().get(index) else {
                return;
            };
            if index != record.event_index {
                record.pending_event_label = Some(event.label.clone());
                record.pending_activity = event.activity;
                record.event_index = index;
                record.destination = Some(event.location.clone());
                // Already there: settle in place without a walk phase.
                if record.status == ResidentStatus::InEvent
                    && reached_destination(record, &event.location)
                {
                    record.location_label = event.location.label.clone();
                    record.location_kind = event.location.kind;
                    record.target_x = event.location.x.unwrap_or(record.x);
                    record.x = record.target_x;
                    events.record(
                        *clock,
                        &resident.name,
                        event.label.clone(),
                        event.location.label.clone(),
                    );
                }
            }
            event.location.clone()
        };
        self.update_resident_target(i, &destination);
    }

    /// Steer a resident toward `destination`: keep them in place if they are
    /// there, pin them to the car if riding, queue an elevator trip for a
    /// different floor, or walk them across the current one.
    fn update_resident_target(&mut self, i: usize, destination: &Location) {
        let Simulation { residents, runtime, elevator, events, clock, tick, building, .. } =
            &mut *self;
        let resident = &residents[i];
        let record = &mut runtime[i];

        if record.status == ResidentStatus::InEvent && reached_destination(record, destination) {
            record.destination = Some(destination.clone());
            record.target_x = destination.x.unwrap_or(record.x);
            record.x = record.target_x;
            return;
        }

        record.destination = Some(destination.clone());
        if record.status == ResidentStatus::InElevator {
            record.target_x = ELEVATOR_X;
            record.x = ELEVATOR_X;
            return;
        }

        let dest_floor = destination.floor.unwrap_or(record.floor);
        if dest_floor != record.floor {
            if record.elevator_request.is_none() {
                match elevator.request(resident.id, record.floor, dest_floor, *tick) {
                    Ok(request) => {
                        record.set_status(ResidentStatus::WaitingElevator);
                        record.location_label = "Elevator Lobby".to_string();
                        record.location_kind = LocationType::Service;
                        record.target_x = ELEVATOR_WAIT_X;
                        record.elevator_request = Some(request);
                        record.travel_destination_floor = Some(dest_floor);
                        let label = building.floor_label(dest_floor);
                        events.record(
                            *clock,
                            &resident.name,
                            format!("Waiting for elevator to {label}"),
                            "Elevator Lobby",
                        );
                    }
                    // Unreachable for schedules that passed construction-time
                    // validation; leave the resident in place.
                    Err(err) => {
                        warn!(resident = %resident.id, %err, "elevator refused request");
                    }
                }
            }
        } else {
            if record.status != ResidentStatus::InEvent {
                record.set_status(ResidentStatus::Walking);
            }
            record.location_label = "Corridor".to_string();
            record.location_kind = LocationType::Service;
            record.target_x = destination.x.unwrap_or(record.target_x);
            record.travel_destination_floor = None;
            // A rerouted resident withdraws any queued trip so the car does
            // not board them against the new plan.
            if record.elevator_request.take().is_some() {
                elevator.cancel(resident.id);
            }
        }
    }

    /// Apply one elevator step's boarding and disembarking to the runtimes.
    fn apply_elevator_outcome(&mut self, outcome: &StepOutcome) {
        if outcome.boarded.is_empty() && outcome.disembarked.is_empty() {
            return;
        }
        let Simulation { residents, runtime, events, clock, building, .. } = &mut *self;

        for resident_id in &outcome.boarded {
            let Some(record) = runtime.get_mut(resident_id.index()) else { continue };
            let resident = &residents[resident_id.index()];
            record.set_status(ResidentStatus::InElevator);
            record.location_label = "Elevator".to_string();
            record.location_kind = LocationType::Service;
            record.vertical_position = outcome.position;
            record.floor = outcome.floor;
            record.x = ELEVATOR_X;
            record.target_x = ELEVATOR_X;
            record.elevator_request = None;
            if record.pending_event_label.is_some() {
                let floor = record.travel_destination_floor.unwrap_or(record.floor);
                let label = building.floor_label(floor);
                events.record(
                    *clock,
                    &resident.name,
                    format!("Boarded elevator to {label}"),
                    "Elevator",
                );
            }
        }

        for (resident_id, floor) in &outcome.disembarked {
            let Some(record) = runtime.get_mut(resident_id.index()) else { continue };
            let resident = &residents[resident_id.index()];
            record.set_status(ResidentStatus::Walking);
            record.location_label = "Elevator Lobby".to_string();
            record.location_kind = LocationType::Service;
            record.floor = *floor;
            record.vertical_position = *floor as f64;
            record.x = ELEVATOR_WAIT_X;
            record.target_x = record
                .destination
                .as_ref()
                .and_then(|d| d.x)
                .unwrap_or(record.x);
            record.elevator_request = None;
            record.travel_destination_floor = None;
            let label = building.floor_label(*floor);
            events.record(
                *clock,
                &resident.name,
                format!("Arrived on floor {label}"),
                "Elevator Lobby",
            );
        }
    }

    /// Movement interpolation, mood, and walking-arrival detection.
    fn settle_resident(&mut self, i: usize, outcome: &StepOutcome) {
        let Simulation { residents, runtime, events, clock, .. } = &mut *self;
        let resident = &mut residents[i];
        let record = &mut runtime[i];
        record.ticks_in_status += 1;

        match record.status {
            ResidentStatus::InElevator => {
                record.vertical_position = outcome.position;
                record.floor = outcome.floor;
                record.x = ELEVATOR_X;
            }
            ResidentStatus::WaitingElevator | ResidentStatus::Walking => {
                record.x = approach(record.x, record.target_x);
            }
            ResidentStatus::InEvent => {
                if let Some(destination) = &record.destination
                    && let Some(x) = destination.x
                {
                    record.x = x;
                    record.target_x = x;
                }
            }
        }

        let activity = if record.status == ResidentStatus::InEvent {
            record.pending_activity
        } else {
            Activity::Commute
        };
        adjust_mood(resident, activity);

        if record.status == ResidentStatus::Walking
            && let Some(destination) = record.destination.clone()
            && reached_destination(record, &destination)
        {
            record.status = ResidentStatus::InEvent;
            record.location_label = destination.label.clone();
            record.location_kind = destination.kind;
            record.floor = destination.floor.unwrap_or(record.floor);
            record.vertical_position = record.floor as f64;
            record.x = destination.x.unwrap_or(record.x);
            record.target_x = record.x;
            if let Some(label) = record.pending_event_label.take() {
                events.record(*clock, &resident.name, label, destination.label.clone());
            }
        }

        if record.status == ResidentStatus::WaitingElevator {
            record.x = approach(record.x, ELEVATOR_WAIT_X);
            record.target_x = ELEVATOR_WAIT_X;
        }
    }
}

// ── Free helpers ─────────────────────────────────────────────────────────────

/// One walking step from `current` toward `target`, snapping inside one
/// step's reach.  Rounded to 3 decimals so positions stay snapshot-stable.
fn approach(current: f64, target: f64) -> f64 {
    if (current - target).abs() <= WALK_SPEED {
        return target;
    }
    let step = if target > current { WALK_SPEED } else { -WALK_SPEED };
    round3(current + step)
}

/// On the right floor and within tolerance of the target x (when the
/// location pins one).
fn reached_destination(record: &ResidentRuntime, location: &Location) -> bool {
    let target_floor = location.floor.unwrap_or(record.floor);
    if record.floor != target_floor {
        return false;
    }
    if let Some(x) = location.x
        && (record.x - x).abs() > ARRIVAL_TOLERANCE
    {
        return false;
    }
    true
}

/// Per-tick mood nudge, clamped to `[0, 1]`.  Amenity time is the biggest
/// lift; commuting wears the hardest.
fn adjust_mood(resident: &mut Resident, activity: Activity) {
    let delta = match activity {
        Activity::Amenity => 0.01,
        Activity::Leisure => 0.004,
        Activity::Sleep => 0.002,
        Activity::Work => -0.0015,
        Activity::Commute => -0.003,
        _ => 0.0,
    };
    resident.mood = (resident.mood + delta).clamp(0.0, 1.0);
}
