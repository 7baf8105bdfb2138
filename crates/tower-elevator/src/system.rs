//! The elevator car: request queues, target selection, and motion.

use std::collections::{BTreeMap, VecDeque};

use rustc_hash::FxHashMap;
use tower_core::{ResidentId, Tick};
use tracing::trace;

use crate::{ElevatorError, ElevatorPassenger, ElevatorRequest, ElevatorResult, StepOutcome};

pub const DEFAULT_CAPACITY: usize = 10;
pub const DEFAULT_SPEED_PER_TICK: f64 = 0.5;

/// Discrete car state.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ElevatorState {
    Idle,
    Moving,
    DoorOpen,
}

/// Single-car, capacity-limited transport between floors.
///
/// Position is continuous (`f64` floors) so riders animate smoothly; it
/// advances by at most `speed` per tick and snaps to the integer target on
/// arrival.  Waiting queues live in a `BTreeMap` keyed by origin floor, so
/// candidate iteration is ordered and dispatch is fully deterministic.
#[derive(Debug)]
pub struct ElevatorSystem {
    min_floor: i32,
    max_floor: i32,
    capacity: usize,
    speed: f64,
    position: f64,
    state: ElevatorState,
    target_floor: Option<i32>,
    waiting: BTreeMap<i32, VecDeque<ElevatorRequest>>,
    pending: FxHashMap<ResidentId, ElevatorRequest>,
    passengers: Vec<ElevatorPassenger>,
    direction: i8,
    door_timer: u8,
}

impl ElevatorSystem {
    /// A car parked at `min_floor` with default capacity and speed.
    pub fn new(min_floor: i32, max_floor: i32) -> Self {
        Self::with_limits(min_floor, max_floor, DEFAULT_CAPACITY, DEFAULT_SPEED_PER_TICK)
    }

    pub fn with_limits(min_floor: i32, max_floor: i32, capacity: usize, speed_per_tick: f64) -> Self {
        debug_assert!(min_floor <= max_floor);
        debug_assert!(speed_per_tick > 0.0);
        ElevatorSystem {
            min_floor,
            max_floor,
            capacity,
            speed: speed_per_tick,
            position: min_floor as f64,
            state: ElevatorState::Idle,
            target_floor: None,
            waiting: BTreeMap::new(),
            pending: FxHashMap::default(),
            passengers: Vec::new(),
            direction: 0,
            door_timer: 0,
        }
    }

    // ── Observers ─────────────────────────────────────────────────────────

    pub fn position(&self) -> f64 {
        self.position
    }

    /// Nearest integer floor to the continuous position.
    pub fn current_floor(&self) -> i32 {
        self.position.round() as i32
    }

    pub fn state(&self) -> ElevatorState {
        self.state
    }

    pub fn doors_open(&self) -> bool {
        self.state == ElevatorState::DoorOpen
    }

    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn speed_per_tick(&self) -> f64 {
        self.speed
    }

    /// `true` if `resident` has a queued, not-yet-boarded request.
    pub fn is_pending(&self, resident: ResidentId) -> bool {
        self.pending.contains_key(&resident)
    }

    /// Queue length per floor, non-empty floors only.
    pub fn waiting_counts(&self) -> BTreeMap<i32, usize> {
        self.waiting
            .iter()
            .filter(|(_, queue)| !queue.is_empty())
            .map(|(floor, queue)| (*floor, queue.len()))
            .collect()
    }

    // ── Requests ──────────────────────────────────────────────────────────

    /// Queue a trip intent for `resident` from `origin` to `destination`.
    ///
    /// Idempotent per resident: a resident with a request already pending
    /// gets the existing request back, and a resident already riding gets
    /// an equivalent stand-in without a new queue entry.  Floors outside
    /// the served range are rejected.
    pub fn request(
        &mut self,
        resident: ResidentId,
        origin: i32,
        destination: i32,
        tick: Tick,
    ) -> ElevatorResult<ElevatorRequest> {
        self.check_floor(origin)?;
        self.check_floor(destination)?;

        if let Some(existing) = self.pending.get(&resident) {
            return Ok(existing.clone());
        }
        if self.passengers.iter().any(|p| p.resident == resident) {
            return Ok(ElevatorRequest::new(resident, origin, destination, tick));
        }

        let request = ElevatorRequest::new(resident, origin, destination, tick);
        self.waiting.entry(origin).or_default().push_back(request.clone());
        self.pending.insert(resident, request.clone());
        trace!(%resident, origin, destination, "elevator request queued");

        // An empty car may retarget toward a nearer pickup, so same-tick
        // requests are serviced nearest-first regardless of issue order.
        // A loaded car never abandons its drop-off.
        if self.passengers.is_empty() && self.state != ElevatorState::DoorOpen {
            self.choose_next_target();
        }
        Ok(request)
    }

    /// Withdraw a pending request (the resident no longer needs the car).
    ///
    /// No-op for unknown residents and for riders already on board.
    pub fn cancel(&mut self, resident: ResidentId) {
        let Some(request) = self.pending.remove(&resident) else {
            return;
        };
        if let Some(queue) = self.waiting.get_mut(&request.origin) {
            queue.retain(|r| r.resident != resident);
            if queue.is_empty() {
                self.waiting.remove(&request.origin);
            }
        }
        // The withdrawn request may have been the current target.
        if self.passengers.is_empty() && self.state == ElevatorState::Moving {
            self.choose_next_target();
        }
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance the car by one tick.
    pub fn step(&mut self) -> StepOutcome {
        let current_floor = self.current_floor();

        match self.state {
            ElevatorState::DoorOpen => {
                if self.door_timer > 0 {
                    self.door_timer -= 1;
                }
                if self.door_timer == 0 {
                    self.state = ElevatorState::Idle;
                    self.choose_next_target();
                }
                return self.outcome(Vec::new(), Vec::new(), true);
            }
            ElevatorState::Idle => {
                if self.has_service_here(current_floor) {
                    let (boarded, disembarked) = self.arrive(current_floor);
                    return self.outcome(boarded, disembarked, true);
                }
                if !self.choose_next_target() {
                    return self.outcome(Vec::new(), Vec::new(), false);
                }
                // A target at the current floor keeps the car idle; service
                // happens on the next tick's instantaneous-arrival path.
            }
            ElevatorState::Moving => {}
        }

        if self.state == ElevatorState::Moving
            && let Some(target) = self.target_floor
        {
            let target_pos = target as f64;
            let step = if target_pos > self.position { self.speed } else { -self.speed };
            let next = self.position + step;
            let arrived =
                (step > 0.0 && next >= target_pos) || (step < 0.0 && next <= target_pos);
            if arrived {
                // Snap exactly onto the floor; arrival processing runs in
                // the same tick.
                self.position = target_pos;
                let floor = self.current_floor();
                let (boarded, disembarked) = self.arrive(floor);
                return self.outcome(boarded, disembarked, true);
            }
            self.position = next.clamp(self.min_floor as f64, self.max_floor as f64);
        }

        self.outcome(Vec::new(), Vec::new(), false)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn check_floor(&self, floor: i32) -> ElevatorResult<()> {
        if floor < self.min_floor || floor > self.max_floor {
            return Err(ElevatorError::FloorOutOfRange {
                floor,
                min: self.min_floor,
                max: self.max_floor,
            });
        }
        Ok(())
    }

    fn outcome(
        &self,
        boarded: Vec<ResidentId>,
        disembarked: Vec<(ResidentId, i32)>,
        doors_open: bool,
    ) -> StepOutcome {
        StepOutcome {
            boarded,
            disembarked,
            position: self.position,
            doors_open,
            floor: self.current_floor(),
        }
    }

    /// Nearest candidate floor by absolute distance from the continuous
    /// position; equidistant floors resolve to the lower number.
    fn nearest(&self, candidates: impl Iterator<Item = i32>) -> Option<i32> {
        candidates.min_by(|a, b| {
            let da = (*a as f64 - self.position).abs();
            let db = (*b as f64 - self.position).abs();
            da.total_cmp(&db).then(a.cmp(b))
        })
    }

    /// Pick the next target floor.  Returns `false` when there is nothing
    /// to do (car goes idle).
    fn choose_next_target(&mut self) -> bool {
        let current_floor = self.current_floor();

        // Drop-offs always beat pickups.
        if !self.passengers.is_empty() {
            let nearest = self.nearest(self.passengers.iter().map(|p| p.destination));
            self.target_floor = nearest;
            let Some(target) = nearest else { return true };
            if target == current_floor {
                return true;
            }
            self.state = ElevatorState::Moving;
            self.direction = if target as f64 > self.position { 1 } else { -1 };
            trace!(target, "elevator heading to drop-off");
            return true;
        }

        let nearest = self.nearest(
            self.waiting
                .iter()
                .filter(|(_, queue)| !queue.is_empty())
                .map(|(floor, _)| *floor),
        );
        let Some(target) = nearest else {
            self.target_floor = None;
            self.state = ElevatorState::Idle;
            self.direction = 0;
            return false;
        };
        self.target_floor = Some(target);
        if target == current_floor {
            return true;
        }
        self.state = ElevatorState::Moving;
        self.direction = if target as f64 > self.position { 1 } else { -1 };
        trace!(target, "elevator heading to pickup");
        true
    }

    /// `true` if anyone wants on or off at `floor`.
    fn has_service_here(&self, floor: i32) -> bool {
        if self.passengers.iter().any(|p| p.destination == floor) {
            return true;
        }
        self.waiting.get(&floor).is_some_and(|queue| !queue.is_empty())
    }

    /// Arrival processing: everyone bound for `floor` steps off, then the
    /// floor's queue boards FIFO up to remaining capacity.  Unboarded
    /// requesters stay queued for the next visit.
    fn arrive(&mut self, floor: i32) -> (Vec<ResidentId>, Vec<(ResidentId, i32)>) {
        let mut boarded = Vec::new();
        let mut disembarked = Vec::new();

        self.passengers.retain(|passenger| {
            if passenger.destination == floor {
                disembarked.push((passenger.resident, floor));
                false
            } else {
                true
            }
        });

        if let Some(queue) = self.waiting.get_mut(&floor) {
            while self.passengers.len() < self.capacity {
                let Some(request) = queue.pop_front() else { break };
                boarded.push(request.resident);
                self.passengers.push(ElevatorPassenger {
                    resident: request.resident,
                    destination: request.destination,
                });
                self.pending.remove(&request.resident);
            }
            if queue.is_empty() {
                self.waiting.remove(&floor);
            }
        }

        self.state = ElevatorState::DoorOpen;
        self.door_timer = 1;
        self.direction = 0;
        self.target_floor = None;
        trace!(floor, on = boarded.len(), off = disembarked.len(), "elevator doors open");
        (boarded, disembarked)
    }
}
