use crate::plane::PlaneRequest;
use crate::scenario::Capacities;
use crate::time::Time;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tabled::Tabled;

/// One aircraft's computed outcome. The takeoff estimate tracked inside the
/// scheduler never appears here; only the takeoff ledger sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Tabled)]
pub struct Arrangement {
    #[tabled(rename = "landing")]
    pub landing_time: Time,
    #[tabled(rename = "gate departure")]
    pub gate_departure_time: Time,
}

/// Single-pass greedy planner for landing slots, gates and takeoff slots.
/// Holds the ledgers for exactly one batch; build a fresh one per batch.
pub struct Scheduler {
    max_landings: usize,
    max_takeoffs: usize,
    // Min-heaps of previously assigned slot times.
    landing_slots: BinaryHeap<Reverse<Time>>,
    gate_free_times: Vec<Time>,
    takeoff_slots: BinaryHeap<Reverse<Time>>,
}

impl Scheduler {
    pub fn new(capacities: Capacities) -> Scheduler {
        assert!(
            capacities.gates > 0,
            "a scheduler without gates cannot place any plane"
        );
        Scheduler {
            max_landings: capacities.landings,
            max_takeoffs: capacities.takeoffs,
            landing_slots: BinaryHeap::new(),
            gate_free_times: vec![Time(0); capacities.gates],
            takeoff_slots: BinaryHeap::new(),
        }
    }

    pub fn schedule_batch(&mut self, mut planes: Vec<PlaneRequest>) -> Vec<Arrangement> {
        // Lowest fuel first; among equals, the plane farthest from a gate.
        planes.sort_by_key(|p| (p.remaining_fuel, Reverse(p.gate_distance)));

        let mut arrangements = Vec::with_capacity(planes.len());
        for plane in planes {
            let landing_time = Time(0).max(self.allocate_landing());
            self.landing_slots.push(Reverse(landing_time));

            let (gate, gate_departure_time) = self.allocate_gate_and_takeoff(landing_time, &plane);
            arrangements.push(Arrangement {
                landing_time,
                gate_departure_time,
            });
            // The gate stays blocked for one extra service_time beyond the
            // departure.
            self.gate_free_times[gate] = gate_departure_time + plane.service_time;
        }

        self.assert_invariants();
        arrangements
    }

    fn allocate_landing(&mut self) -> Time {
        if self.landing_slots.len() < self.max_landings {
            Time(0)
        } else {
            // Saturated: reuse the earliest outstanding slot, one tick later.
            // An empty ledger (landings == 0) starts the sequence at zero.
            match self.landing_slots.pop() {
                Some(Reverse(earliest)) => earliest + 1,
                None => Time(0),
            }
        }
    }

    fn allocate_gate_and_takeoff(&mut self, landing_time: Time, plane: &PlaneRequest) -> (usize, Time) {
        // Earliest-free gate, lowest index on ties.
        let mut gate = 0;
        for (i, free) in self.gate_free_times.iter().enumerate().skip(1) {
            if *free < self.gate_free_times[gate] {
                gate = i;
            }
        }
        let gate_free = self.gate_free_times[gate];

        let mut takeoff = plane.requested_takeoff_time;
        let gap = gate_free - landing_time;
        if gap < plane.max_complaint_time {
            takeoff = takeoff + (plane.max_complaint_time - gap);
        }

        let gate_departure = gate_free.max(landing_time) + plane.service_time;
        takeoff = takeoff.max(gate_departure);

        if self.takeoff_slots.len() >= self.max_takeoffs {
            if let Some(Reverse(freed)) = self.takeoff_slots.pop() {
                takeoff = takeoff.max(freed + 1);
            }
        }
        self.takeoff_slots.push(Reverse(takeoff));

        (gate, gate_departure)
    }

    fn assert_invariants(&self) {
        debug_assert!(
            self.landing_slots.len() <= self.max_landings.max(1),
            "Landing ledger exceeded its capacity bound"
        );
        debug_assert!(
            self.takeoff_slots.len() <= self.max_takeoffs.max(1),
            "Takeoff ledger exceeded its capacity bound"
        );
        debug_assert!(
            self.landing_slots.iter().all(|Reverse(t)| *t >= Time(0)),
            "Negative landing time recorded"
        );
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_plane() -> impl Strategy<Value = PlaneRequest> {
        (0..200i64, 0..200i64, 0..100i64, 0..300i64, 0..100i64).prop_map(
            |(fuel, dist, service, takeoff, complaint)| PlaneRequest {
                remaining_fuel: fuel,
                gate_distance: dist,
                service_time: service,
                requested_takeoff_time: Time(takeoff),
                max_complaint_time: complaint,
            },
        )
    }

    fn arb_capacities() -> impl Strategy<Value = Capacities> {
        (1..6usize, 1..4usize, 1..6usize).prop_map(|(landings, gates, takeoffs)| Capacities {
            landings,
            gates,
            takeoffs,
        })
    }

    proptest! {
        #[test]
        fn test_landing_time_invariants(
            capacities in arb_capacities(),
            planes in prop::collection::vec(arb_plane(), 1..40)
        ) {
            let mut scheduler = Scheduler::new(capacities);
            let arrangements = scheduler.schedule_batch(planes.clone());

            prop_assert_eq!(planes.len(), arrangements.len());

            for pair in arrangements.windows(2) {
                prop_assert!(
                    pair[0].landing_time <= pair[1].landing_time,
                    "Landing times regressed: {} then {}",
                    pair[0].landing_time, pair[1].landing_time
                );
            }
            for (i, a) in arrangements.iter().enumerate() {
                prop_assert!(a.landing_time >= Time(0));
                if i < capacities.landings {
                    prop_assert_eq!(Time(0), a.landing_time);
                }
            }
        }

        #[test]
        fn test_batch_is_deterministic(
            capacities in arb_capacities(),
            planes in prop::collection::vec(arb_plane(), 1..40)
        ) {
            let first = Scheduler::new(capacities).schedule_batch(planes.clone());
            let second = Scheduler::new(capacities).schedule_batch(planes);
            prop_assert_eq!(first, second);
        }
    }
}
