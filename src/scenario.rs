use crate::plane::PlaneRequest;
use crate::time::Time;
use serde::Deserialize;
use std::io;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Capacities {
    pub landings: usize,
    pub gates: usize,
    pub takeoffs: usize,
}

pub struct Scenario {
    pub capacities: Capacities,
    pub planes: Vec<PlaneRequest>,
}

impl Scenario {
    pub fn load_from_file(path: &str) -> io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        #[derive(Deserialize)]
        struct RawData {
            capacities: Capacities,
            planes: Vec<PlaneRequest>,
        }
        let raw: RawData = serde_json::from_str(&data)?;

        if let Some(i) = raw.planes.iter().position(|p| {
            p.remaining_fuel < 0
                || p.gate_distance < 0
                || p.service_time < 0
                || p.requested_takeoff_time < Time(0)
                || p.max_complaint_time < 0
        }) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("plane request #{i} has a negative field"),
            ));
        }

        Ok(Scenario {
            capacities: raw.capacities,
            planes: raw.planes,
        })
    }
}
