//! Dashboard summary: four concurrently loaded counts.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use campus_api::{AdminApi, ApiError, Transport};

pub const LOAD_FAILED: &str = "Failed to load dashboard summary";
const UNAVAILABLE: &str = "—";

/// One tile's count; `None` when its list failed to load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tile {
    pub label: &'static str,
    pub count: Option<usize>,
}

impl Tile {
    pub fn value(&self) -> String {
        self.count.map_or_else(|| UNAVAILABLE.to_owned(), |n| n.to_string())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub loading: bool,
    pub tiles: Vec<Tile>,
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct DashboardLoad {
    pub staff: Result<usize, ApiError>,
    pub students: Result<usize, ApiError>,
    pub active_clubs: Result<usize, ApiError>,
    pub clusters: Result<usize, ApiError>,
}

impl DashboardState {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn apply_load(&mut self, load: DashboardLoad) {
        let mut failed = false;
        let mut count = |result: Result<usize, ApiError>| match result {
            Ok(n) => Some(n),
            Err(e) => {
                log::debug!("dashboard count failed: {e}");
                failed = true;
                None
            }
        };
        self.tiles = vec![
            Tile { label: "Total Staff", count: count(load.staff) },
            Tile { label: "Total Students", count: count(load.students) },
            Tile { label: "Active Clubs", count: count(load.active_clubs) },
            Tile { label: "Clusters", count: count(load.clusters) },
        ];
        self.loading = false;
        self.error = failed.then(|| LOAD_FAILED.to_owned());
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

pub async fn load<T: Transport>(api: &AdminApi<T>) -> DashboardLoad {
    let (staff, students, clubs, clusters) =
        futures::join!(api.list_staff(), api.list_students(), api.list_clubs(), api.list_clusters());
    DashboardLoad {
        staff: staff.map(|v| v.len()),
        students: students.map(|v| v.len()),
        active_clubs: clubs.map(|v| v.iter().filter(|c| c.is_active).count()),
        clusters: clusters.map(|v| v.len()),
    }
}
