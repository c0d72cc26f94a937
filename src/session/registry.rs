//! In-memory machine registry

use crate::domain::{BoundingBox, Machine, Point};

use super::state::ViewState;

/// Extra logical units around a box that still count as a hit
pub const HIT_PADDING: f32 = 5.0;

/// Ordered list of machines; later entries draw on top
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Registry {
    machines: Vec<Machine>,
}

impl Registry {
    pub fn new(machines: Vec<Machine>) -> Self {
        Self { machines }
    }

    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    pub fn len(&self) -> usize {
        self.machines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Machine> {
        self.machines.iter().find(|m| m.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Overwrite a machine's bounding box, returning false for unknown ids
    pub fn set_bbox(&mut self, id: &str, bbox: BoundingBox) -> bool {
        match self.machines.iter_mut().find(|m| m.id == id) {
            Some(machine) => {
                machine.bbox = bbox;
                true
            }
            None => false,
        }
    }

    /// Topmost machine under `point` that is not dimmed by the view's filters
    pub fn machine_at(&self, view: &ViewState, point: Point) -> Option<&Machine> {
        self.machines
            .iter()
            .rev()
            .filter(|m| !view.is_dimmed(m))
            .find(|m| m.bbox.inflate(HIT_PADDING).contains(point))
    }

    /// Box centers along a flow, skipping ids missing from the registry
    pub fn flow_points(&self, sequence: &[&str]) -> Vec<Point> {
        sequence
            .iter()
            .filter_map(|id| self.get(id))
            .map(|m| m.bbox.center())
            .collect()
    }
}
