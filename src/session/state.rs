use crate::catalog;
use crate::config::FloorwatchConfig;
use crate::domain::{BoundingBox, Drag, Machine, MachineStatus, OperationGroup, ViewMode};

use super::registry::Registry;

/// Selection, filters and view mode
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub selected_machine_id: Option<String>,
    pub operation_group_filter: Option<OperationGroup>,
    pub status_filter: Option<MachineStatus>,
    pub view_mode: ViewMode,
    pub is_drawing_mode: bool,
}

impl ViewState {
    /// True when the machine fails either active filter
    pub fn is_dimmed(&self, machine: &Machine) -> bool {
        let fails_group = self.operation_group_filter.is_some_and(|group| {
            !catalog::machine_operations(machine).any(|op| op.group == group)
        });
        let fails_status = self
            .status_filter
            .is_some_and(|status| machine.status != status);
        fails_group || fails_status
    }

    pub fn has_filters(&self) -> bool {
        self.operation_group_filter.is_some() || self.status_filter.is_some()
    }
}

/// Annotation tool state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawingState {
    /// In-progress drag, if the pointer is down
    pub drag: Option<Drag>,
}

impl DrawingState {
    /// Live preview rectangle for rendering
    pub fn preview(&self) -> Option<BoundingBox> {
        self.drag.as_ref().map(Drag::rect)
    }

    pub fn reset(&mut self) {
        self.drag = None;
    }
}

/// Result of the last export, shown in the status line
#[derive(Clone, Debug, PartialEq)]
pub enum StatusLine {
    Exported(String),
    ExportFailed(String),
}

/// Presentation state that is not part of the filter model
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    /// Operation expanded in the details panel accordion
    pub expanded_operation: Option<String>,
    pub show_flows: bool,
    pub hide_dimmed: bool,
    pub status_line: Option<StatusLine>,
}

impl UiState {
    pub fn from_config(config: &FloorwatchConfig) -> Self {
        Self {
            expanded_operation: None,
            show_flows: config.show_flows,
            hide_dimmed: config.hide_dimmed,
            status_line: None,
        }
    }
}

/// Complete dashboard state, mutated only through [`super::update`]
#[derive(Clone, Debug)]
pub struct Session {
    pub registry: Registry,
    pub view: ViewState,
    pub drawing: DrawingState,
    /// Drawn box waiting to be assigned to a machine
    pub pending: Option<BoundingBox>,
    pub ui: UiState,
    /// Drags no larger than this on either side are discarded
    pub min_box_size: f32,
}

impl Session {
    pub fn new(config: &FloorwatchConfig) -> Self {
        Self::with_machines(catalog::initial_machines(), config)
    }

    pub fn with_machines(machines: Vec<Machine>, config: &FloorwatchConfig) -> Self {
        Self {
            registry: Registry::new(machines),
            view: ViewState {
                view_mode: config.default_view_mode,
                ..ViewState::default()
            },
            drawing: DrawingState::default(),
            pending: None,
            ui: UiState::from_config(config),
            min_box_size: config.min_box_size,
        }
    }

    pub fn selected_machine(&self) -> Option<&Machine> {
        self.view
            .selected_machine_id
            .as_deref()
            .and_then(|id| self.registry.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(id: &str, status: MachineStatus, ops: &[&str]) -> Machine {
        Machine {
            id: id.into(),
            name: id.into(),
            model: String::new(),
            description: String::new(),
            image: String::new(),
            model3d: None,
            status,
            operations: ops.iter().map(|s| s.to_string()).collect(),
            tools: vec![],
            consumables: vec![],
            bbox: BoundingBox::default(),
        }
    }

    #[test]
    fn test_no_filters_dims_nothing() {
        let view = ViewState::default();
        assert!(!view.is_dimmed(&machine("a", MachineStatus::Idle, &[])));
    }

    #[test]
    fn test_filters_combine_with_and() {
        let view = ViewState {
            status_filter: Some(MachineStatus::Repair),
            operation_group_filter: Some(OperationGroup::Machining),
            ..ViewState::default()
        };
        // "6" is drilling (machining), "1" is plasma cutting
        assert!(!view.is_dimmed(&machine("a", MachineStatus::Repair, &["1", "6"])));
        assert!(view.is_dimmed(&machine("b", MachineStatus::Working, &["6"])));
        assert!(view.is_dimmed(&machine("c", MachineStatus::Repair, &["1"])));
        assert!(view.is_dimmed(&machine("d", MachineStatus::Repair, &[])));
    }

    #[test]
    fn test_preview_follows_drag() {
        let mut drawing = DrawingState::default();
        assert_eq!(drawing.preview(), None);
        let mut drag = Drag::new(crate::domain::Point::new(10.0, 10.0));
        drag.current = crate::domain::Point::new(30.0, 5.0);
        drawing.drag = Some(drag);
        assert_eq!(drawing.preview(), Some(BoundingBox::new(10.0, 5.0, 20.0, 5.0)));
        drawing.reset();
        assert_eq!(drawing.preview(), None);
    }
}
