//! Message types for the dashboard session
//!
//! This module contains:
//! - Msg enum with nested sub-enums for organized message handling
//! - Effect enum for work the reducer hands back to the runtime

use std::path::PathBuf;

use crate::domain::{MachineStatus, OperationGroup, Point, ViewMode};

// ============================================================================
// Drawing Action Types
// ============================================================================

/// Pointer gesture on the map while drawing mode is on (logical coordinates)
#[derive(Debug, Clone)]
pub enum DrawAction {
    /// Toggle drawing mode on/off
    ModeToggle,
    /// Pointer pressed at position
    Start(f32, f32),
    /// Pointer moved to position
    Move(f32, f32),
    /// Pointer released at position
    End(f32, f32),
    /// Pointer released with no known position, ends at the last move
    Release,
    /// Abandon the gesture in progress
    Cancel,
}

// ============================================================================
// Assignment Types
// ============================================================================

/// Assignment prompt actions
#[derive(Debug, Clone)]
pub enum AssignMsg {
    /// Give the pending box to the machine with this id
    Choose(String),
    /// Drop the pending box
    Cancel,
}

// ============================================================================
// Filter/View Types
// ============================================================================

/// Filter messages
#[derive(Debug, Clone)]
pub enum FilterMsg {
    Status(Option<MachineStatus>),
    OperationGroup(Option<OperationGroup>),
    Clear,
}

/// Selection, navigation and presentation messages
#[derive(Debug, Clone)]
pub enum ViewMsg {
    /// Switch between map and table
    SetMode(ViewMode),
    /// Click on the map at a logical position
    MapClick(Point),
    /// Select a machine by id from the map
    SelectMachine(String),
    /// Row click in the table: select and jump to the map
    OpenFromTable(String),
    /// Close the details panel
    CloseDetails,
    /// Expand or collapse an operation in the details panel
    ToggleOperation(String),
    /// Show or hide flow lines
    ToggleFlows,
    /// Hide dimmed machines instead of fading them
    ToggleHideDimmed,
}

// ============================================================================
// Export Types
// ============================================================================

/// Outcome of the asynchronous export
#[derive(Debug, Clone)]
pub enum ExportOutcome {
    Saved(PathBuf),
    Cancelled,
    Failed(String),
}

/// Export workflow messages
#[derive(Debug, Clone)]
pub enum ExportMsg {
    /// Ask the runtime to export the registry
    Requested,
    /// Export finished
    Finished(ExportOutcome),
}

// ============================================================================
// Main Message Enum
// ============================================================================

/// Messages for dashboard session interactions
#[derive(Debug, Clone)]
pub enum Msg {
    /// Annotation tool messages
    Draw(DrawAction),
    /// Assignment workflow messages
    Assign(AssignMsg),
    /// Filter messages
    Filter(FilterMsg),
    /// View and selection messages
    View(ViewMsg),
    /// Export messages
    Export(ExportMsg),
}

/// Work the reducer cannot do itself
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Serialize the registry and write it where the user chooses
    Export,
    /// Persisted display preferences changed
    SaveSettings,
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl Msg {
    // Drawing shortcuts
    pub fn drawing_mode_toggle() -> Self {
        Self::Draw(DrawAction::ModeToggle)
    }
    pub fn draw_start(x: f32, y: f32) -> Self {
        Self::Draw(DrawAction::Start(x, y))
    }
    pub fn draw_move(x: f32, y: f32) -> Self {
        Self::Draw(DrawAction::Move(x, y))
    }
    pub fn draw_end(x: f32, y: f32) -> Self {
        Self::Draw(DrawAction::End(x, y))
    }
    pub fn draw_release() -> Self {
        Self::Draw(DrawAction::Release)
    }
    pub fn draw_cancel() -> Self {
        Self::Draw(DrawAction::Cancel)
    }

    // Assignment shortcuts
    pub fn assign(machine_id: impl Into<String>) -> Self {
        Self::Assign(AssignMsg::Choose(machine_id.into()))
    }
    pub fn cancel_assignment() -> Self {
        Self::Assign(AssignMsg::Cancel)
    }

    // Filter shortcuts
    pub fn status_filter(status: Option<MachineStatus>) -> Self {
        Self::Filter(FilterMsg::Status(status))
    }
    pub fn group_filter(group: Option<OperationGroup>) -> Self {
        Self::Filter(FilterMsg::OperationGroup(group))
    }
    pub fn clear_filters() -> Self {
        Self::Filter(FilterMsg::Clear)
    }

    // View shortcuts
    pub fn view_mode(mode: ViewMode) -> Self {
        Self::View(ViewMsg::SetMode(mode))
    }
    pub fn map_click(x: f32, y: f32) -> Self {
        Self::View(ViewMsg::MapClick(Point::new(x, y)))
    }
    pub fn select_machine(id: impl Into<String>) -> Self {
        Self::View(ViewMsg::SelectMachine(id.into()))
    }
    pub fn open_from_table(id: impl Into<String>) -> Self {
        Self::View(ViewMsg::OpenFromTable(id.into()))
    }
    pub fn close_details() -> Self {
        Self::View(ViewMsg::CloseDetails)
    }
    pub fn toggle_operation(id: impl Into<String>) -> Self {
        Self::View(ViewMsg::ToggleOperation(id.into()))
    }
    pub fn toggle_flows() -> Self {
        Self::View(ViewMsg::ToggleFlows)
    }
    pub fn toggle_hide_dimmed() -> Self {
        Self::View(ViewMsg::ToggleHideDimmed)
    }

    // Export shortcuts
    pub fn export() -> Self {
        Self::Export(ExportMsg::Requested)
    }
    pub fn export_finished(outcome: ExportOutcome) -> Self {
        Self::Export(ExportMsg::Finished(outcome))
    }
}
