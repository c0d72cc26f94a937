//! Machine records and the static reference types they point at

use serde::{Deserialize, Serialize};

use super::geometry::BoundingBox;

/// Serializable RGB color (components in 0.0-1.0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Build from a packed `0xRRGGBB` value
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    /// Format as `#rrggbb`
    pub fn to_hex(self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8
        )
    }
}

#[cfg(feature = "gui")]
impl From<Rgb> for cosmic::iced::Color {
    fn from(c: Rgb) -> Self {
        cosmic::iced::Color::from_rgb(c.r, c.g, c.b)
    }
}

/// Operating status of a machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MachineStatus {
    Working,
    Idle,
    Repair,
}

impl MachineStatus {
    pub const ALL: [MachineStatus; 3] = [
        MachineStatus::Working,
        MachineStatus::Idle,
        MachineStatus::Repair,
    ];
}

/// Technological group an operation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperationGroup {
    Cutting,
    Machining,
    Forming,
    Welding,
    Assembly,
    Finishing,
}

impl OperationGroup {
    pub const ALL: [OperationGroup; 6] = [
        OperationGroup::Cutting,
        OperationGroup::Machining,
        OperationGroup::Forming,
        OperationGroup::Welding,
        OperationGroup::Assembly,
        OperationGroup::Finishing,
    ];
}

/// A technological operation a machine can perform
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub id: &'static str,
    pub name: &'static str,
    pub code: Option<&'static str>,
    pub description: &'static str,
    pub group: OperationGroup,
    /// Ordered technological steps
    pub transitions: &'static [&'static str],
}

/// Logistics path through the shop as an ordered list of machine ids
#[derive(Debug, Clone, PartialEq)]
pub struct Flow {
    pub id: &'static str,
    pub name: &'static str,
    pub sequence: &'static [&'static str],
    pub color: Rgb,
}

impl Flow {
    pub fn includes(&self, machine_id: &str) -> bool {
        self.sequence.contains(&machine_id)
    }
}

/// A piece of equipment on the shop floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Machine {
    pub id: String,
    pub name: String,
    pub model: String,
    pub description: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model3d: Option<String>,
    pub status: MachineStatus,
    /// Operation ids, resolved through the catalog
    pub operations: Vec<String>,
    pub tools: Vec<String>,
    pub consumables: Vec<String>,
    pub bbox: BoundingBox,
}
