//! Static reference data: operation groups, operations, flows and status colors
//!
//! Tables are built once and never mutated. Lookups by id go through
//! lazily-built indexes.

mod data;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::domain::{Flow, Machine, MachineStatus, Operation, OperationGroup, Rgb};
use crate::fl;

static OPERATION_INDEX: LazyLock<HashMap<&'static str, &'static Operation>> =
    LazyLock::new(|| data::OPERATIONS.iter().map(|op| (op.id, op)).collect());

/// Every known operation, in catalog order
pub fn operations() -> &'static [Operation] {
    data::OPERATIONS
}

/// Look up an operation by id
pub fn operation(id: &str) -> Option<&'static Operation> {
    OPERATION_INDEX.get(id).copied()
}

/// Resolve a machine's operation ids, skipping unknown ones
pub fn machine_operations(machine: &Machine) -> impl Iterator<Item = &'static Operation> + '_ {
    machine.operations.iter().filter_map(|id| operation(id))
}

/// Group of the machine's first known operation
pub fn primary_group(machine: &Machine) -> Option<OperationGroup> {
    machine_operations(machine).next().map(|op| op.group)
}

/// Every known logistics flow
pub fn flows() -> &'static [Flow] {
    data::FLOWS
}

/// Flows that pass through the given machine
pub fn flows_through(machine_id: &str) -> impl Iterator<Item = &'static Flow> + '_ {
    data::FLOWS.iter().filter(move |f| f.includes(machine_id))
}

/// Registry contents at startup
pub fn initial_machines() -> Vec<Machine> {
    data::machines()
}

impl OperationGroup {
    pub fn color(self) -> Rgb {
        match self {
            OperationGroup::Cutting => Rgb::from_hex(0x3b82f6),
            OperationGroup::Machining => Rgb::from_hex(0xa855f7),
            OperationGroup::Forming => Rgb::from_hex(0xf97316),
            OperationGroup::Welding => Rgb::from_hex(0xeab308),
            OperationGroup::Assembly => Rgb::from_hex(0x10b981),
            OperationGroup::Finishing => Rgb::from_hex(0xec4899),
        }
    }

    /// Glyph shown in the corner badge of a machine box
    pub fn icon(self) -> &'static str {
        match self {
            OperationGroup::Cutting => "✂",
            OperationGroup::Machining => "⚙",
            OperationGroup::Forming => "◠",
            OperationGroup::Welding => "⚡",
            OperationGroup::Assembly => "▣",
            OperationGroup::Finishing => "◆",
        }
    }

    pub fn label(self) -> String {
        match self {
            OperationGroup::Cutting => fl!("group-cutting"),
            OperationGroup::Machining => fl!("group-machining"),
            OperationGroup::Forming => fl!("group-forming"),
            OperationGroup::Welding => fl!("group-welding"),
            OperationGroup::Assembly => fl!("group-assembly"),
            OperationGroup::Finishing => fl!("group-finishing"),
        }
    }
}

impl MachineStatus {
    pub fn color(self) -> Rgb {
        match self {
            MachineStatus::Working => Rgb::from_hex(0x22c55e),
            MachineStatus::Idle => Rgb::from_hex(0xf59e0b),
            MachineStatus::Repair => Rgb::from_hex(0xef4444),
        }
    }

    pub fn label(self) -> String {
        match self {
            MachineStatus::Working => fl!("status-working"),
            MachineStatus::Idle => fl!("status-idle"),
            MachineStatus::Repair => fl!("status-repair"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_operation_ids_are_unique() {
        let ids: HashSet<_> = operations().iter().map(|op| op.id).collect();
        assert_eq!(ids.len(), operations().len());
    }

    #[test]
    fn test_initial_machines_reference_known_operations() {
        for machine in initial_machines() {
            assert!(
                machine.operations.iter().all(|id| operation(id).is_some()),
                "{} references an unknown operation",
                machine.id
            );
        }
    }

    #[test]
    fn test_initial_machine_ids_are_unique() {
        let machines = initial_machines();
        let ids: HashSet<_> = machines.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), machines.len());
    }

    #[test]
    fn test_flows_reference_registry_machines() {
        let machines = initial_machines();
        for flow in flows() {
            for id in flow.sequence {
                assert!(machines.iter().any(|m| m.id == *id), "{}: {id}", flow.id);
            }
        }
    }

    #[test]
    fn test_primary_group_skips_unknown_ids() {
        let mut machine = initial_machines().remove(2);
        machine.operations = vec!["missing".into(), "13".into()];
        assert_eq!(primary_group(&machine), Some(OperationGroup::Machining));
    }

    #[test]
    fn test_seed_records_keep_full_text() {
        let machines = initial_machines();
        assert!(
            machines[0]
                .description
                .ends_with("Используется для изготовления фасонных деталей колонн и связей.")
        );
        assert_eq!(
            machines[0].image,
            "https://images.unsplash.com/photo-1504917595217-d4dc5ebe6122?auto=format&fit=crop&q=80&w=800"
        );
        assert!(machines[1].consumables.contains(&"СОЖ концентрат Shell".to_string()));
        assert!(machines[3].consumables.contains(&"Масло Shell Tellus 46".to_string()));
        assert_eq!(
            machines[3].description,
            "Применяется для гибки обечаек и конических элементов резервуаров. \
             ЧПУ управление обеспечивает высокую точность радиуса."
        );
        assert!(machines.iter().all(|m| m.image.ends_with("?auto=format&fit=crop&q=80&w=800")));
    }

    #[test]
    fn test_flows_through() {
        let ids: Vec<_> = flows_through("m3").map(|f| f.id).collect();
        assert_eq!(ids, vec!["f1", "f2"]);
        assert_eq!(flows_through("m4").count(), 1);
    }
}
