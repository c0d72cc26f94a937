//! Handlers for the assignment workflow
//!
//! Handles: Choose, Cancel

use crate::session::messages::AssignMsg;
use crate::session::state::Session;

pub fn handle_assign_msg(session: &mut Session, msg: AssignMsg) {
    match msg {
        AssignMsg::Choose(machine_id) => handle_choose(session, &machine_id),
        AssignMsg::Cancel => handle_cancel(session),
    }
}

fn handle_choose(session: &mut Session, machine_id: &str) {
    let Some(bbox) = session.pending else {
        return;
    };
    if !session.registry.set_bbox(machine_id, bbox) {
        log::warn!("Ignoring assignment to unknown machine {machine_id}");
        return;
    }
    log::info!(
        "Assigned {}x{} box at ({}, {}) to {}",
        bbox.width.round(),
        bbox.height.round(),
        bbox.x.round(),
        bbox.y.round(),
        machine_id
    );
    session.pending = None;
    session.drawing.reset();
}

fn handle_cancel(session: &mut Session) {
    if session.pending.take().is_some() {
        log::debug!("Pending box discarded");
    }
    session.drawing.reset();
}
