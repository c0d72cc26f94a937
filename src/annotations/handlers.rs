//! Annotation tool handlers
//!
//! Turns pointer gestures into pending bounding boxes.

use crate::domain::{Drag, Point, ViewMode};
use crate::session::messages::DrawAction;
use crate::session::state::Session;

/// Close the gesture, keeping the box if it is large enough
fn finish_drag(session: &mut Session, drag: Drag) {
    let rect = drag.rect();
    if rect.exceeds(session.min_box_size) {
        log::debug!("New pending box: {:?}", rect);
        session.pending = Some(rect);
    } else {
        log::debug!("Discarded {}x{} drag", rect.width, rect.height);
    }
}

/// Handle a DrawAction, modifying session state
pub fn handle_draw_action(session: &mut Session, action: DrawAction) {
    match action {
        DrawAction::ModeToggle => {
            session.view.is_drawing_mode = !session.view.is_drawing_mode;
            session.drawing.reset();
            if session.view.is_drawing_mode {
                session.view.view_mode = ViewMode::Map;
            }
            log::debug!("Drawing mode: {}", session.view.is_drawing_mode);
        }
        DrawAction::Start(x, y) => {
            // The assignment prompt is modal
            if session.view.is_drawing_mode && session.pending.is_none() {
                let start = Point::new(x, y).clamp_to_canvas();
                session.drawing.drag = Some(Drag::new(start));
            }
        }
        DrawAction::Move(x, y) => {
            if let Some(drag) = session.drawing.drag.as_mut() {
                drag.current = Point::new(x, y).clamp_to_canvas();
            }
        }
        DrawAction::End(x, y) => {
            if let Some(mut drag) = session.drawing.drag.take() {
                drag.current = Point::new(x, y).clamp_to_canvas();
                finish_drag(session, drag);
            }
        }
        DrawAction::Release => {
            if let Some(drag) = session.drawing.drag.take() {
                finish_drag(session, drag);
            }
        }
        DrawAction::Cancel => session.drawing.reset(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FloorwatchConfig;
    use crate::domain::BoundingBox;

    fn drawing_session() -> Session {
        let mut session = Session::new(&FloorwatchConfig::default());
        handle_draw_action(&mut session, DrawAction::ModeToggle);
        session
    }

    fn drag(session: &mut Session, from: (f32, f32), to: (f32, f32)) {
        handle_draw_action(session, DrawAction::Start(from.0, from.1));
        handle_draw_action(session, DrawAction::Move(to.0, to.1));
        handle_draw_action(session, DrawAction::End(to.0, to.1));
    }

    #[test]
    fn test_drag_produces_normalized_box() {
        let mut session = drawing_session();
        drag(&mut session, (200.0, 150.0), (100.0, 100.0));
        assert_eq!(session.pending, Some(BoundingBox::new(100.0, 100.0, 100.0, 50.0)));
        assert!(session.drawing.drag.is_none());
    }

    #[test]
    fn test_zero_size_drag_is_discarded() {
        let mut session = drawing_session();
        drag(&mut session, (100.0, 100.0), (100.0, 100.0));
        assert_eq!(session.pending, None);
        assert!(session.drawing.drag.is_none());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut session = drawing_session();
        drag(&mut session, (100.0, 100.0), (105.0, 300.0));
        assert_eq!(session.pending, None);
        drag(&mut session, (100.0, 100.0), (300.0, 105.0));
        assert_eq!(session.pending, None);
        drag(&mut session, (100.0, 100.0), (105.5, 105.5));
        assert!(session.pending.is_some());
    }

    #[test]
    fn test_start_ignored_outside_drawing_mode() {
        let mut session = Session::new(&FloorwatchConfig::default());
        handle_draw_action(&mut session, DrawAction::Start(10.0, 10.0));
        assert!(session.drawing.drag.is_none());
    }

    #[test]
    fn test_start_ignored_while_box_pending() {
        let mut session = drawing_session();
        drag(&mut session, (100.0, 100.0), (200.0, 150.0));
        let pending = session.pending;
        drag(&mut session, (400.0, 400.0), (600.0, 600.0));
        assert_eq!(session.pending, pending);
        assert!(session.drawing.drag.is_none());
    }

    #[test]
    fn test_moves_replace_preview() {
        let mut session = drawing_session();
        handle_draw_action(&mut session, DrawAction::Start(100.0, 100.0));
        handle_draw_action(&mut session, DrawAction::Move(500.0, 500.0));
        handle_draw_action(&mut session, DrawAction::Move(150.0, 120.0));
        assert_eq!(
            session.drawing.preview(),
            Some(BoundingBox::new(100.0, 100.0, 50.0, 20.0))
        );
    }

    #[test]
    fn test_points_clamped_to_canvas() {
        let mut session = drawing_session();
        drag(&mut session, (1100.0, 700.0), (1500.0, 950.0));
        assert_eq!(session.pending, Some(BoundingBox::new(1100.0, 700.0, 100.0, 100.0)));
    }

    #[test]
    fn test_leaving_drawing_mode_resets_drag() {
        let mut session = drawing_session();
        handle_draw_action(&mut session, DrawAction::Start(100.0, 100.0));
        handle_draw_action(&mut session, DrawAction::ModeToggle);
        assert!(!session.view.is_drawing_mode);
        assert!(session.drawing.drag.is_none());
    }

    #[test]
    fn test_cancel_discards_gesture() {
        let mut session = drawing_session();
        handle_draw_action(&mut session, DrawAction::Start(100.0, 100.0));
        handle_draw_action(&mut session, DrawAction::Cancel);
        handle_draw_action(&mut session, DrawAction::End(300.0, 300.0));
        assert_eq!(session.pending, None);
    }

    #[test]
    fn test_release_without_position_uses_last_move() {
        let mut session = drawing_session();
        handle_draw_action(&mut session, DrawAction::Start(100.0, 100.0));
        handle_draw_action(&mut session, DrawAction::Move(260.0, 180.0));
        handle_draw_action(&mut session, DrawAction::Release);
        assert_eq!(session.pending, Some(BoundingBox::new(100.0, 100.0, 160.0, 80.0)));
        assert!(session.drawing.drag.is_none());
        assert_eq!(session.drawing.preview(), None);
    }

    #[test]
    fn test_release_without_move_clears_preview() {
        let mut session = drawing_session();
        handle_draw_action(&mut session, DrawAction::Start(100.0, 100.0));
        handle_draw_action(&mut session, DrawAction::Release);
        assert_eq!(session.pending, None);
        assert_eq!(session.drawing.preview(), None);
    }

    #[test]
    fn test_entering_drawing_mode_shows_map() {
        let mut session = Session::new(&FloorwatchConfig::default());
        session.view.view_mode = ViewMode::Table;
        handle_draw_action(&mut session, DrawAction::ModeToggle);
        assert_eq!(session.view.view_mode, ViewMode::Map);
    }
}
