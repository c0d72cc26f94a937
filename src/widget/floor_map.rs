//! FloorMap - Canvas program for the factory floor plan
//!
//! This widget handles:
//! - Drawing machine boxes, flow lines and the pending/preview rectangles
//! - The operation group legend in the bottom-right corner
//! - Mouse input for selection clicks and box drawing
//!
//! All pointer positions are converted to logical canvas coordinates
//! before they leave the widget.

use cosmic::iced::Color;
use cosmic::iced_core::{Rectangle, Size, mouse};
use cosmic::iced_widget::canvas;

use crate::catalog;
use crate::domain::{
    BoundingBox, CANVAS_HEIGHT, CANVAS_WIDTH, OperationGroup, Point, ViewTransform,
};
use crate::fl;
use crate::session::Session;

const LEGEND_WIDTH: f32 = 200.0;
const LEGEND_ROW: f32 = 22.0;
const LEGEND_PADDING: f32 = 12.0;
const LEGEND_MARGIN: f32 = 16.0;

/// Pointer events emitted by the map, in logical coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MapEvent {
    /// Click outside drawing mode
    Click(f32, f32),
    /// Drag started in drawing mode
    DrawStart(f32, f32),
    /// Pointer moved during a drag
    DrawMove(f32, f32),
    /// Drag released
    DrawEnd(f32, f32),
    /// Drag released with no cursor position available
    DrawRelease,
}

/// Canvas program rendering the session's machines
pub struct FloorMap<'a, Message: Clone + 'static> {
    pub session: &'a Session,
    pub on_event: Box<dyn Fn(MapEvent) -> Message + 'a>,
}

impl<'a, Message: Clone + 'static> FloorMap<'a, Message> {
    pub fn new(session: &'a Session, on_event: impl Fn(MapEvent) -> Message + 'a) -> Self {
        Self {
            session,
            on_event: Box::new(on_event),
        }
    }

    fn drawing(&self) -> bool {
        self.session.view.is_drawing_mode
    }

    fn dragging(&self) -> bool {
        self.session.drawing.drag.is_some()
    }
}

/// Widget-local cursor position, even when the cursor is outside the bounds
fn local_position(bounds: Rectangle, cursor: mouse::Cursor) -> Option<Point> {
    cursor
        .position()
        .map(|p| Point::new(p.x - bounds.x, p.y - bounds.y))
}

/// Legend panel in widget coordinates, or `None` when the widget is too small
fn legend_box(width: f32, height: f32) -> Option<BoundingBox> {
    let rows = OperationGroup::ALL.len() as f32 + 1.0;
    let w = LEGEND_WIDTH;
    let h = rows * LEGEND_ROW + 2.0 * LEGEND_PADDING;
    let x = width - w - LEGEND_MARGIN;
    let y = height - h - LEGEND_MARGIN;
    (x >= 0.0 && y >= 0.0).then(|| BoundingBox::new(x, y, w, h))
}

fn to_iced_rect(b: &BoundingBox) -> (cosmic::iced_core::Point, Size) {
    (
        cosmic::iced_core::Point::new(b.x, b.y),
        Size::new(b.width.max(1.0), b.height.max(1.0)),
    )
}

impl<'a, Message: Clone + 'static> canvas::Program<Message, cosmic::Theme, cosmic::Renderer>
    for FloorMap<'a, Message>
{
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        use cosmic::iced_core::mouse::{Button, Event as MouseEvent};

        let transform = ViewTransform::fit(bounds.width, bounds.height);

        match event {
            canvas::Event::Mouse(MouseEvent::ButtonPressed(Button::Left)) => {
                let Some(pos) = cursor.position_in(bounds) else {
                    return (canvas::event::Status::Ignored, None);
                };
                let p = transform.to_logical(Point::new(pos.x, pos.y));
                let event = if self.drawing() {
                    // The assignment prompt is modal
                    if self.session.pending.is_some() {
                        return (canvas::event::Status::Ignored, None);
                    }
                    MapEvent::DrawStart(p.x, p.y)
                } else {
                    MapEvent::Click(p.x, p.y)
                };
                return (canvas::event::Status::Captured, Some((self.on_event)(event)));
            }
            canvas::Event::Mouse(MouseEvent::CursorMoved { .. }) if self.dragging() => {
                if let Some(pos) = local_position(bounds, cursor) {
                    let p = transform.to_logical(pos);
                    return (
                        canvas::event::Status::Captured,
                        Some((self.on_event)(MapEvent::DrawMove(p.x, p.y))),
                    );
                }
            }
            canvas::Event::Mouse(MouseEvent::ButtonReleased(Button::Left)) if self.dragging() => {
                // Always finish, or the preview would stay on screen
                let event = match local_position(bounds, cursor) {
                    Some(pos) => {
                        let p = transform.to_logical(pos);
                        MapEvent::DrawEnd(p.x, p.y)
                    }
                    None => MapEvent::DrawRelease,
                };
                return (canvas::event::Status::Captured, Some((self.on_event)(event)));
            }
            _ => {}
        }

        (canvas::event::Status::Ignored, None)
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &cosmic::Renderer,
        _theme: &cosmic::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        use canvas::{Frame, LineDash, Path, Stroke, Text};

        let mut frame = Frame::new(renderer, bounds.size());
        let transform = ViewTransform::fit(bounds.width, bounds.height);
        let session = self.session;

        // Canvas outline
        let canvas_box = transform.box_to_screen(&BoundingBox::new(
            0.0,
            0.0,
            CANVAS_WIDTH,
            CANVAS_HEIGHT,
        ));
        let (origin, size) = to_iced_rect(&canvas_box);
        frame.stroke(
            &Path::rectangle(origin, size),
            Stroke {
                style: Color::from_rgba(1.0, 1.0, 1.0, 0.15).into(),
                width: 1.0,
                ..Stroke::default()
            },
        );

        // Flow lines under the machines
        if session.ui.show_flows {
            for flow in catalog::flows() {
                let points: Vec<_> = session
                    .registry
                    .flow_points(flow.sequence)
                    .into_iter()
                    .map(|p| transform.to_screen(p))
                    .collect();
                if points.len() < 2 {
                    continue;
                }
                let path = Path::new(|b| {
                    b.move_to(cosmic::iced_core::Point::new(points[0].x, points[0].y));
                    for p in &points[1..] {
                        b.line_to(cosmic::iced_core::Point::new(p.x, p.y));
                    }
                });
                let color: Color = flow.color.into();
                frame.stroke(
                    &path,
                    Stroke {
                        style: Color { a: 0.8, ..color }.into(),
                        width: 3.0,
                        line_dash: LineDash {
                            segments: &[10.0, 6.0],
                            offset: 0,
                        },
                        ..Stroke::default()
                    },
                );
                for p in &points {
                    frame.fill(
                        &Path::circle(cosmic::iced_core::Point::new(p.x, p.y), 4.0),
                        color,
                    );
                }
            }
        }

        // Machines in registry order, so later entries land on top
        let selected = session.view.selected_machine_id.as_deref();
        for machine in session.registry.machines() {
            let dimmed = session.view.is_dimmed(machine);
            if dimmed && session.ui.hide_dimmed {
                continue;
            }
            let is_selected = selected == Some(machine.id.as_str());
            let alpha = if dimmed { 0.25 } else { 1.0 };

            let group_color: Color = catalog::primary_group(machine)
                .map(|g| g.color().into())
                .unwrap_or(Color::from_rgb(0.6, 0.6, 0.6));
            let status_color: Color = machine.status.color().into();

            let screen = transform.box_to_screen(&machine.bbox);
            let (origin, size) = to_iced_rect(&screen);
            let path = Path::rectangle(origin, size);

            let (fill_alpha, outline, width) = if is_selected {
                (0.35, Color::WHITE, 4.0)
            } else {
                (0.2, group_color, 2.0)
            };
            frame.fill(
                &path,
                Color {
                    a: fill_alpha * alpha,
                    ..group_color
                },
            );
            frame.stroke(
                &path,
                Stroke {
                    style: Color { a: alpha, ..outline }.into(),
                    width,
                    ..Stroke::default()
                },
            );

            // Status dot in the top-right corner
            frame.fill(
                &Path::circle(
                    cosmic::iced_core::Point::new(screen.right() - 10.0, screen.y + 10.0),
                    5.0,
                ),
                Color {
                    a: alpha,
                    ..status_color
                },
            );

            let icon = catalog::primary_group(machine).map_or("", |g| g.icon());
            frame.fill_text(Text {
                content: format!("{icon} {}", machine.name),
                position: cosmic::iced_core::Point::new(screen.x + 6.0, screen.y + 6.0),
                color: Color {
                    a: alpha,
                    ..Color::WHITE
                },
                size: 14.0.into(),
                ..Text::default()
            });
        }

        let dashed = |color: Color| Stroke {
            style: color.into(),
            width: 2.0,
            line_dash: LineDash {
                segments: &[6.0, 4.0],
                offset: 0,
            },
            ..Stroke::default()
        };

        if let Some(pending) = session.pending {
            let (origin, size) = to_iced_rect(&transform.box_to_screen(&pending));
            let path = Path::rectangle(origin, size);
            frame.fill(&path, Color::from_rgba(0.98, 0.57, 0.24, 0.2));
            frame.stroke(&path, dashed(Color::from_rgb(0.98, 0.57, 0.24)));
        }

        if let Some(preview) = session.drawing.preview() {
            let (origin, size) = to_iced_rect(&transform.box_to_screen(&preview));
            frame.stroke(
                &Path::rectangle(origin, size),
                dashed(Color::from_rgba(1.0, 1.0, 1.0, 0.9)),
            );
        }

        if let Some(legend) = legend_box(bounds.width, bounds.height) {
            let (origin, size) = to_iced_rect(&legend);
            let panel = Path::rectangle(origin, size);
            frame.fill(&panel, Color::from_rgba(0.0, 0.0, 0.0, 0.85));
            frame.stroke(
                &panel,
                Stroke {
                    style: Color::from_rgba(1.0, 1.0, 1.0, 0.1).into(),
                    width: 1.0,
                    ..Stroke::default()
                },
            );

            let left = legend.x + LEGEND_PADDING;
            let top = legend.y + LEGEND_PADDING;
            frame.fill_text(Text {
                content: fl!("legend-title"),
                position: cosmic::iced_core::Point::new(left, top),
                color: Color::from_rgba(1.0, 1.0, 1.0, 0.4),
                size: 11.0.into(),
                ..Text::default()
            });

            for (i, group) in OperationGroup::ALL.iter().enumerate() {
                let y = top + (i as f32 + 1.0) * LEGEND_ROW;
                frame.fill_text(Text {
                    content: group.icon().to_string(),
                    position: cosmic::iced_core::Point::new(left, y),
                    color: Color::from_rgba(1.0, 1.0, 1.0, 0.5),
                    size: 13.0.into(),
                    ..Text::default()
                });
                frame.fill(
                    &Path::circle(cosmic::iced_core::Point::new(left + 26.0, y + 7.0), 4.0),
                    Color::from(group.color()),
                );
                frame.fill_text(Text {
                    content: group.label(),
                    position: cosmic::iced_core::Point::new(left + 38.0, y),
                    color: Color::from_rgba(1.0, 1.0, 1.0, 0.7),
                    size: 12.0.into(),
                    ..Text::default()
                });
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        let Some(pos) = cursor.position_in(bounds) else {
            return mouse::Interaction::default();
        };
        if self.drawing() {
            return mouse::Interaction::Crosshair;
        }
        let transform = ViewTransform::fit(bounds.width, bounds.height);
        let p = transform.to_logical(Point::new(pos.x, pos.y));
        if self
            .session
            .registry
            .machine_at(&self.session.view, p)
            .is_some()
        {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legend_sits_in_bottom_right_corner() {
        let legend = legend_box(1200.0, 800.0).unwrap();
        assert_eq!(legend.right(), 1200.0 - LEGEND_MARGIN);
        assert_eq!(legend.y + legend.height, 800.0 - LEGEND_MARGIN);
        let rows = OperationGroup::ALL.len() as f32 + 1.0;
        assert_eq!(legend.height, rows * LEGEND_ROW + 2.0 * LEGEND_PADDING);
    }

    #[test]
    fn test_legend_hidden_when_map_too_small() {
        assert!(legend_box(100.0, 800.0).is_none());
        assert!(legend_box(1200.0, 50.0).is_none());
    }
}
