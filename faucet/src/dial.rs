//! Canvas gauge for the temperature dial.

use faucet_core::{DialConfig, DialState, TemperatureBand, mapper};
use iced::mouse;
use iced::widget::canvas::{self, Frame, LineCap, Path, Stroke, path::Arc};
use iced::{Color, Point, Radians, Rectangle, Renderer, Theme};

use crate::Message;

const TRACK_WIDTH: f32 = 14.0;
const KNOB_RADIUS: f32 = 11.0;
const TICK_EVERY: i32 = 10;

/// Colour used for the value arc in each band.
pub fn band_color(band: TemperatureBand) -> Color {
    match band {
        TemperatureBand::Cool => Color::from_rgb8(0x0A, 0x84, 0xFF),
        TemperatureBand::Warm => Color::from_rgb8(0xFF, 0x9F, 0x0A),
        TemperatureBand::Hot => Color::from_rgb8(0xFF, 0x3B, 0x30),
    }
}

/// Gauge snapshot handed to the canvas each frame.
pub struct Dial {
    pub state: DialState,
    pub config: DialConfig,
    /// Knob bearing for the current value.
    pub angle: f32,
}

#[derive(Default)]
pub struct DragState {
    dragging: bool,
}

impl Dial {
    fn gesture(bounds: Rectangle, cursor: mouse::Cursor) -> Option<Message> {
        // keep following the pointer even when it leaves the canvas mid-drag
        let position = cursor.position()?;
        let center = bounds.center();
        Some(Message::Gesture {
            center: (center.x, center.y),
            pointer: (position.x, position.y),
        })
    }
}

/// Point on the circle at a bearing measured clockwise from up.
fn point_at(center: Point, radius: f32, bearing: f32) -> Point {
    let radians = bearing.to_radians();
    Point::new(
        center.x + radius * radians.sin(),
        center.y - radius * radians.cos(),
    )
}

/// Canvas arcs start on the +x axis, a quarter turn behind our bearings.
fn canvas_radians(bearing: f32) -> Radians {
    Radians((bearing - 90.0).to_radians())
}

fn arc(center: Point, radius: f32, from: f32, to: f32) -> Path {
    Path::new(|builder| {
        builder.arc(Arc {
            center,
            radius,
            start_angle: canvas_radians(from),
            end_angle: canvas_radians(to),
        });
    })
}

impl canvas::Program<Message> for Dial {
    type State = DragState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        match event {
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                cursor.position_in(bounds)?;
                state.dragging = true;
                Self::gesture(bounds, cursor).map(|m| canvas::Action::publish(m).and_capture())
            }
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. }) if state.dragging => {
                Self::gesture(bounds, cursor).map(|m| canvas::Action::publish(m).and_capture())
            }
            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
                if state.dragging =>
            {
                state.dragging = false;
                Some(canvas::Action::capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let range = &self.config.range;
        let palette = theme.extended_palette();

        let center = frame.center();
        let radius = (bounds.width.min(bounds.height) / 2.0 - TRACK_WIDTH - 8.0).max(1.0);

        let track = arc(center, radius, range.start_angle(), range.end_angle());
        frame.stroke(
            &track,
            Stroke::default()
                .with_width(TRACK_WIDTH)
                .with_color(palette.background.strong.color)
                .with_line_cap(LineCap::Round),
        );

        let mut marker = range.min();
        while marker <= range.max() {
            let bearing = mapper::angle_for_value(marker, range);
            let inner = point_at(center, radius - TRACK_WIDTH, bearing);
            let outer = point_at(center, radius - TRACK_WIDTH - 6.0, bearing);
            frame.stroke(
                &Path::line(inner, outer),
                Stroke::default()
                    .with_width(2.0)
                    .with_color(palette.background.strong.text),
            );
            marker += TICK_EVERY;
        }

        let angle = self.angle;
        let band = self.config.bands.band_for_value(self.state.value);
        let color = if self.state.power_on {
            band_color(band)
        } else {
            Color {
                a: 0.35,
                ..band_color(band)
            }
        };

        if angle > range.start_angle() {
            frame.stroke(
                &arc(center, radius, range.start_angle(), angle),
                Stroke::default()
                    .with_width(TRACK_WIDTH)
                    .with_color(color)
                    .with_line_cap(LineCap::Round),
            );
        }

        if self.state.timer.total_secs > 0 {
            let sweep = range.span() * (1.0 - self.state.timer.progress());
            if sweep > 0.0 {
                frame.stroke(
                    &arc(
                        center,
                        radius + TRACK_WIDTH,
                        range.start_angle(),
                        range.start_angle() + sweep,
                    ),
                    Stroke::default()
                        .with_width(3.0)
                        .with_color(palette.primary.base.color),
                );
            }
        }

        let knob = point_at(center, radius, angle);
        frame.fill(&Path::circle(knob, KNOB_RADIUS), Color::WHITE);
        frame.stroke(
            &Path::circle(knob, KNOB_RADIUS),
            Stroke::default().with_width(3.0).with_color(color),
        );

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) && self.state.power_on {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
