mod dial;

use faucet_core::{DialController, DialSession, PresetCatalog, PresetId};
use iced::keyboard::{self, Event as KeyboardEvent, Key, key::Named};
use iced::widget::{Column, Row, button, canvas, column, container, progress_bar, row, text};
use iced::{Element, Length, Subscription, Task, Theme};

use crate::dial::{Dial, band_color};

pub fn main() -> iced::Result {
    env_logger::init();

    iced::application(FaucetApp::default, FaucetApp::update, FaucetApp::view)
        .title("Bathroom Faucet - Remote")
        .subscription(FaucetApp::subscription)
        .theme(FaucetApp::theme)
        .run()
}

struct FaucetApp {
    session: DialSession,
    catalog: PresetCatalog,
    dark_mode: bool,
    status_message: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Dial
    Gesture {
        center: (f32, f32),
        pointer: (f32, f32),
    },
    StepValue(i32),

    // Buttons
    PowerToggle,
    SelectPreset(PresetId),

    // Timer
    AddMinute,
    TimerPauseToggle,
    Tick,

    // Appearance
    ToggleTheme,

    // Keyboard event
    KeyboardEvent(KeyboardEvent),
}

impl Default for FaucetApp {
    fn default() -> Self {
        Self {
            session: DialSession::default(),
            catalog: PresetCatalog::builtin(),
            dark_mode: false,
            status_message: None,
        }
    }
}

impl FaucetApp {
    fn update(&mut self, message: Message) -> Task<Message> {
        let was_on = self.session.get_dial_state().power_on;

        match message {
            Message::Gesture { center, pointer } => {
                self.session.set_dial_center(center.0, center.1);
                self.session.on_gesture(pointer.0, pointer.1);
            }

            Message::StepValue(delta) => self.session.on_step_value(delta),

            Message::PowerToggle => self.session.on_power_toggle(),

            Message::SelectPreset(id) => self.session.on_preset_select(id.as_str()),

            Message::AddMinute => self.session.on_add_minute(),

            Message::TimerPauseToggle => self.session.on_timer_pause_toggle(),

            Message::Tick => {
                self.session.on_timer_tick();
                let state = self.session.get_dial_state();
                if was_on && !state.power_on && state.timer.is_terminal() {
                    self.status_message = Some("Timer finished - water off".to_string());
                }
                return Task::none();
            }

            Message::ToggleTheme => self.dark_mode = !self.dark_mode,

            Message::KeyboardEvent(event) => {
                if let KeyboardEvent::KeyPressed { key, .. } = event {
                    match key.as_ref() {
                        Key::Named(Named::ArrowUp) | Key::Named(Named::ArrowRight) => {
                            return self.update(Message::StepValue(1));
                        }
                        Key::Named(Named::ArrowDown) | Key::Named(Named::ArrowLeft) => {
                            return self.update(Message::StepValue(-1));
                        }
                        Key::Named(Named::Space) => {
                            return self.update(Message::PowerToggle);
                        }
                        Key::Character("t") => {
                            return self.update(Message::AddMinute);
                        }
                        _ => {}
                    }
                }
                return Task::none();
            }
        }

        // Any direct action replaces the last notice
        self.status_message = None;
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let state = self.session.get_dial_state();
        let config = *self.session.config();
        let band = self.session.band();

        let header = row![
            text("Bathroom Faucet").size(24).width(Length::Fill),
            button(text(if self.dark_mode { "Light" } else { "Dark" }))
                .on_press(Message::ToggleTheme),
        ]
        .spacing(10);

        let status = text(self.status_message.clone().unwrap_or_default()).size(14);

        let readout = if state.power_on {
            text(format!("{}°  {}", state.value, band.label()))
                .size(32)
                .color(band_color(band))
        } else {
            text("Off").size(32)
        };

        let gauge = canvas(Dial {
            state,
            config,
            angle: self.session.dial_angle(),
        })
        .width(Length::Fixed(280.0))
        .height(Length::Fixed(280.0));

        let controls = row![
            button(text("-")).on_press(Message::StepValue(-1)),
            button(text(if state.power_on { "Power off" } else { "Power on" }))
                .on_press(Message::PowerToggle),
            button(text("+")).on_press(Message::StepValue(1)),
        ]
        .spacing(10);

        let timer = &state.timer;
        let pause_button = button(text(if timer.running { "Pause" } else { "Resume" }));
        let pause_button = if timer.total_secs > 0 && !timer.is_terminal() {
            pause_button.on_press(Message::TimerPauseToggle)
        } else {
            pause_button
        };
        let timer_section = column![
            row![
                text(format!("Timer {}", timer.remaining_label())).size(16),
                button(text("+1 min")).on_press(Message::AddMinute),
                pause_button,
            ]
            .spacing(10),
            progress_bar(0.0..=1.0, timer.progress()),
        ]
        .spacing(5);

        let content = column![
            header,
            status,
            readout,
            gauge,
            controls,
            timer_section,
            text("Presets").size(16),
            self.preset_grid(),
            text("Shortcuts: arrows (temperature) | space (power) | t (+1 min)").size(12),
        ]
        .spacing(15)
        .padding(20);

        container(content).into()
    }

    fn preset_grid(&self) -> Element<'_, Message> {
        let state = self.session.get_dial_state();
        let rows = self.catalog.all().chunks(2).map(|pair| {
            Row::with_children(pair.iter().map(|preset| {
                let selected = state.is_selected(preset.id);
                let tile = button(
                    column![
                        text(preset.display_mode.icon_name()).size(11),
                        text(preset.label).size(16),
                        text(format!(
                            "{}° · {}",
                            preset.value,
                            if selected { "Active" } else { "Inactive" }
                        ))
                        .size(12),
                    ]
                    .spacing(4),
                )
                .width(Length::Fill)
                .on_press(Message::SelectPreset(preset.id));
                let tile = if selected {
                    tile.style(button::primary)
                } else {
                    tile.style(button::secondary)
                };
                tile.into()
            }))
            .spacing(10)
            .into()
        });

        Column::with_children(rows).spacing(10).into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let keys = keyboard::listen().map(Message::KeyboardEvent);

        // The tick source only exists while the countdown runs
        let timer = self.session.get_dial_state().timer;
        if timer.running {
            let ticks = iced::time::every(self.session.config().tick_period).map(|_| Message::Tick);
            Subscription::batch([keys, ticks])
        } else {
            keys
        }
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
