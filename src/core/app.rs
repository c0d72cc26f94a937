use std::path::PathBuf;

use crate::config::FloorwatchConfig;
use crate::domain::{Machine, ViewMode};
use crate::export;
use crate::fl;
use crate::session::messages::{self, ExportOutcome};
use crate::session::{Effect, Session};
use crate::widget::floor_map::{FloorMap, MapEvent};
use crate::widget::{assign_dialog, details_panel, machine_table, status_bar, toolbar};
use cosmic::Task;
use cosmic::iced::{Limits, Size};
use cosmic::iced_core::{ContentFit, Length};
use cosmic::iced_widget::{canvas, column, row, stack};
use cosmic::widget::{divider, image};
use cosmic::{app, iced_futures::Subscription, iced_futures::event::listen_with};

pub fn run() -> cosmic::iced::Result {
    let settings = cosmic::app::Settings::default()
        .size(Size::new(1400.0, 900.0))
        .size_limits(Limits::NONE.min_width(800.0).min_height(560.0));
    cosmic::app::run::<App>(settings, ())
}

pub struct App {
    core: app::Core,
    session: Session,
    config: FloorwatchConfig,
}

#[derive(Debug, Clone)]
pub enum Msg {
    Session(messages::Msg),
    Keyboard(cosmic::iced::keyboard::Event),
}

impl App {
    fn map_event(event: MapEvent) -> messages::Msg {
        match event {
            MapEvent::Click(x, y) => messages::Msg::map_click(x, y),
            MapEvent::DrawStart(x, y) => messages::Msg::draw_start(x, y),
            MapEvent::DrawMove(x, y) => messages::Msg::draw_move(x, y),
            MapEvent::DrawEnd(x, y) => messages::Msg::draw_end(x, y),
            MapEvent::DrawRelease => messages::Msg::draw_release(),
        }
    }

    fn map_view(&self) -> cosmic::Element<'_, messages::Msg> {
        let program = FloorMap::new(&self.session, Self::map_event);
        let map = canvas::Canvas::new(program)
            .width(Length::Fill)
            .height(Length::Fill);

        let background = image::Image::new(image::Handle::from_path(&self.config.floor_plan_path))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill);

        stack![background, map].into()
    }

    fn run_effect(&mut self, effect: Effect) -> Task<Msg> {
        match effect {
            Effect::Export => {
                let machines = self.session.registry.machines().to_vec();
                let file_name = self.config.export_file_name.clone();
                cosmic::Task::perform(export_dialog(machines, file_name), |outcome| {
                    Msg::Session(messages::Msg::export_finished(outcome))
                })
            }
            Effect::SaveSettings => {
                self.config.show_flows = self.session.ui.show_flows;
                self.config.hide_dimmed = self.session.ui.hide_dimmed;
                self.config.save();
                Task::none()
            }
        }
    }
}

/// Ask for a destination and write the registry there
async fn export_dialog(machines: Vec<Machine>, file_name: String) -> ExportOutcome {
    let Some(handle) = rfd::AsyncFileDialog::new()
        .set_title(fl!("export-dialog-title"))
        .set_directory(export::default_dir())
        .set_file_name(file_name)
        .add_filter("JSON", &["json"])
        .save_file()
        .await
    else {
        return ExportOutcome::Cancelled;
    };

    let path: PathBuf = handle.path().to_path_buf();
    match export::write(&path, &machines).await {
        Ok(()) => ExportOutcome::Saved(path),
        Err(err) => ExportOutcome::Failed(format!("{err:#}")),
    }
}

impl cosmic::Application for App {
    type Executor = cosmic::executor::Default;

    type Flags = ();

    type Message = Msg;

    const APP_ID: &'static str = FloorwatchConfig::ID;

    fn core(&self) -> &app::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut app::Core {
        &mut self.core
    }

    fn init(
        core: app::Core,
        _flags: Self::Flags,
    ) -> (Self, cosmic::iced::Task<cosmic::Action<Self::Message>>) {
        let config = FloorwatchConfig::load();
        let session = Session::new(&config);
        log::info!(
            "Loaded {} machines, floor plan {}",
            session.registry.len(),
            config.floor_plan_path
        );

        (
            Self {
                core,
                session,
                config,
            },
            cosmic::iced::Task::none(),
        )
    }

    fn view(&self) -> cosmic::Element<'_, Self::Message> {
        let cosmic_theme = self.core.system_theme().cosmic();
        let space_s = cosmic_theme.spacing.space_s;
        let space_xs = cosmic_theme.spacing.space_xs;
        let session = &self.session;

        let main: cosmic::Element<'_, messages::Msg> = match session.view.view_mode {
            ViewMode::Map => self.map_view(),
            ViewMode::Table => machine_table::view(session, space_s),
        };

        let mut body = row![main].spacing(space_s).height(Length::Fill);
        if let Some(panel) = details_panel::view(session, space_s) {
            body = body.push(panel);
        }

        let content: cosmic::Element<'_, messages::Msg> = column![
            toolbar::view(session, space_s, space_xs),
            divider::horizontal::default(),
            body,
            divider::horizontal::default(),
            status_bar::view(session, space_s),
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

        let page = match assign_dialog::overlay(session, space_s) {
            Some(dialog) => stack![content, dialog].into(),
            None => content,
        };
        page.map(Msg::Session)
    }

    fn update(
        &mut self,
        message: Self::Message,
    ) -> cosmic::iced::Task<cosmic::Action<Self::Message>> {
        let msg = match message {
            Msg::Keyboard(cosmic::iced::keyboard::Event::KeyPressed {
                key, modifiers, ..
            }) => {
                match crate::session::shortcuts::handle_key_event(&self.session, key, modifiers) {
                    Some(msg) => msg,
                    None => return Task::none(),
                }
            }
            Msg::Keyboard(_) => return Task::none(),
            Msg::Session(msg) => msg,
        };

        match crate::session::update(&mut self.session, msg) {
            Some(effect) => self.run_effect(effect).map(cosmic::Action::App),
            None => Task::none(),
        }
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        listen_with(|e, _, _| match e {
            cosmic::iced_core::Event::Keyboard(keyboard_event) => {
                Some(Msg::Keyboard(keyboard_event))
            }
            _ => None,
        })
    }
}
