// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the sign-in screen and
//! the role dashboards.
//!
//! The `App` struct owns the active [`Page`] and replaces it on every
//! navigation, so toasts and busy buttons never leak from one screen into
//! the next. Requests to the scheduling service run as `Task`s tagged with
//! the generation of the page that started them; a completion whose page has
//! since been replaced is dropped.

pub mod backend;
mod message;
pub mod page;
pub mod paths;
mod screen;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use page::Page;
pub use screen::{Role, Screen};

use crate::config::{self, Config};
use crate::diagnostics::{BufferCapacity, DiagnosticsCollector, UserAction};
use crate::i18n::fluent::I18n;
use crate::ui::busy::ControlId;
use crate::ui::notifications::{Kind, NotificationMessage, Settings};
use crate::ui::theming::ThemeMode;
use backend::Session;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

/// Values typed into the sign-in form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    form: LoginForm,
    session: Option<Session>,
    /// Result of the last dashboard refresh.
    free_slots: Option<usize>,
    page: Page,
    /// Bumped on every navigation.
    generation: u64,
    theme_mode: ThemeMode,
    toast_settings: Settings,
    diagnostics: DiagnosticsCollector,
    /// Simulated round-trip time of backend requests.
    latency: Duration,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("signed_in", &self.session.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 480;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let i18n = I18n::default();
        let diagnostics = DiagnosticsCollector::default();
        let toast_settings = Settings::default();
        let page = Page::login(&i18n, toast_settings.clone(), Some(diagnostics.handle()));
        Self {
            i18n,
            screen: Screen::Login,
            form: LoginForm::default(),
            session: None,
            free_slots: None,
            page,
            generation: 0,
            theme_mode: ThemeMode::System,
            toast_settings,
            diagnostics,
            latency: backend::DEFAULT_LATENCY,
        }
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let app = Self::with_config(flags.lang, &config, config_warning);
        (app, Task::none())
    }

    /// Builds the application from an already loaded configuration.
    ///
    /// `config_warning` is an i18n key shown as a warning toast on the first
    /// page.
    pub fn with_config(
        lang: Option<String>,
        config: &Config,
        config_warning: Option<String>,
    ) -> Self {
        let i18n = I18n::new(lang, config);
        let diagnostics =
            DiagnosticsCollector::new(BufferCapacity::new(config.diagnostics.buffer_capacity));
        let toast_settings = Settings::from_config(&config.notifications);
        let page = Page::login(&i18n, toast_settings.clone(), Some(diagnostics.handle()));

        let mut app = Self {
            i18n,
            screen: Screen::Login,
            form: LoginForm::default(),
            session: None,
            free_slots: None,
            page,
            generation: 0,
            theme_mode: config.general.theme_mode,
            toast_settings,
            diagnostics,
            latency: backend::DEFAULT_LATENCY,
        };

        if let Some(key) = config_warning {
            let message = app.i18n.tr(&key);
            app.page.notify(message, Kind::Warning);
        }

        app
    }

    /// Overrides the simulated backend latency.
    pub fn set_latency(&mut self, latency: Duration) {
        self.latency = latency;
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let screen_title = match self.screen {
            Screen::Login => self.i18n.tr("login-title"),
            Screen::Dashboard(role) => {
                let role_name = self.i18n.tr(role.i18n_key());
                self.i18n
                    .tr_with_args("dashboard-title", &[("role", role_name.as_str())])
            }
        };
        format!("{screen_title} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.page.needs_ticks())
    }

    /// Tears down the current page and builds the one for `screen`.
    fn navigate(&mut self, screen: Screen) {
        self.page.teardown();
        self.diagnostics
            .handle()
            .log_navigation(self.screen.name(), screen.name());

        let handle = Some(self.diagnostics.handle());
        let settings = self.toast_settings.clone();
        self.page = match screen {
            Screen::Login => Page::login(&self.i18n, settings, handle),
            Screen::Dashboard(_) => Page::dashboard(&self.i18n, settings, handle),
        };
        self.screen = screen;
        self.generation += 1;
    }

    /// Whether a request result belongs to the page currently shown.
    fn is_current(&self, generation: u64, control: &ControlId) -> bool {
        if generation != self.generation {
            log::debug!("dropping {control} result from replaced page {generation}");
            return false;
        }
        self.page.is_busy(control)
    }

    fn warn(&mut self, key: &str) {
        let message = self.i18n.tr(key);
        self.page.notify(message, Kind::Warning);
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::EmailChanged(email) => {
                self.form.email = email;
                Task::none()
            }
            Message::PasswordChanged(password) => {
                self.form.password = password;
                Task::none()
            }
            Message::RoleSelected(role) => {
                self.form.role = role;
                Task::none()
            }
            Message::SubmitLogin => self.submit_login(),
            Message::LoginFinished { generation, result } => {
                let submit = ControlId::new(page::LOGIN_SUBMIT);
                if !self.is_current(generation, &submit) {
                    return Task::none();
                }
                self.page.clear_busy(&submit);

                match result {
                    Ok(session) => {
                        let message = self.i18n.tr_with_args(
                            "notification-signed-in",
                            &[("email", session.email.as_str())],
                        );
                        self.form.password.clear();
                        self.free_slots = None;
                        self.navigate(Screen::Dashboard(session.role));
                        self.session = Some(session);
                        self.page.notify(message, Kind::Success);
                    }
                    Err(err) => {
                        let message = self.i18n.tr(err.i18n_key());
                        self.page.notify(message, Kind::Error);
                    }
                }
                Task::none()
            }
            Message::SaveAvailability => {
                let save = ControlId::new(page::SAVE_AVAILABILITY);
                if !matches!(self.screen, Screen::Dashboard(_)) || self.page.is_busy(&save) {
                    return Task::none();
                }
                let label = self.i18n.tr("dashboard-saving");
                self.page.set_busy(&save, label);
                self.diagnostics
                    .handle()
                    .log_action(UserAction::SaveAvailability);
                let generation = self.generation;
                Task::perform(backend::save_availability(self.latency), move |()| {
                    Message::AvailabilitySaved { generation }
                })
            }
            Message::AvailabilitySaved { generation } => {
                let save = ControlId::new(page::SAVE_AVAILABILITY);
                if !self.is_current(generation, &save) {
                    return Task::none();
                }
                self.page.clear_busy(&save);
                let message = self.i18n.tr("notification-availability-saved");
                self.page.notify(message, Kind::Success);
                Task::none()
            }
            Message::Refresh => {
                let refresh = ControlId::new(page::REFRESH);
                let Screen::Dashboard(role) = self.screen else {
                    return Task::none();
                };
                if self.page.is_busy(&refresh) {
                    return Task::none();
                }
                let label = self.i18n.tr("dashboard-refreshing");
                self.page.set_busy(&refresh, label);
                self.diagnostics
                    .handle()
                    .log_action(UserAction::RefreshDashboard);
                let generation = self.generation;
                Task::perform(
                    backend::refresh_free_slots(role, self.latency),
                    move |count| Message::Refreshed { generation, count },
                )
            }
            Message::Refreshed { generation, count } => {
                let refresh = ControlId::new(page::REFRESH);
                if !self.is_current(generation, &refresh) {
                    return Task::none();
                }
                self.page.clear_busy(&refresh);
                self.free_slots = Some(count);
                if count == 0 {
                    self.warn("notification-no-free-slots");
                } else {
                    let count = count.to_string();
                    let message = self
                        .i18n
                        .tr_with_args("notification-free-slots", &[("count", count.as_str())]);
                    self.page.notify(message, Kind::Info);
                }
                Task::none()
            }
            Message::SignOut => {
                if !matches!(self.screen, Screen::Dashboard(_)) {
                    return Task::none();
                }
                self.diagnostics.handle().log_action(UserAction::SignOut);
                self.session = None;
                self.free_slots = None;
                self.navigate(Screen::Login);
                let message = self.i18n.tr("notification-signed-out");
                self.page.notify(message, Kind::Info);
                Task::none()
            }
            Message::Notification(notification_message) => {
                if matches!(notification_message, NotificationMessage::Dismiss(_)) {
                    self.diagnostics.handle().log_action(UserAction::DismissToast);
                }
                self.page.handle_notification(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                self.page.tick(now);
                self.diagnostics.process_pending();
                Task::none()
            }
        }
    }

    fn submit_login(&mut self) -> Task<Message> {
        let submit = ControlId::new(page::LOGIN_SUBMIT);
        if self.screen != Screen::Login || self.page.is_busy(&submit) {
            return Task::none();
        }

        let email = self.form.email.trim().to_string();
        if email.is_empty() || self.form.password.is_empty() {
            self.warn("notification-fill-fields");
            return Task::none();
        }
        if !email.contains('@') {
            self.warn("notification-invalid-email");
            return Task::none();
        }

        let label = self.i18n.tr("login-signing-in");
        self.page.set_busy(&submit, label);
        self.diagnostics.handle().log_action(UserAction::SignIn);

        let generation = self.generation;
        Task::perform(
            backend::sign_in(
                email,
                self.form.password.clone(),
                self.form.role,
                self.latency,
            ),
            move |result| Message::LoginFinished { generation, result },
        )
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            form: &self.form,
            session: self.session.as_ref(),
            free_slots: self.free_slots,
            page: &self.page,
            now: Instant::now(),
        })
    }
}
