// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Each screen renders its form or dashboard underneath the page's toast
//! overlay. Buttons are drawn from the page's [`Button`] state so a busy
//! control shows its busy label, a spinner frame and no press handler.

use super::backend::Session;
use super::page::{self, Page};
use super::screen::{Role, Screen};
use super::{LoginForm, Message};
use crate::i18n::fluent::I18n;
use crate::ui::busy::{Control, ControlId};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::Toast;
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length, Theme};
use std::time::Instant;

type ButtonStyle = fn(&Theme, button::Status) -> button::Style;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub form: &'a LoginForm,
    pub session: Option<&'a Session>,
    pub free_slots: Option<usize>,
    pub page: &'a Page,
    pub now: Instant,
}

/// Renders the active screen with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content: Element<'_, Message> = match ctx.screen {
        Screen::Login => view_login(&ctx),
        Screen::Dashboard(role) => view_dashboard(&ctx, role),
    };

    let base = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG);

    Stack::new()
        .push(base)
        .push(Toast::view_overlay(ctx.page.notifications(), ctx.now).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_login<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let form = ctx.form;
    let submitting = ctx.page.is_busy(&ControlId::new(page::LOGIN_SUBMIT));

    let title = Text::new(i18n.tr("login-title")).size(typography::TITLE_LG);

    let email_placeholder = i18n.tr("login-email-placeholder");
    let email = text_input(&email_placeholder, &form.email)
        .on_input(Message::EmailChanged)
        .on_submit(Message::SubmitLogin)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fill);

    let password_placeholder = i18n.tr("login-password-placeholder");
    let password = text_input(&password_placeholder, &form.password)
        .on_input(Message::PasswordChanged)
        .on_submit(Message::SubmitLogin)
        .secure(true)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fill);

    let roles = Role::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, &role| {
            let style: ButtonStyle = if role == form.role {
                styles::button::primary
            } else {
                styles::button::unselected
            };
            let picker = button(Text::new(i18n.tr(role.i18n_key())).size(typography::BODY))
                .on_press_maybe((!submitting).then_some(Message::RoleSelected(role)))
                .padding([spacing::XXS, spacing::SM])
                .style(style);
            row.push(picker)
        });

    let submit = control_button(
        ctx.page,
        page::LOGIN_SUBMIT,
        Message::SubmitLogin,
        ctx.now,
        styles::button::primary,
    );

    let column = Column::new()
        .spacing(spacing::SM)
        .push(title)
        .push(Text::new(i18n.tr("login-email-label")).size(typography::CAPTION))
        .push(email)
        .push(Text::new(i18n.tr("login-password-label")).size(typography::CAPTION))
        .push(password)
        .push(Text::new(i18n.tr("login-role-label")).size(typography::CAPTION))
        .push(roles)
        .push(submit);

    Container::new(column)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .into()
}

fn view_dashboard<'a>(ctx: &ViewContext<'a>, role: Role) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let role_name = i18n.tr(role.i18n_key());

    let mut column = Column::new().spacing(spacing::SM).push(
        Text::new(i18n.tr_with_args("dashboard-title", &[("role", role_name.as_str())]))
            .size(typography::TITLE_LG),
    );

    if let Some(session) = ctx.session {
        column = column.push(
            Text::new(i18n.tr_with_args(
                "dashboard-signed-in-as",
                &[("email", session.email.as_str())],
            ))
            .size(typography::BODY),
        );
    }

    if let Some(count) = ctx.free_slots {
        let count = count.to_string();
        column = column.push(
            Text::new(i18n.tr_with_args("dashboard-free-slots", &[("count", count.as_str())]))
                .size(typography::BODY),
        );
    }

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(control_button(
            ctx.page,
            page::SAVE_AVAILABILITY,
            Message::SaveAvailability,
            ctx.now,
            styles::button::primary,
        ))
        .push(control_button(
            ctx.page,
            page::REFRESH,
            Message::Refresh,
            ctx.now,
            styles::button::unselected,
        ))
        .push(control_button(
            ctx.page,
            page::SIGN_OUT,
            Message::SignOut,
            ctx.now,
            styles::button::unselected,
        ));

    Container::new(column.push(actions))
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .into()
}

/// Renders a page button, prefixing a spinner frame while it is busy.
fn control_button<'a>(
    page: &Page,
    id: &str,
    on_press: Message,
    now: Instant,
    style: ButtonStyle,
) -> Element<'a, Message> {
    let id = ControlId::new(id);
    let Some(control) = page.button(&id) else {
        return Container::new(Text::new("")).into();
    };

    let label = match page.spinner(&id, now) {
        Some(frame) => format!("{frame} {}", control.label()),
        None => control.label().to_string(),
    };

    button(
        Container::new(Text::new(label).size(typography::BODY))
            .height(Length::Fill)
            .align_y(alignment::Vertical::Center),
    )
    .on_press_maybe(control.is_enabled().then_some(on_press))
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding([spacing::XXS, spacing::MD])
    .style(style)
    .into()
}
