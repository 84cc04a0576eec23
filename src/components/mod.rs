//! Shared UI components exported for routes.

pub(crate) mod app_shell;
pub(crate) mod otp_input;
pub(crate) mod password_reveal;
pub(crate) mod ui;
pub(crate) mod verify_panel;

pub(crate) use app_shell::AppShell;
pub(crate) use otp_input::OtpInput;
pub(crate) use password_reveal::PasswordReveal;
pub(crate) use ui::{Button, Spinner};
pub(crate) use verify_panel::VerifyPanel;
