//! Login screen: sign in, sign up and the reset-password dialog

use serde::{Deserialize, Serialize};

use crate::core::{AuthFlow, Command, UpdateContext};
use crate::navigation::Screen;
use crate::toast::Toast;

/// Client-side password rule checked before sign-up.
pub const MIN_PASSWORD_LEN: usize = 6;

/// "Forgot password" dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordDialog {
    /// Address the reset link goes to
    pub email: String,
}

/// Login screen form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginState {
    /// Email field
    pub email: String,
    /// Password field
    pub password: String,
    /// Open reset dialog
    pub reset_dialog: Option<ResetPasswordDialog>,
    /// Auth request in flight, if any
    pub pending: Option<AuthFlow>,
}

/// Login screen actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoginAction {
    /// Edit the email field
    SetEmail(String),
    /// Edit the password field
    SetPassword(String),
    /// Sign in with the form
    SignIn,
    /// Create an account from the form
    SignUp,
    /// Open the reset dialog
    OpenResetDialog,
    /// Edit the reset dialog's email
    SetResetEmail(String),
    /// Send the reset link
    SendReset,
    /// Close the reset dialog
    CloseResetDialog,
    /// An auth request succeeded
    AuthSucceeded(AuthFlow),
    /// An auth request failed
    AuthFailed {
        /// Request that failed
        flow: AuthFlow,
        /// Provider message, shown verbatim
        message: String,
    },
}

impl LoginState {
    /// Apply an action.
    pub fn update(&mut self, action: LoginAction, _ctx: &UpdateContext) -> Vec<Command> {
        match action {
            LoginAction::SetEmail(email) => {
                self.email = email;
                Vec::new()
            }
            LoginAction::SetPassword(password) => {
                self.password = password;
                Vec::new()
            }
            LoginAction::SignIn => {
                if self.email.trim().is_empty() || self.password.trim().is_empty() {
                    return vec![Command::Toast(Toast::warning(
                        "Email and password cannot be empty",
                    ))];
                }
                self.pending = Some(AuthFlow::SignIn);
                vec![Command::SignIn {
                    email: self.email.trim().to_string(),
                    password: self.password.clone(),
                }]
            }
            LoginAction::SignUp => {
                if self.email.trim().is_empty() || self.password.trim().is_empty() {
                    return vec![Command::Toast(Toast::warning(
                        "Email and password cannot be empty",
                    ))];
                }
                if self.password.chars().count() < MIN_PASSWORD_LEN {
                    return vec![Command::Toast(Toast::warning(
                        "Password must be at least 6 characters long",
                    ))];
                }
                self.pending = Some(AuthFlow::SignUp);
                vec![Command::SignUp {
                    email: self.email.trim().to_string(),
                    password: self.password.clone(),
                }]
            }
            LoginAction::OpenResetDialog => {
                self.reset_dialog = Some(ResetPasswordDialog::default());
                Vec::new()
            }
            LoginAction::SetResetEmail(email) => {
                if let Some(dialog) = &mut self.reset_dialog {
                    dialog.email = email;
                }
                Vec::new()
            }
            LoginAction::SendReset => {
                let Some(dialog) = &self.reset_dialog else {
                    return Vec::new();
                };
                if dialog.email.trim().is_empty() {
                    return vec![Command::Toast(Toast::warning("Email cannot be empty"))];
                }
                self.pending = Some(AuthFlow::PasswordReset);
                vec![Command::SendPasswordReset {
                    email: dialog.email.trim().to_string(),
                }]
            }
            LoginAction::CloseResetDialog => {
                self.reset_dialog = None;
                Vec::new()
            }
            LoginAction::AuthSucceeded(flow) => self.on_success(flow),
            LoginAction::AuthFailed { flow, message } => self.on_failure(flow, &message),
        }
    }

    fn on_success(&mut self, flow: AuthFlow) -> Vec<Command> {
        self.pending = None;
        match flow {
            AuthFlow::SignIn => {
                self.password.clear();
                vec![Command::ResetTo(Screen::Home)]
            }
            AuthFlow::SignUp => {
                self.password.clear();
                vec![Command::ResetTo(Screen::Home), Command::SendEmailVerification]
            }
            AuthFlow::EmailVerification => {
                vec![Command::Toast(Toast::success("Verification email sent"))]
            }
            AuthFlow::PasswordReset => {
                self.reset_dialog = None;
                vec![Command::Toast(Toast::success("Password reset email sent"))]
            }
        }
    }

    fn on_failure(&mut self, flow: AuthFlow, message: &str) -> Vec<Command> {
        self.pending = None;
        let text = match flow {
            AuthFlow::SignIn => format!("Login failed: {message}"),
            AuthFlow::SignUp => format!("Sign-up failed: {message}"),
            AuthFlow::PasswordReset => format!("Failed to send reset email: {message}"),
            AuthFlow::EmailVerification => {
                tracing::warn!(%message, "Verification email failed");
                return Vec::new();
            }
        };
        vec![Command::Toast(Toast::error(text))]
    }
}
