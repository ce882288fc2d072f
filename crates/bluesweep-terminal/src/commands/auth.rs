//! Account commands

use anyhow::Result;
use bluesweep_app::screens::{LoginAction, ProfileAction};
use bluesweep_app::{AppCore, Intent};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum AuthCommand {
    /// Create an account and sign in
    SignUp {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign in to an existing account
    SignIn {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out
    SignOut,
    /// Send a password reset email
    ResetPassword {
        #[arg(long)]
        email: String,
    },
}

pub async fn run(app: &mut AppCore, cmd: AuthCommand) -> Result<()> {
    match cmd {
        AuthCommand::SignUp { email, password } => {
            fill_form(app, email, password).await?;
            login(app, LoginAction::SignUp).await?;
        }
        AuthCommand::SignIn { email, password } => {
            fill_form(app, email, password).await?;
            login(app, LoginAction::SignIn).await?;
        }
        AuthCommand::SignOut => {
            if app.session().is_none() {
                println!("Not signed in");
                return Ok(());
            }
            app.dispatch(Intent::Profile(ProfileAction::Logout)).await?;
        }
        AuthCommand::ResetPassword { email } => {
            login(app, LoginAction::OpenResetDialog).await?;
            login(app, LoginAction::SetResetEmail(email)).await?;
            login(app, LoginAction::SendReset).await?;
        }
    }

    if let Some(user) = app.session() {
        println!("Signed in as {}", user.email);
    }
    Ok(())
}

async fn fill_form(app: &mut AppCore, email: String, password: String) -> Result<()> {
    login(app, LoginAction::SetEmail(email)).await?;
    login(app, LoginAction::SetPassword(password)).await
}

async fn login(app: &mut AppCore, action: LoginAction) -> Result<()> {
    app.dispatch(Intent::Login(action)).await?;
    Ok(())
}
