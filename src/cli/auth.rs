//! Sign-in, sign-out and identity commands

use std::io::{self, BufRead, Write};

use clap::Args;

use super::AppContext;
use crate::auth::{SecretString, Session};
use crate::error::{ExpenseError, ExpenseResult};

#[derive(Args, Debug, Clone, Default)]
pub struct LoginArgs {
    /// Account email (prompted when omitted)
    #[arg(short, long)]
    pub email: Option<String>,

    /// Password (prompted without echo when omitted)
    #[arg(long, env = "EXPENSE_TRACKER_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

pub fn handle_login_command(ctx: &AppContext, args: LoginArgs) -> ExpenseResult<()> {
    let email = match args.email {
        Some(email) => email,
        None => prompt_line("Email: ")?,
    };
    let password = match args.password {
        Some(password) => SecretString::new(password),
        None => prompt_password("Password: ")?,
    };

    let session = ctx.sessions().sign_in(&email, &password)?;

    println!("Welcome back, {}!", session.display_name());
    println!("Signed in as {}", session.email);
    Ok(())
}

pub fn handle_logout_command(ctx: &AppContext) -> ExpenseResult<()> {
    match ctx.sessions().sign_out()? {
        Some(session) => println!("Signed out {}.", session.email),
        None => println!("Not signed in."),
    }
    Ok(())
}

pub fn handle_whoami_command(ctx: &AppContext) -> ExpenseResult<()> {
    let Some(session) = ctx.sessions().current() else {
        println!("Not signed in.");
        print_store(ctx);
        return Ok(());
    };

    print_identity(&session);
    print_store(ctx);
    Ok(())
}

fn print_identity(session: &Session) {
    println!("[{}] {}", session.initials(), session.display_name());
    println!("  Email:   {}", session.email);
    println!("  User ID: {}", session.user_id);
    match session.expires_at {
        Some(at) => println!("  Expires: {}", at.format("%Y-%m-%d %H:%M UTC")),
        None => println!("  Expires: unknown"),
    }
}

fn print_store(ctx: &AppContext) {
    match ctx.open_store() {
        Ok(store) => println!("  Store:   {}", store.name()),
        Err(err) => println!("  Store:   unavailable ({})", err),
    }
}

fn prompt_line(prompt: &str) -> ExpenseResult<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompt for a password (hidden input)
fn prompt_password(prompt: &str) -> ExpenseResult<SecretString> {
    rpassword::prompt_password(prompt)
        .map(SecretString::from)
        .map_err(|e| ExpenseError::Io(format!("Failed to read password: {}", e)))
}
