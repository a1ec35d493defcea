//! `uninotas auth` commands - local account session

use serde_json::json;

use crate::commands::dispatch::CommandContext;
use crate::commands::format::print_json_status;
use crate::output_by_format_result;
use uninotas_core::error::{Result, UninotasError};
use uninotas_core::identity::{IdentityProvider, Session, User};

fn print_user(ctx: &CommandContext, status: &str, message: &str, user: &User) -> Result<()> {
    output_by_format_result!(ctx.cli.format,
        json => print_json_status(status, Some(message), &[("user", serde_json::to_value(user)?)]),
        human => {
            if !ctx.cli.quiet {
                println!("{}: {}", message, user.email);
            }
        }
    )
}

fn print_status(ctx: &CommandContext, message: &str) -> Result<()> {
    output_by_format_result!(ctx.cli.format,
        json => print_json_status("ok", Some(message), &[]),
        human => {
            if !ctx.cli.quiet {
                println!("{}", message);
            }
        }
    )
}

pub fn signup(ctx: &CommandContext, email: &str, password: &str) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    let user = store.identity().sign_up(email, password)?;
    print_user(ctx, "created", "Cuenta creada", &user)
}

pub fn login(ctx: &CommandContext, email: &str, password: &str) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    let user = store.identity().sign_in(email, password)?;
    print_user(ctx, "signed_in", "Sesión iniciada", &user)
}

pub fn logout(ctx: &CommandContext) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    store.identity().sign_out()?;
    print_status(ctx, "Sesión cerrada")
}

pub fn guest(ctx: &CommandContext) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    store.identity().continue_as_guest()?;
    print_status(ctx, "Continuando como invitado")
}

pub fn whoami(ctx: &CommandContext) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    let session = store.identity().session()?;

    output_by_format_result!(ctx.cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&json!({ "session": session }))?);
            Ok::<(), UninotasError>(())
        },
        human => {
            match &session {
                Session::SignedIn(user) => println!("{}", user.email),
                Session::Guest => println!("Invitado"),
                Session::SignedOut => println!("Sin sesión"),
            }
        }
    )
}
