//! Command implementations for all uninotas commands

use crate::cli::{AuthCommands, Commands};
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{auth, calc, compare, history, init, remove, validate};
use uninotas_core::error::Result;
use uninotas_core::history::SemesterSelection;

use super::trace_command;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Init => init::execute(ctx),
            Commands::Validate { texts } => validate::execute(ctx.cli, texts),
            Commands::Calc {
                first,
                second,
                save,
                course,
                semester,
            } => {
                let save = save.then(|| calc::SaveOptions {
                    course: course.as_deref(),
                    semester: semester.as_deref(),
                });
                calc::execute(ctx, first, second, save)
            }
            Commands::Auth { command } => execute_auth(ctx, command),
            Commands::History { semester, all } => {
                let selection = match (semester, all) {
                    (_, true) => SemesterSelection::All,
                    (Some(name), false) => SemesterSelection::Named(name.clone()),
                    (None, false) => SemesterSelection::First,
                };
                history::execute(ctx, &selection)
            }
            Commands::Remove { id } => remove::execute(ctx, id),
            Commands::Compare => compare::execute(ctx),
        };

        trace_command!(ctx.cli, ctx.start, "execute_command");
        result
    }
}

fn execute_auth(ctx: &CommandContext, command: &AuthCommands) -> Result<()> {
    match command {
        AuthCommands::Signup { email, password } => auth::signup(ctx, email, password),
        AuthCommands::Login { email, password } => auth::login(ctx, email, password),
        AuthCommands::Logout => auth::logout(ctx),
        AuthCommands::Guest => auth::guest(ctx),
        AuthCommands::Whoami => auth::whoami(ctx),
    }
}
