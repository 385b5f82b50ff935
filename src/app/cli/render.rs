//! Render command implementation.

use std::io::IsTerminal;

use dialoguer::Select;

use crate::app::api::{self, RenderOptions};
use crate::app::config::SessionInputs;
use crate::domain::{AppError, Role};

pub fn run_render(
    role: Role,
    name: Option<String>,
    session: SessionInputs,
    args_override: Option<Vec<String>>,
) -> Result<(), AppError> {
    let name = match name {
        Some(name) => name,
        None => match prompt_method(role)? {
            Some(name) => name,
            None => return Ok(()),
        },
    };

    let command = api::render(RenderOptions { role, name, session, args_override })?;
    println!("{}", command);
    Ok(())
}

fn prompt_method(role: Role) -> Result<Option<String>, AppError> {
    if !std::io::stdin().is_terminal() || !std::io::stderr().is_terminal() {
        return Err(AppError::Selection(
            "No install method given. Pass --name or run interactively.".to_string(),
        ));
    }

    let options = api::list_options(role);
    let items: Vec<String> =
        options.iter().map(|d| format!("{} [{}]", d.name, d.environment)).collect();

    let selection = Select::new()
        .with_prompt(format!("Select install method for {}", role))
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Selection(format!("Failed to select install method: {}", err)))?;

    Ok(selection.map(|index| options[index].name.to_string()))
}
