//! Interactive prompts for `stencil new`.
//!
//! Compiled behind the `interactive` feature (default on).  Without it,
//! `stencil new` requires the template and name as arguments and these
//! functions report [`CliError::FeatureNotAvailable`].

use crate::error::{CliError, CliResult};

#[cfg(feature = "interactive")]
pub fn select_template(names: &[String]) -> CliResult<String> {
    use dialoguer::Select;

    let index = Select::new()
        .with_prompt("What template would you like to use?")
        .items(names)
        .default(0)
        .interact()
        .map_err(prompt_failed)?;

    Ok(names[index].clone())
}

#[cfg(feature = "interactive")]
pub fn input_project_name() -> CliResult<String> {
    use dialoguer::Input;
    use stencil_core::domain::ScaffoldRequest;

    let name: String = Input::new()
        .with_prompt("Please input a new project name")
        .validate_with(|input: &String| {
            // Same policy as the boundary validation; catching it here gives
            // the user a chance to retype instead of a hard failure.
            ScaffoldRequest::new("placeholder", input)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(prompt_failed)?;

    Ok(name)
}

#[cfg(feature = "interactive")]
fn prompt_failed(e: dialoguer::Error) -> CliError {
    CliError::IoError {
        message: "prompt failed".into(),
        source: std::io::Error::other(e),
    }
}

#[cfg(not(feature = "interactive"))]
pub fn select_template(_names: &[String]) -> CliResult<String> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(not(feature = "interactive"))]
pub fn input_project_name() -> CliResult<String> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
