//! Interactive menu flows.
//!
//! Presentation glue over the registry, launcher, and discovery components.
//! Registry errors are rendered as styled messages; none of them end the
//! session.

use std::path::Path;

use anyhow::Result;
use console::style;

use crate::{
    discovery,
    launcher::{DetachedSpawner, Launcher, LaunchSummary},
    registry::EnvironmentRegistry,
    store::{Application, Environment},
    support::errors::RegistryError,
};

pub mod prompt;
pub mod table;

pub use prompt::Console;

use table::{render_app_table, render_environment_list, LaunchRenderer};

const BACK: &str = "Back";
const CANCEL: &str = "Cancel";

/// Run the main menu loop until the user exits.
pub fn run(registry: &EnvironmentRegistry) -> Result<()> {
    let console = Console::new();

    loop {
        let (tutorial, zen_mode) = registry.preferences();
        console.clear();
        if !zen_mode {
            print_banner();
        }
        if tutorial {
            print_welcome();
        }

        let last_used = registry.last_used();
        let init_label = match &last_used {
            Some(name) => format!("Init Last Environment ({name})"),
            None => "Init Last Environment".to_string(),
        };
        let options = [
            init_label.as_str(),
            "Show Environments",
            "Preferences",
            "Exit",
        ];

        match console.ask_choice("Select an option", &options)? {
            0 => match last_used {
                Some(name) => launch_environment(registry, &console, &name),
                None => {
                    println!("{}", style("No environment has been used yet.").yellow());
                    console.pause();
                }
            },
            1 => environments_menu(registry, &console)?,
            2 => preferences_menu(registry, &console)?,
            _ => {
                println!("{}", style("Thanks for using appdeck!").green());
                return Ok(());
            }
        }
    }
}

fn print_banner() {
    println!(
        "{}  {}",
        style("appdeck").blue().bold(),
        style(format!("v{}", env!("CARGO_PKG_VERSION"))).blue().dim()
    );
    println!();
}

fn print_welcome() {
    println!("{}", style("Welcome to appdeck!").bold());
    println!("This tool helps you organize and launch multiple applications together.");
    println!();
    println!("{}", style("Quick guide:").blue());
    println!("  1. Create an environment (a group of apps)");
    println!("  2. Add applications to your environment");
    println!("  3. Initialize the environment to launch all of its apps");
    println!();
}

fn environments_menu(registry: &EnvironmentRegistry, console: &Console) -> Result<()> {
    loop {
        console.clear();
        let environments = registry.list_environments();
        if environments.is_empty() {
            println!(
                "{}",
                style("No environments found. Please add an environment.").blue()
            );
            println!();
        } else {
            render_environment_list(&environments);
        }

        let options = [
            "Initialize Environment",
            "Add Environment",
            "Edit Environment",
            "Delete Environment",
            BACK,
        ];
        match console.ask_choice("Select an option", &options)? {
            0 => {
                if let Some(name) =
                    pick_environment(registry, console, "Select environment to initialize")?
                {
                    launch_environment(registry, console, &name);
                }
            }
            1 => add_environment_flow(registry, console)?,
            2 => edit_environment_flow(registry, console)?,
            3 => delete_environment_flow(registry, console)?,
            _ => return Ok(()),
        }
    }
}

/// Launch every app of the named environment, rendering progress as it
/// happens.
fn launch_environment(registry: &EnvironmentRegistry, console: &Console, name: &str) {
    let environment = match registry.environment(name) {
        Ok(environment) => environment,
        Err(err) => {
            report_error(&err);
            console.pause();
            return;
        }
    };

    println!("{}", style(format!("Launching {}", environment.name)).blue().bold());
    let launcher = Launcher::new(registry, DetachedSpawner);
    let mut renderer = LaunchRenderer::new(&environment);
    match launcher.launch(&environment, &mut renderer) {
        LaunchSummary::NoApps => {
            println!(
                "{}",
                style("No apps found in the selected environment.").red()
            );
        }
        LaunchSummary::Completed { .. } => {}
    }
    console.pause();
}

fn add_environment_flow(registry: &EnvironmentRegistry, console: &Console) -> Result<()> {
    console.clear();
    let name = console.ask_text("Name your environment")?;

    println!();
    println!("{}", style("Add apps to the environment").blue());
    let mut apps: Vec<Application> = Vec::new();
    loop {
        match console.ask_choice("What would you like to do?", &["Add App", "Finish"])? {
            0 => {
                let default_order = apps
                    .iter()
                    .map(|app| app.launch_order)
                    .fold(0, i32::max)
                    .saturating_add(1);
                if let Some(app) = prompt_new_app(console, default_order)? {
                    println!("{}", style(format!("Added app: {}", app.name)).green());
                    apps.push(app);
                }
            }
            _ => break,
        }
    }

    let count = apps.len();
    match registry.add_environment(&name, apps) {
        Ok(()) => println!(
            "{}",
            style(format!("Environment '{name}' added with {count} apps!")).green()
        ),
        Err(err) => report_error(&err),
    }
    console.pause();
    Ok(())
}

/// Ask for one app: name first, then a discovery-backed path picker with a
/// manual fallback, then the launch order. Returns `None` when the user backs
/// out.
fn prompt_new_app(console: &Console, default_order: i32) -> Result<Option<Application>> {
    let name = console.ask_text("App name (type 0 to go back)")?;
    if name.trim() == "0" {
        return Ok(None);
    }

    let matches = discovery::suggest(&name);
    let mut route: Option<String> = None;
    if !matches.is_empty() {
        let mut choices = vec!["Enter path manually".to_string(), BACK.to_string()];
        choices.extend(
            matches
                .iter()
                .map(|found| format!("{} ({})", found.name, found.path.display())),
        );
        let picked = console.ask_choice("Select application path", &choices)?;
        if picked == 1 {
            return Ok(None);
        }
        if picked >= 2 {
            route = Some(matches[picked - 2].path.display().to_string());
        }
    }

    let route = match route {
        Some(route) => route,
        None => {
            println!("We couldn't find the path for {name}, please enter it manually");
            let typed = console.ask_text("App path (type 0 to go back)")?;
            if typed.trim() == "0" {
                return Ok(None);
            }
            typed
        }
    };

    if !Path::new(&route).is_file() {
        println!(
            "{}",
            style(format!(
                "The file '{route}' does not exist. Please provide a valid path."
            ))
            .red()
        );
        return Ok(None);
    }

    let launch_order = ask_launch_order(console, default_order)?;
    Ok(Some(Application {
        name,
        route,
        launch_order,
    }))
}

fn ask_launch_order(console: &Console, default: i32) -> Result<i32> {
    loop {
        let text = console.ask_text_with_default("Launch order", &default.to_string())?;
        match text.trim().parse::<i32>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("{}", style("Please enter a valid number.").red()),
        }
    }
}

fn edit_environment_flow(registry: &EnvironmentRegistry, console: &Console) -> Result<()> {
    console.clear();
    render_environment_list(&registry.list_environments());
    let Some(name) = pick_environment(registry, console, "Select environment to edit")? else {
        return Ok(());
    };
    let environment = match registry.environment(&name) {
        Ok(environment) => environment,
        Err(err) => {
            report_error(&err);
            console.pause();
            return Ok(());
        }
    };

    println!("{}", style(&environment.name).blue().bold());
    for app in environment.sorted_apps() {
        println!("{} - {}", app.name, style(&app.route).dim());
    }
    println!();

    match console.ask_choice(
        "What would you like to edit?",
        &["Environment Name", "Environment Apps", BACK],
    )? {
        0 => {
            let new_name = console.ask_text("Enter the new environment name")?;
            match registry.rename_environment(&name, &new_name) {
                Ok(()) => println!("{}", style("Environment renamed.").green()),
                Err(err) => report_error(&err),
            }
            console.pause();
        }
        1 => manage_apps_flow(registry, console, &environment.name)?,
        _ => {}
    }
    Ok(())
}

fn manage_apps_flow(
    registry: &EnvironmentRegistry,
    console: &Console,
    env_name: &str,
) -> Result<()> {
    loop {
        // Reload every round so edits made here (or externally) show up.
        let environment = match registry.environment(env_name) {
            Ok(environment) => environment,
            Err(err) => {
                report_error(&err);
                console.pause();
                return Ok(());
            }
        };

        console.clear();
        render_app_table(&environment.sorted_apps());

        match console.ask_choice(
            "Environment Apps",
            &["Add App", "Edit App", "Delete App", BACK],
        )? {
            0 => {
                if let Some(app) = prompt_new_app(console, environment.next_launch_order())? {
                    match registry.add_app(env_name, &app.name, &app.route, Some(app.launch_order))
                    {
                        Ok(added) => {
                            println!("{}", style(format!("Added {} successfully!", added.name)).green());
                        }
                        Err(err) => report_error(&err),
                    }
                    console.pause();
                }
            }
            1 => edit_app_flow(registry, console, &environment)?,
            2 => delete_app_flow(registry, console, &environment)?,
            _ => return Ok(()),
        }
    }
}

fn edit_app_flow(
    registry: &EnvironmentRegistry,
    console: &Console,
    environment: &Environment,
) -> Result<()> {
    let Some(target) = pick_app(console, environment, "Select app to edit")? else {
        return Ok(());
    };
    let Some(current) = environment.app(&target) else {
        return Ok(());
    };

    let new_name = console.ask_text_with_default("New app name", &current.name)?;
    let new_route = console.ask_text_with_default("New app path", &current.route)?;
    let new_order = ask_launch_order(console, current.launch_order)?;

    match registry.update_app(
        &environment.name,
        &target,
        Application {
            name: new_name,
            route: new_route,
            launch_order: new_order,
        },
    ) {
        Ok(()) => println!("{}", style("App updated.").green()),
        Err(err) => report_error(&err),
    }
    console.pause();
    Ok(())
}

fn delete_app_flow(
    registry: &EnvironmentRegistry,
    console: &Console,
    environment: &Environment,
) -> Result<()> {
    let Some(target) = pick_app(console, environment, "Select app to delete")? else {
        return Ok(());
    };

    match registry.remove_app(&environment.name, &target) {
        Ok(()) => println!("{}", style(format!("Deleted {target}.")).green()),
        Err(err) => report_error(&err),
    }
    console.pause();
    Ok(())
}

fn delete_environment_flow(registry: &EnvironmentRegistry, console: &Console) -> Result<()> {
    console.clear();
    render_environment_list(&registry.list_environments());
    let Some(name) = pick_environment(registry, console, "Select environment to delete")? else {
        return Ok(());
    };

    if !console.confirm(&format!("Are you sure you want to delete environment '{name}'?"))? {
        return Ok(());
    }

    match registry.delete_environment(&name) {
        Ok(()) => println!("{}", style("Environment deleted successfully!").green()),
        Err(err) => report_error(&err),
    }
    console.pause();
    Ok(())
}

fn preferences_menu(registry: &EnvironmentRegistry, console: &Console) -> Result<()> {
    console.clear();
    println!(
        "{}",
        style("Preferences are stored in the config file; saving overwrites the previous settings.")
            .yellow()
    );
    println!();

    let (tutorial, zen_mode) = registry.preferences();
    let options = [("Enable Tutorial", tutorial), ("Enable Zen mode", zen_mode)];
    let picked = console.ask_multi_choice("Select Preferences", &options)?;

    if let Err(err) = registry.set_preferences(picked.contains(&0), picked.contains(&1)) {
        report_error(&err);
        console.pause();
    }
    Ok(())
}

/// Selection list over environment names plus a Back row; `None` means back.
fn pick_environment(
    registry: &EnvironmentRegistry,
    console: &Console,
    prompt: &str,
) -> Result<Option<String>> {
    let mut names: Vec<String> = registry
        .list_environments()
        .into_iter()
        .map(|env| env.name)
        .collect();
    if names.is_empty() {
        println!("{}", style("No environments found.").red());
        console.pause();
        return Ok(None);
    }
    names.push(BACK.to_string());

    let picked = console.ask_choice(prompt, &names)?;
    if picked == names.len() - 1 {
        return Ok(None);
    }
    Ok(Some(names.swap_remove(picked)))
}

/// Selection list over an environment's app names plus a Cancel row.
fn pick_app(
    console: &Console,
    environment: &Environment,
    prompt: &str,
) -> Result<Option<String>> {
    if environment.apps.is_empty() {
        println!("{}", style("No apps to work with.").yellow());
        console.pause();
        return Ok(None);
    }

    let mut choices: Vec<String> = environment
        .sorted_apps()
        .into_iter()
        .map(|app| app.name)
        .collect();
    choices.push(CANCEL.to_string());

    let picked = console.ask_choice(prompt, &choices)?;
    if picked == choices.len() - 1 {
        return Ok(None);
    }
    Ok(Some(choices.swap_remove(picked)))
}

fn report_error(error: &RegistryError) {
    println!("{}", style(error.to_string()).red());
}
