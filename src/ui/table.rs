//! Table and launch-status rendering.

use console::{style, Term};

use crate::{
    launcher::{AppLaunchState, LaunchObserver},
    store::{Application, Environment},
    support::errors::RegistryError,
};

/// Print each environment with its apps in launch order.
///
/// Expects apps pre-sorted (as returned by the registry's listing).
pub fn render_environment_list(environments: &[Environment]) {
    for env in environments {
        println!("{}", style(&env.name).blue().bold());
        for (index, app) in env.apps.iter().enumerate() {
            println!(
                "  {}. {} ({})",
                index + 1,
                style(&app.name).cyan(),
                app.launch_order
            );
        }
        println!();
    }
}

/// Print an Order/App/Path table for one environment's apps.
pub fn render_app_table(apps: &[Application]) {
    if apps.is_empty() {
        return;
    }
    let mut rows = format_app_rows(apps).into_iter();
    if let Some(header) = rows.next() {
        println!("{}", style(header).dim());
    }
    for row in rows {
        println!("{row}");
    }
    println!();
}

fn format_app_rows(apps: &[Application]) -> Vec<String> {
    let name_width = apps
        .iter()
        .map(|app| app.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("App".len());

    let mut rows = Vec::with_capacity(apps.len() + 1);
    rows.push(format!("{:<5}  {:<name_width$}  {}", "Order", "App", "Path"));
    for app in apps {
        rows.push(format!(
            "{:<5}  {:<name_width$}  {}",
            app.launch_order, app.name, app.route
        ));
    }
    rows
}

/// Renders launch progress incrementally: one row per app, written when the
/// app enters `Starting` and rewritten in place with the terminal state.
pub struct LaunchRenderer {
    term: Term,
    name_width: usize,
}

impl LaunchRenderer {
    pub fn new(environment: &Environment) -> Self {
        let name_width = environment
            .apps
            .iter()
            .map(|app| app.name.chars().count())
            .max()
            .unwrap_or(0);
        Self {
            term: Term::stdout(),
            name_width,
        }
    }

    fn row(&self, app: &str, label: &str) -> String {
        format!("  {:<width$}  {label}", app, width = self.name_width)
    }
}

impl LaunchObserver for LaunchRenderer {
    fn app_state(&mut self, app: &str, state: &AppLaunchState) {
        match state {
            AppLaunchState::Starting => {
                let _ = self
                    .term
                    .write_str(&self.row(app, &state_label(state)));
            }
            terminal => {
                let _ = self.term.clear_line();
                let _ = self.term.write_line(&self.row(app, &state_label(terminal)));
            }
        }
    }

    fn pointer_update_failed(&mut self, error: &RegistryError) {
        let _ = self.term.write_line(
            &style(format!("could not update last-used environment: {error}"))
                .red()
                .to_string(),
        );
    }
}

fn state_label(state: &AppLaunchState) -> String {
    match state {
        AppLaunchState::Starting => style("starting...").yellow().to_string(),
        AppLaunchState::Started => style("started").green().to_string(),
        AppLaunchState::SkippedMissingPath => {
            style("skipped: no path configured").yellow().to_string()
        }
        AppLaunchState::FileNotFound => style("error: file not found").red().to_string(),
        AppLaunchState::LaunchError { message } => style(format!("error: {message}")).red().to_string(),
    }
}
