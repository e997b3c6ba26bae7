//! Dashboard subcommand handlers.

use std::sync::Arc;

use tracing::info;

use dashboard_config::{ConfigSource, ConfigValidator, FileConfigSource};
use dashboard_core::{DashboardError, DashboardManager, ServiceLocator};

use crate::cli::Commands;
use crate::descriptor::{DescriptorFactory, WidgetDescriptor};

/// Handle a dashboard subcommand.
pub(crate) fn handle_command(
    command: Commands,
    config_dir: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = FileConfigSource::new(config_dir);
    info!("Config directory: {}", source.root().display());

    match command {
        Commands::List { name } => dashboard_list(source, &name),
        Commands::Show { name, widget_id } => dashboard_show(source, &name, &widget_id),
        Commands::Validate { name } => dashboard_validate(&source, &name),
    }
}

/// Build the named dashboard with descriptor widgets.
fn build(source: FileConfigSource, name: &str) -> Result<DashboardManager, DashboardError> {
    let source: Arc<dyn ConfigSource> = Arc::new(source);
    let services = Arc::new(ServiceLocator::new(Arc::new(DescriptorFactory)));
    DashboardManager::new(name, source, services)
}

/// Print the ids of every widget in a dashboard.
fn dashboard_list(
    source: FileConfigSource,
    name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let manager = build(source, name)?;

    for id in manager.widget_ids() {
        println!("{}", id);
    }
    Ok(())
}

/// Print one widget as pretty JSON.
fn dashboard_show(
    source: FileConfigSource,
    name: &str,
    widget_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let manager = build(source, name)?;
    let widget = manager.get_widget(widget_id)?;

    let descriptor = widget
        .as_any()
        .downcast_ref::<WidgetDescriptor>()
        .ok_or_else(|| format!("Widget {} is not a descriptor", widget_id))?;

    println!("{}", serde_json::to_string_pretty(descriptor)?);
    Ok(())
}

/// Report validation warnings for a configuration.
fn dashboard_validate(
    source: &FileConfigSource,
    name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = source.read(name)?;
    let result = ConfigValidator::validate(&config);

    for warning in &result.warnings {
        println!("warning: {}", warning);
    }

    println!(
        "{}: {} widget(s), {} warning(s)",
        name,
        config.widgets.len(),
        result.warnings.len()
    );
    Ok(())
}
