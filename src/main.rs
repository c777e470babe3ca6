//! AccessDesk
//!
//! Main application entry point: loads configuration, bootstraps the
//! session directory from the backend, and logs a summary of the
//! authenticated user's groups and pending approvals.

use tracing::{error, info};

use AccessDesk::{
    config::Settings,
    directory,
    services::ServiceFactory,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    logging::init_logging(&settings.logging)?;

    info!("Starting AccessDesk {}", AccessDesk::VERSION);

    // Initialize services
    let services = ServiceFactory::new(&settings)?;

    // Bootstrap the session directory; a failure here routes back to login
    let directory = match services.bootstrap.load().await {
        Ok(directory) => directory,
        Err(e) => {
            error!(error = %e, "Session bootstrap failed, returning to login");
            return Err(e.into());
        }
    };

    let current_user = settings.session.current_user;
    let mine = directory.my_groups(current_user);
    let pending = directory.pending_approvals(current_user);

    info!(
        user_id = current_user,
        groups = directory.all_groups().len(),
        my_groups = mine.len(),
        pending_approvals = pending.len(),
        "Session ready"
    );

    for group in mine {
        info!(
            group_id = group.id,
            name = %group.name,
            role = %directory::classify(current_user, group),
            owners = %directory::display_owners(group, current_user, &directory),
            "Group"
        );
    }

    Ok(())
}
