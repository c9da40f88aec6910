use tutorlink_core::contact::tutor_contact_link;

use crate::commands::common::{normalize_tutor_id, require_backend, CliContext};
use crate::error::CliError;

/// Record the connection with the backend, then print the messaging link
/// when the tutor is in the current catalog.
pub async fn run_connect(context: &CliContext, id: &str) -> Result<(), CliError> {
    let tutor_id = normalize_tutor_id(id)?;
    let client = require_backend(context)?;

    client.connect(&tutor_id).await?;
    println!("Connection recorded for tutor {tutor_id}");

    match client.list_tutors().await {
        Ok(tutors) => {
            if let Some(tutor) = tutors.iter().find(|tutor| tutor.id == tutor_id) {
                println!(
                    "{}",
                    tutor_contact_link(&context.client_config.messaging_base_url, tutor)
                );
            }
        }
        Err(error) => tracing::warn!("Could not fetch tutor listing after connect: {error}"),
    }

    Ok(())
}
