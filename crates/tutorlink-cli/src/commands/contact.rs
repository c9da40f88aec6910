use tutorlink_core::contact::tutor_contact_link;

use crate::commands::common::{resolve_tutor, CliContext};
use crate::error::CliError;

pub async fn run_contact(context: &CliContext, id: &str) -> Result<(), CliError> {
    let tutor = resolve_tutor(context, id).await?;
    println!(
        "{}",
        tutor_contact_link(&context.client_config.messaging_base_url, &tutor)
    );
    Ok(())
}
