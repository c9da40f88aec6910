use crate::commands::common::{format_tutor_details, resolve_tutor, tutor_to_list_item, CliContext};
use crate::error::CliError;

pub async fn run_show(context: &CliContext, id: &str, as_json: bool) -> Result<(), CliError> {
    let tutor = resolve_tutor(context, id).await?;
    let messaging_base_url = &context.client_config.messaging_base_url;

    if as_json {
        let item = tutor_to_list_item(&tutor, messaging_base_url);
        println!("{}", serde_json::to_string_pretty(&item)?);
    } else {
        for line in format_tutor_details(&tutor, messaging_base_url) {
            println!("{line}");
        }
    }

    Ok(())
}
