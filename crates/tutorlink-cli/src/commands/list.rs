use tutorlink_core::search::sort_records;
use tutorlink_core::SortKey;

use crate::commands::common::{load_catalog, print_tutors, CliContext};
use crate::error::CliError;

pub async fn run_list(context: &CliContext, sort: SortKey, as_json: bool) -> Result<(), CliError> {
    let mut tutors = load_catalog(context).await?;
    sort_records(&mut tutors, sort);
    print_tutors(&tutors, as_json, &context.client_config.messaging_base_url)
}
