use crate::cli::FilterArgs;
use crate::commands::common::{build_query_params, find_tutors, print_tutors, CliContext};
use crate::error::CliError;

pub async fn run_search(
    context: &CliContext,
    query: &[String],
    filters: &FilterArgs,
    as_json: bool,
) -> Result<(), CliError> {
    let params = build_query_params(query, filters);
    tracing::debug!(
        sort = %params.sort_key,
        "Searching with text={:?} subject={:?} location={:?}",
        params.free_text,
        params.subject_filter,
        params.location_filter
    );

    let tutors = find_tutors(context, &params).await?;
    print_tutors(&tutors, as_json, &context.client_config.messaging_base_url)
}
