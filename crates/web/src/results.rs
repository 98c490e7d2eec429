use catalog_facade::result::{status_of, Event, FacadeResult, Status};

use crate::error::{AppError, AppResult};

/// Fail unless every given facade result finished with `OK` status.
pub fn process_results(results: &[&[Event]]) -> AppResult<()> {
    let events: Vec<Event> = results.iter().flat_map(|events| events.iter().cloned()).collect();
    match status_of(&events) {
        Status::Ok => Ok(()),
        status => {
            let messages: Vec<&str> = events.iter().map(|event| event.message.as_str()).collect();
            tracing::warn!(?status, events = ?events, "Facade reported problems");
            Err(AppError::IllegalArgument(format!(
                "Operation result with errors. {}",
                messages.join(" ")
            )))
        }
    }
}

/// Take the data of a single result, failing on a non-`OK` status.
pub fn process<T>(result: FacadeResult<T>) -> AppResult<Option<T>> {
    process_results(&[result.events()])?;
    Ok(result.into_data())
}
