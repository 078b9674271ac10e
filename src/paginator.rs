//! # Pagination and Page Merging
//!
//! Drives the transport until the result is complete: one call in single-page
//! mode, or a cursor-following loop in all-pages mode. Each iteration consumes
//! exactly the cursor the previous page returned, so the loop is strictly
//! sequential and suspends only at the transport boundary — dropping the future
//! between fetches aborts the remaining pages.
//!
//! Merge semantics: the first page's sensor list is authoritative. For every
//! later page, each sensor's rows are appended after the rows already
//! accumulated for that sensor, in page-arrival order; no sorting, no
//! deduplication — the service is the sole authority on row order. A sensor that
//! first appears on a later page is appended after the first-page sensors, in
//! the order its page arrived.
//!
//! A failure on any page discards the accumulator and fails the whole call;
//! partial results are never returned as success.

use crate::envelope::{decode_envelope, SensorData};
use crate::error::ClientError;
use crate::params::RequestParameters;
use crate::transport::{Route, Transport};

/// Fetch one page: transport call plus envelope decode.
async fn fetch_page<T: Transport>(
    transport: &T,
    route: Route,
    params: &RequestParameters,
) -> Result<SensorData, ClientError> {
    let raw = transport.send(route, params).await?;
    decode_envelope(raw.status, &raw.body)
}

/// Fetch a single page or walk every page, per `all_pages`.
///
/// - `all_pages == false`: one call; the page is returned as-is, `next`
///   preserved so the caller can see whether more data exists.
/// - `all_pages == true`: follow the cursor until the service returns a null
///   `next`; the merged result always has `next == None`.
/// - A first page with `sensor_data == None` matched zero rows and is returned
///   unchanged — no follow-up request is made, regardless of `all_pages`.
/// - `max_pages`, when set, caps the number of fetches; exceeding it fails with
///   [`ClientError::PaginationLimitExceeded`].
pub async fn fetch<T: Transport>(
    transport: &T,
    route: Route,
    params: &RequestParameters,
    all_pages: bool,
    max_pages: Option<u32>,
) -> Result<SensorData, ClientError> {
    let mut merged = fetch_page(transport, route, params).await?;

    if !all_pages || merged.sensor_data.is_none() {
        return Ok(merged);
    }

    let mut pages_fetched: u32 = 1;

    // take() clears the cursor, so a fully-walked result ends with next == None.
    while let Some(cursor) = merged.next.take() {
        if let Some(cap) = max_pages {
            if pages_fetched >= cap {
                return Err(ClientError::PaginationLimitExceeded(cap));
            }
        }

        let followup = params.with_cursor(&cursor);
        let page = fetch_page(transport, route, &followup).await?;
        merge_into(&mut merged, page);
        pages_fetched += 1;
    }

    Ok(merged)
}

/// Merge one follow-up page into the accumulator.
///
/// The accumulator takes over the page's cursor; row sequences are concatenated
/// per sensor, first-page sensor order preserved.
fn merge_into(accumulator: &mut SensorData, page: SensorData) {
    accumulator.next = page.next;

    let Some(incoming) = page.sensor_data else {
        return;
    };
    let records = accumulator.sensor_data.get_or_insert_with(Vec::new);

    for record in incoming {
        match records
            .iter_mut()
            .find(|existing| existing.sensor_id == record.sensor_id)
        {
            Some(existing) => existing.data.extend(record.data),
            // Sensor unseen on earlier pages: append after the established list.
            None => records.push(record),
        }
    }
}
