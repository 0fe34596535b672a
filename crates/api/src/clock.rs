// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Local wall-clock time used to flag past competitions at load.
//!
//! Feed dates carry no offset and are read as local time, so the load
//! instant must be expressed the same way.

use chrono::{DateTime, Local};
use time::error::ComponentRange;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Returns the current local wall-clock time, to the second.
///
/// The local offset is resolved through `chrono`, which works after the
/// async runtime has started its worker threads.
///
/// # Errors
///
/// Returns an error if the system clock or offset is outside the
/// representable range.
pub fn local_now() -> Result<PrimitiveDateTime, ComponentRange> {
    let now: DateTime<Local> = Local::now();
    wall_clock_at(now.timestamp(), now.offset().local_minus_utc())
}

/// Converts a Unix timestamp to the wall-clock time at a fixed UTC offset.
///
/// # Arguments
///
/// * `unix_seconds` - Seconds since the Unix epoch
/// * `offset_seconds` - The offset east of UTC, in seconds
///
/// # Errors
///
/// Returns an error if the timestamp or the offset is out of range.
pub fn wall_clock_at(
    unix_seconds: i64,
    offset_seconds: i32,
) -> Result<PrimitiveDateTime, ComponentRange> {
    let offset: UtcOffset = UtcOffset::from_whole_seconds(offset_seconds)?;
    let local: OffsetDateTime =
        OffsetDateTime::from_unix_timestamp(unix_seconds)?.to_offset(offset);
    Ok(PrimitiveDateTime::new(local.date(), local.time()))
}
