//! Id Generation
//!
//! Ids look like `story_1718000000000_3f2a9c1e`: prefix, unix millis, and
//! the first eight hex digits of a v4 uuid so ids minted in the same
//! millisecond stay distinct.

use chrono::Utc;
use uuid::Uuid;

const SUFFIX_LEN: usize = 8;

pub fn next_id(prefix: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "{}_{}_{}",
        prefix,
        Utc::now().timestamp_millis(),
        &suffix[..SUFFIX_LEN]
    )
}
