//! XML utilities.

mod utils;

pub use utils::{
    character_data_ranges, content_range, escape_text, find_in_namespace, get_tag_name,
    root_namespace,
};
