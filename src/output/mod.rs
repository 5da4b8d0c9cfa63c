pub mod formatter;

pub use formatter::{
    format_match_table, format_region_list, format_result_report, should_use_colors,
};
