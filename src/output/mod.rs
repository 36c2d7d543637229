pub mod formatter;

pub use formatter::{
    format_audit_report, format_comparison_table, format_footer, format_header, format_legend,
    format_most_efficient, format_section_title, should_use_colors,
};
