pub mod architecture;
pub mod challenge;
pub mod code_block;
pub mod code_sample;
pub mod feature;
pub mod metric;
pub mod overview;
pub mod project_entry;
pub mod project_links;
pub mod section;
pub mod technical_detail;
