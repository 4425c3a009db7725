mod project_entry;
mod section;
