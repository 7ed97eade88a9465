pub mod header;
pub mod layout;
pub mod page_content;
pub mod sidebar;
