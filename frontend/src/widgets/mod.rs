pub mod accordion;
pub mod contact_form;
