pub mod entity_form;
pub mod entity_list;
pub mod entity_panel;
pub mod entity_select;
pub mod response_view;
pub mod ui;
