pub mod issue_form;
pub mod scaffold;
pub mod slug;
pub mod template;
