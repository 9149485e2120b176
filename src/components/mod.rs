pub mod reaction_bar;
pub mod reviews_list;
