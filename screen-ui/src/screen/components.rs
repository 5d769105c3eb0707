pub mod launcher;
pub mod status_bar;
