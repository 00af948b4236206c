pub mod app;
pub mod challenge_view;
pub mod commandments;
pub mod footer;
pub mod game_view;
pub mod hero;
pub mod milestone_grid;
pub mod navigation;
pub mod nutonomics;
pub mod progress_bar;
pub mod round_overlays;
pub mod stats_section;
pub mod testimonial;
