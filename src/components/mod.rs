pub mod force_graph;
pub mod stats_panel;
pub mod toast;
