pub mod bar_chart;
pub mod output;
pub mod palette;
pub mod scoreboard;
