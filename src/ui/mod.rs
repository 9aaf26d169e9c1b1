pub mod charts;
pub mod detail;
pub mod panels;
pub mod tabs;
