// Form input parsing
pub mod form;

// Result card rendering
pub mod result_view;
