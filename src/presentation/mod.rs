// Presentation layer - Page model and controller
pub mod api;
pub mod controller;
pub mod page;
pub mod toast;
