//! External boundaries: the backend HTTP service.

pub mod service;
