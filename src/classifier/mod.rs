pub mod availability;

pub use availability::AvailabilityClassifier;
