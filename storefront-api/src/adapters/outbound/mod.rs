pub mod walmart;
