mod browse_tests;
mod contact_tests;
mod property_tests;
mod saved_tests;
