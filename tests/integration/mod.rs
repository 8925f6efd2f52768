mod auth_tests;
mod resource_tests;
