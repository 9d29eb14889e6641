mod api_tests;
mod home_tests;
mod settings_tests;
