mod command_test;
mod theme_request_test;
