mod prompt_builder_test;
mod theme_selector_test;
