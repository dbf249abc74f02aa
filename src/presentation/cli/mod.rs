mod attachment_summary;
mod command;
mod quick_prompts;
mod theme_request;

pub use attachment_summary::describe_attachment;
pub use command::{ChatCommand, HELP, mime_for_path, parse_command};
pub use quick_prompts::{QUICK_PROMPTS, QuickPrompt, quick_prompt, quick_prompt_menu};
pub use theme_request::{ThemeRequest, apply_theme_request, theme_menu};
