use std::fmt::Write;

use chrono::Local;

use crate::domain::{Message, MessageRole, Theme};

use super::markup::{escape_html, render_markup};

const WELCOME: &str = "Seu assistente para estudos! Posso resumir textos longos, ajudar com textos acadêmicos e simplificar conteúdos complexos.";

struct Palette {
    background: &'static str,
    foreground: &'static str,
    user_bubble: &'static str,
    muted: &'static str,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::DarkBlue => Palette {
            background: "#0b1220",
            foreground: "#e2e8f0",
            user_bubble: "#1d4ed8",
            muted: "#94a3b8",
        },
        Theme::DarkBlack => Palette {
            background: "#0a0a0a",
            foreground: "#f5f5f5",
            user_bubble: "#262626",
            muted: "#a3a3a3",
        },
        Theme::Light => Palette {
            background: "#ffffff",
            foreground: "#0f172a",
            user_bubble: "#dbeafe",
            muted: "#64748b",
        },
    }
}

/// Standalone HTML page for a conversation. The theme name is set as the
/// class of the root element.
pub fn render_transcript(messages: &[Message], theme: Theme) -> String {
    let colors = palette(theme);
    let mut html = String::new();

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"pt-BR\" class=\"{theme}\">\n<head>\n<meta charset=\"utf-8\">\n<title>StudyBot</title>\n<style>\n\
         body {{ background: {bg}; color: {fg}; font-family: sans-serif; max-width: 48rem; margin: 0 auto; padding: 1rem; }}\n\
         .message {{ margin: 1rem 0; }}\n\
         .message time {{ color: {muted}; font-size: 0.75rem; display: block; }}\n\
         .user {{ text-align: right; }}\n\
         .user p {{ display: inline-block; background: {bubble}; padding: 0.5rem 0.75rem; border-radius: 0.5rem; white-space: pre-wrap; text-align: left; }}\n\
         </style>\n</head>\n<body>\n<header>\n<h1>StudyBot</h1>\n<p>Escrever &amp; Resumir - ChatBot Escolar</p>\n</header>\n<main>\n",
        theme = theme.as_str(),
        bg = colors.background,
        fg = colors.foreground,
        muted = colors.muted,
        bubble = colors.user_bubble,
    );

    if messages.is_empty() {
        let _ = writeln!(html, "<p class=\"welcome\">{}</p>", escape_html(WELCOME));
    }

    for message in messages {
        let time = message.timestamp.with_timezone(&Local).format("%H:%M:%S");
        let body = match message.role {
            MessageRole::User => format!("<p>{}</p>", escape_html(&message.content)),
            MessageRole::Assistant => {
                format!("<div class=\"prose\">\n{}\n</div>", render_markup(&message.content))
            }
        };
        let _ = writeln!(
            html,
            "<article class=\"message {}\" id=\"m-{}\">\n<time>{}</time>\n{}\n</article>",
            message.role.as_str(),
            message.id.as_uuid(),
            time,
            body
        );
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}
