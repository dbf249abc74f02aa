use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Arg, Command};
use tokio::io::{AsyncBufReadExt, BufReader};

use studybot::application::ports::AssistantApi;
use studybot::application::services::{ChatSession, MAX_ATTACHMENTS, ThemeSelector};
use studybot::domain::Attachment;
use studybot::infrastructure::observability::init_cli_tracing;
use studybot::infrastructure::relay::HttpAssistantApi;
use studybot::infrastructure::storage::JsonFilePreferenceStore;
use studybot::presentation::cli::{
    ChatCommand, HELP, apply_theme_request, describe_attachment, mime_for_path, parse_command,
    quick_prompt, quick_prompt_menu, theme_menu,
};
use studybot::presentation::rendering::render_transcript;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = Command::new("studybot-chat")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Terminal client for the StudyBot relay")
        .arg(
            Arg::new("server-url")
                .long("server-url")
                .value_name("URL")
                .help("Base URL of the relay")
                .default_value("http://localhost:3000")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("preferences")
                .long("preferences")
                .value_name("PATH")
                .help("File holding the saved theme")
                .default_value(".studybot-preferences.json")
                .action(clap::ArgAction::Set),
        )
        .get_matches();

    init_cli_tracing();

    let server_url = matches
        .get_one::<String>("server-url")
        .cloned()
        .unwrap_or_else(|| "http://localhost:3000".to_string());
    let preferences = matches
        .get_one::<String>("preferences")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".studybot-preferences.json"));

    let mut themes = ThemeSelector::load(JsonFilePreferenceStore::new(preferences))
        .context("failed to read saved preferences")?;
    let mut session = ChatSession::new(Arc::new(HttpAssistantApi::new(&server_url)));

    println!("StudyBot - Escrever & Resumir ({})", server_url);
    println!("Preferências em {}", themes.store().path().display());
    if themes.prompt_visible() {
        println!("{}", theme_menu(&themes));
    }
    println!("Sugestões (/prompt <n> <texto>):\n{}", quick_prompt_menu());
    println!("Type /help for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            ChatCommand::Quit => break,
            ChatCommand::Help => println!("{}", HELP),
            ChatCommand::Invalid(reason) => println!("{}", reason),
            ChatCommand::Attach(paths) => attach_files(&mut session, paths).await,
            ChatCommand::Remove(number) => match session.remove_attachment(number - 1) {
                Some(removed) => println!("Removed {}", removed.filename),
                None => println!("No file number {}", number),
            },
            ChatCommand::Files => print_files(&session),
            ChatCommand::Theme(request) => println!("{}", apply_theme_request(&mut themes, request)?),
            ChatCommand::Prompts => println!("{}", quick_prompt_menu()),
            ChatCommand::Prompt { number, text } => match (quick_prompt(number), text) {
                (None, _) => println!("No prompt number {}", number),
                (Some(prompt), None) => println!("{}", prompt.template),
                (Some(prompt), Some(text)) => send(&mut session, &prompt.fill(&text)).await,
            },
            ChatCommand::Copy(path) => match session.last_reply() {
                Some(reply) => {
                    tokio::fs::write(&path, &reply.content)
                        .await
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Saved reply to {}", path.display());
                }
                None => println!("No reply yet"),
            },
            ChatCommand::Export(path) => {
                let html = render_transcript(session.messages(), themes.applied());
                tokio::fs::write(&path, html)
                    .await
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("Saved {}", path.display());
            }
            ChatCommand::Send(input) => send(&mut session, &input).await,
        }
    }

    Ok(())
}

async fn send<A: AssistantApi + ?Sized>(session: &mut ChatSession<A>, input: &str) {
    match session.send(input).await {
        Ok(reply) => println!("\n{}\n", reply.content),
        Err(e) => println!("{}", e),
    }
}

async fn attach_files<A: AssistantApi + ?Sized>(session: &mut ChatSession<A>, paths: Vec<PathBuf>) {
    let mut batch = Vec::with_capacity(paths.len());
    for path in paths {
        match tokio::fs::read(&path).await {
            Ok(data) => {
                let filename = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                batch.push(Attachment::new(filename, mime_for_path(&path), data));
            }
            Err(e) => println!("Cannot read {}: {}", path.display(), e),
        }
    }

    let requested = batch.len();
    match session.attach(batch) {
        Ok(accepted) if accepted < requested => {
            println!("Attached {} file(s); only PDF and text files are accepted", accepted)
        }
        Ok(accepted) => println!("Attached {} file(s)", accepted),
        Err(_) => println!("Máximo de {} arquivos por mensagem", MAX_ATTACHMENTS),
    }
}

fn print_files<A: AssistantApi + ?Sized>(session: &ChatSession<A>) {
    if session.attachments().is_empty() {
        println!("No files queued");
        return;
    }
    for (i, attachment) in session.attachments().iter().enumerate() {
        println!("  {}. {}", i + 1, describe_attachment(attachment));
    }
    println!("  {}/{}", session.attachments().len(), MAX_ATTACHMENTS);
}
