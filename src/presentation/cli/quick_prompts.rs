/// Starter requests offered on an empty conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickPrompt {
    pub title: &'static str,
    pub description: &'static str,
    pub template: &'static str,
}

pub static QUICK_PROMPTS: [QuickPrompt; 3] = [
    QuickPrompt {
        title: "Resumir Textos",
        description: "Transforme textos longos em resumos objetivos",
        template: "Resuma este texto em tópicos principais: [cole seu texto aqui]",
    },
    QuickPrompt {
        title: "Escrever Textos",
        description: "Crie introduções, conclusões e citações",
        template: "Me ajude a escrever uma introdução acadêmica sobre: [seu tema]",
    },
    QuickPrompt {
        title: "Simplificar",
        description: "Torne conteúdos difíceis mais fáceis",
        template: "Simplifique esta linguagem complexa para mim: [cole o texto difícil]",
    },
];

impl QuickPrompt {
    /// Replaces the bracketed placeholder with `text`.
    pub fn fill(&self, text: &str) -> String {
        match (self.template.find('['), self.template.rfind(']')) {
            (Some(start), Some(end)) if start < end => format!(
                "{}{}{}",
                &self.template[..start],
                text,
                &self.template[end + 1..]
            ),
            _ => format!("{} {}", self.template, text),
        }
    }
}

/// 1-based lookup, as numbered in the menu.
pub fn quick_prompt(number: usize) -> Option<&'static QuickPrompt> {
    number.checked_sub(1).and_then(|i| QUICK_PROMPTS.get(i))
}

pub fn quick_prompt_menu() -> String {
    QUICK_PROMPTS
        .iter()
        .enumerate()
        .map(|(i, p)| format!("  {}. {} - {}\n     {}", i + 1, p.title, p.description, p.template))
        .collect::<Vec<_>>()
        .join("\n")
}
