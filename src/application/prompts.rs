// src/application/prompts.rs
//
// Instruction templates in the Mistral `[INST]` chat format.

pub fn summary_prompt(text: &str) -> String {
    format!(
        "<s>[INST] You are a helpful AI assistant that creates concise summaries. \
         Please summarize the following text, focusing on key points and main ideas:\n\n\
         {text}\n\n\
         Create a clear, well-structured summary: [/INST]</s>"
    )
}

pub fn flashcards_prompt(text: &str) -> String {
    format!(
        "<s>[INST] Generate 5 question-answer pairs based on the key concepts in this text. \
         Format each pair exactly like this, with one pair per line:\n\n\
         Q: First question here?\n\
         A: First answer here.\n\n\
         Q: Second question here?\n\
         A: Second answer here.\n\n\
         Text to process:\n\
         {text}\n\n\
         Generate exactly 5 Q&A pairs: [/INST]</s>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_text_when_building_summary_prompt_then_embeds_text_verbatim() {
        let prompt = summary_prompt("Mitochondria\nproduce ATP.");

        assert!(prompt.starts_with("<s>[INST]"));
        assert!(prompt.contains("\n\nMitochondria\nproduce ATP.\n\n"));
        assert!(prompt.ends_with("[/INST]</s>"));
    }

    #[test]
    fn given_text_when_building_flashcards_prompt_then_shows_marker_format() {
        let prompt = flashcards_prompt("Rust ownership");

        assert!(prompt.contains("Q: First question here?\nA: First answer here."));
        assert!(prompt.contains("Text to process:\nRust ownership"));
        assert!(prompt.contains("Generate exactly 5 Q&A pairs"));
    }
}
