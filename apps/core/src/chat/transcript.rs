//! Append-only chat transcript.

use chrono::Utc;
use uuid::Uuid;

use crate::models::{Message, Speaker};

/// Ordered, append-only sequence of messages.
///
/// No reordering, no deduplication, no removal. The log is discarded with
/// the session that owns it.
#[derive(Debug, Default, Clone)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message at the end and returns it.
    pub fn append(&mut self, speaker: Speaker, text: impl Into<String>) -> &Message {
        let message = Message {
            id: Uuid::new_v4(),
            seq: self.messages.len() as u64,
            speaker,
            text: text.into(),
            created_at: Utc::now(),
        };
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Plain-text rendering, one `avatar: text` block per message.
    pub fn render_plain(&self) -> String {
        self.messages
            .iter()
            .map(|m| format!("{}: {}", m.speaker.avatar(), m.text))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// HTML rendering. Message text is escaped; newlines become `<br>`.
    pub fn render_html(&self) -> String {
        self.messages
            .iter()
            .map(|m| {
                let class = match m.speaker {
                    Speaker::User => "user",
                    Speaker::Bot => "bot",
                };
                format!(
                    "<div class=\"chatbot-message {}\"><div class=\"chatbot-avatar\">{}</div><div class=\"chatbot-text\">{}</div></div>",
                    class,
                    m.speaker.avatar(),
                    escape_html(&m.text).replace('\n', "<br>")
                )
            })
            .collect()
    }
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut log = MessageLog::new();
        log.append(Speaker::User, "hello");
        log.append(Speaker::Bot, "hi!");
        log.append(Speaker::User, "hello");

        let seqs: Vec<u64> = log.messages().iter().map(|m| m.seq).collect();
        assert_eq!(seqs, vec![0, 1, 2]);
        // duplicates are kept
        assert_eq!(log.messages()[0].text, log.messages()[2].text);
        assert_eq!(log.last().map(|m| m.speaker), Some(Speaker::User));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>alert('x') & \"y\"</script>"),
            "&lt;script&gt;alert(&#39;x&#39;) &amp; &quot;y&quot;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_render_html_escapes_user_text() {
        let mut log = MessageLog::new();
        log.append(Speaker::User, "<b>bold</b>");
        log.append(Speaker::Bot, "line one\nline two");
        let html = log.render_html();
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!html.contains("<b>bold</b>"));
        assert!(html.contains("line one<br>line two"));
        assert!(html.contains("chatbot-message user"));
    }

    #[test]
    fn test_render_plain() {
        let mut log = MessageLog::new();
        log.append(Speaker::User, "1");
        log.append(Speaker::Bot, "Opening pricing");
        assert_eq!(log.render_plain(), "You: 1\nBot: Opening pricing");
    }
}
