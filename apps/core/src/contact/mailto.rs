//! `mailto:` links for the chat's contact form.

use crate::models::ContactSubmission;

/// Subject line used for chat-originated inquiries.
pub fn inquiry_subject(name: &str) -> String {
    format!("Inquiry from {} via Chatbot", name)
}

/// Builds a `mailto:` link with a pre-filled subject and body.
pub fn mailto_link(recipient: &str, submission: &ContactSubmission) -> String {
    let subject = inquiry_subject(&submission.name);
    let body = format!(
        "Name: {}\nEmail: {}\nQuestion: {}",
        submission.name, submission.email, submission.question
    );
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}
