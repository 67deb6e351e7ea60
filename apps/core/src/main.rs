// Sitechat terminal host
// Runs one chat session on stdin/stdout; side effects are printed.

use sitechat_core::actors::chat::ChatHandle;
use sitechat_core::actors::traits::HostPage;
use sitechat_core::chat::{ChatSession, SessionState};
use sitechat_core::config::SiteConfig;
use sitechat_core::dispatcher::rules::{
    PORTFOLIO_SECTION, PROCESS_SECTION, SERVICES_SECTION, TEAM_SECTION, TECH_STACK_SECTION,
};
use sitechat_core::dispatcher::{ResponseDispatcher, SeededRandom};
use sitechat_core::models::ContactSubmission;
use sitechat_core::preferences::{CookieConsent, JsonFileStore, COOKIE_BANNER_DELAY};
use sitechat_core::telemetry;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

const HELP: &str = "Commands: /contact name | email | question, /theme, /cookies accept|decline, \
/preview <text>, /transcript, /quit";

/// Prints side effects instead of touching a real page.
struct TerminalHost {
    sections: &'static [&'static str],
}

impl HostPage for TerminalHost {
    fn navigate(&self, path: &str) {
        println!("  ↪ navigating to {}", path);
    }

    fn scroll_to(&self, section_id: &str) -> bool {
        if self.sections.contains(&section_id) {
            println!("  ↪ scrolled to #{}", section_id);
            true
        } else {
            false
        }
    }

    fn open_contact_form(&self) {
        println!("  ↪ contact form opened. Send it with /contact name | email | question");
    }

    fn open_mailto(&self, link: &str) {
        println!("  ↪ opening mail client: {}", link);
    }
}

fn parse_contact(args: &str) -> Option<ContactSubmission> {
    let mut parts = args.splitn(3, '|').map(str::trim);
    let name = parts.next()?;
    let email = parts.next()?;
    let question = parts.next()?;
    Some(ContactSubmission::new(name, email, question))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = SiteConfig::from_env()?;
    telemetry::init_tracing("sitechat", config.log_format)?;
    info!("Starting sitechat with pricing={} booking={}", config.links.pricing_path, config.links.booking_path);

    let store = JsonFileStore::open(config.preferences_path())?;
    let state = SessionState::fresh(&store, false);
    let dispatcher = match config.random_seed {
        Some(seed) => ResponseDispatcher::with_random(&config.links, SeededRandom::new(seed)),
        None => ResponseDispatcher::new(&config.links),
    };
    let host = Arc::new(TerminalHost {
        sections: &[
            PORTFOLIO_SECTION,
            TECH_STACK_SECTION,
            SERVICES_SECTION,
            PROCESS_SECTION,
            TEAM_SECTION,
        ],
    });
    let chat = ChatHandle::spawn(
        ChatSession::new(Arc::new(dispatcher), state),
        host,
        Box::new(store),
        config.chat_settings(),
    );

    println!("[theme: {}] {}", state.theme.as_str(), HELP);
    let cookie_banner = state.schedule_cookie_banner(COOKIE_BANNER_DELAY, || {
        println!("We use cookies to improve your experience. /cookies accept or /cookies decline");
    });
    if let Some(greeting) = chat.open().await? {
        println!("Bot: {}", greeting.text);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        match line.split_once(' ').unwrap_or((line, "")) {
            ("/quit", _) | ("/exit", _) => break,
            ("/help", _) => println!("{}", HELP),
            ("/theme", _) => println!("[theme: {}]", chat.toggle_theme().await?.as_str()),
            ("/cookies", choice) => {
                let choice = match choice.trim() {
                    "accept" => CookieConsent::Accepted,
                    "decline" => CookieConsent::Declined,
                    other => {
                        println!("Unknown choice '{}'", other);
                        continue;
                    }
                };
                chat.record_consent(choice).await?;
                if let Some(banner) = &cookie_banner {
                    banner.abort();
                }
                println!("[cookies: {}]", choice.as_str());
            }
            ("/contact", args) => match parse_contact(args) {
                Some(submission) => match chat.submit_contact(submission).await {
                    Ok(notice) => println!("[{:?}] {}", notice.kind, notice.message),
                    Err(e) => println!("[error] {}", e),
                },
                None => println!("Usage: /contact name | email | question"),
            },
            ("/preview", text) => {
                let response = chat.preview(text).await?;
                println!("  (dry run) {} / {}: {}", response.kind, response.topic, response.text);
            }
            ("/transcript", _) => {
                for message in chat.transcript().await? {
                    println!("#{} {}: {}", message.seq, message.speaker.avatar(), message.text);
                }
            }
            _ => match chat.submit(line.to_string()).await {
                Ok(Some(reply)) => println!("Bot: {}", reply.text),
                Ok(None) => {}
                Err(e) => warn!("Chat turn failed: {}", e),
            },
        }
    }

    chat.shutdown().await?;
    info!("Sitechat stopped");
    Ok(())
}
