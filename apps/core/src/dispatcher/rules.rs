//! The ordered matcher table.
//!
//! Rules are evaluated top to bottom and the first match wins, so the position
//! of a rule in [`default_rules`] is part of its behaviour. Tiers, highest first:
//! numeric shortcuts, tone-qualified compounds, generic topics, the question
//! fallback and the default fallback.

use serde::{Deserialize, Serialize};

use super::effects::ScheduledEffect;
use super::keywords::{normalize, numeric_shortcut, KeywordSet};
use super::random::RandomSource;
use super::responses as text;
use super::tone::{Tone, ToneSignals};
use super::topic::{RuleKind, Topic};

/// Section ids the host page exposes for `scroll_to`.
pub const PORTFOLIO_SECTION: &str = "portfolio";
pub const TECH_STACK_SECTION: &str = "tech-stack";
pub const SERVICES_SECTION: &str = "services";
pub const PROCESS_SECTION: &str = "process";
pub const TEAM_SECTION: &str = "team";

/// Relative paths the dispatcher navigates to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteLinks {
    pub pricing_path: String,
    pub booking_path: String,
}

impl Default for SiteLinks {
    fn default() -> Self {
        Self {
            pricing_path: "/pricing.html".to_string(),
            booking_path: "/book-demo.html".to_string(),
        }
    }
}

// --- Keyword sets ---
//
// Keywords match at the start of a word (see `contains_keyword`), so a stem
// such as "schedul" covers "schedule", "scheduled" and "scheduling".

const PRICE_WORDS: KeywordSet = KeywordSet(&[
    "expensive", "pricey", "overpriced", "rip off", "price", "cost", "how much",
]);
const FRUSTRATION_WORDS: KeywordSet = KeywordSet(&[
    "broken", "slow", "doesn't work", "not working", "bug", "bugs", "buggy", "sucks", "useless",
]);
const CASUAL_GREETING_WORDS: KeywordSet =
    KeywordSet(&["sup", "wassup", "what's up", "whats up", "yo", "hey"]);
const SPEED_WORDS: KeywordSet = KeywordSet(&["fast", "quick", "asap", "how long"]);
const DEMO_WORDS: KeywordSet = KeywordSet(&["demo", "call", "meeting", "book"]);
const START_WORDS: KeywordSet = KeywordSet(&[
    "start", "let's do", "lets do", "sign me up", "ready", "build",
]);

const PRICING: KeywordSet = KeywordSet(&[
    "price", "pricing", "cost", "how much", "budget", "expensive", "quote", "estimate", "rates",
    "fee", "fees",
]);
const DEMO: KeywordSet = KeywordSet(&[
    "demo", "schedul", "book", "meeting", "consult", "call",
]);
const CONTACT: KeywordSet = KeywordSet(&[
    "contact", "email", "reach you", "reach out", "talk to", "phone", "get in touch", "human",
    "real person", "custom question",
]);
const PORTFOLIO: KeywordSet = KeywordSet(&[
    "portfolio", "your work", "past work", "previous work", "your projects", "project you",
    "projects you", "past project", "recent project", "previous project", "example", "case stud",
    "client", "showcase",
]);
const TECH_STACK: KeywordSet = KeywordSet(&[
    "tech", "stack", "framework", "react", "next.js", "nextjs", "wordpress", "shopify", "cms",
]);
const SERVICES: KeywordSet = KeywordSet(&[
    "service", "what do you offer", "what you offer", "offering", "what do you do", "web app",
    "mobile app", "seo", "web design", "redesign", "logo", "branding", "ecommerce", "e-commerce",
]);
const TIMELINE: KeywordSet = KeywordSet(&[
    "how long", "timeline", "timeframe", "fast", "quick", "deadline", "week", "turnaround",
    "deliver", "launch",
]);
const PROCESS: KeywordSet = KeywordSet(&[
    "process", "how does it work", "how do you work", "step", "workflow", "approach",
    "methodolog",
]);
const TEAM: KeywordSet = KeywordSet(&[
    "team", "who are you", "founder", "people", "developer", "designer", "about us",
]);
const GREETING: KeywordSet = KeywordSet(&[
    "hello", "hi", "hey", "hiya", "howdy", "greetings", "good morning", "good afternoon",
    "good evening",
]);
const THANKS: KeywordSet = KeywordSet(&["thank", "thx", "ty", "appreciate", "cheers"]);
const WHY: KeywordSet = KeywordSet(&[
    "why you", "why choose", "why should", "why pick", "what makes you", "different",
]);
const WHEN: KeywordSet = KeywordSet(&["when can", "availab", "start date", "capacity"]);
const WHERE: KeywordSet = KeywordSet(&[
    "where are you", "locat", "based", "timezone", "time zone", "remote",
]);
const PAYMENT: KeywordSet = KeywordSet(&[
    "payment", "pay", "paying", "invoice", "deposit", "installment", "paypal", "card",
]);
const GUARANTEE: KeywordSet = KeywordSet(&[
    "guarantee", "refund", "money back", "warranty", "revision", "satisf",
]);
const EXPERIENCE: KeywordSet = KeywordSet(&[
    "experience", "track record", "years in business", "been around", "how many years",
]);
const START: KeywordSet = KeywordSet(&[
    "get started", "start", "begin", "kick off", "kickoff", "onboarding", "sign up",
]);
const URGENT: KeywordSet = KeywordSet(&[
    "urgent", "asap", "emergency", "rush", "right away", "immediately",
]);
const COMPARISON: KeywordSet = KeywordSet(&[
    "competitor", "agenc", "fiverr", "upwork", "wix", "squarespace", "cheaper", "freelancer",
    "vs", "versus", "compar",
]);

const QUESTION_MARKERS: KeywordSet = KeywordSet(&["what", "how", "can you", "do you"]);

// --- Quick replies ---

const AFTER_PRICING: &[&str] = &["Do you offer payment plans?", "Can I book a demo?"];
const AFTER_DEMO: &[&str] = &["What happens on the call?", "How much does a website cost?"];
const AFTER_WORK: &[&str] = &["What services do you offer?", "How long does a project take?"];
const AFTER_HELP: &[&str] = &["How much does a website cost?", "Can I book a demo?", "I have a custom question"];

/// Input after normalisation, with the signals every rule may need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedInput {
    pub text: String,
    pub shortcut: Option<u8>,
    pub tones: ToneSignals,
}

impl NormalizedInput {
    pub fn new(raw: &str) -> Self {
        let text = normalize(raw);
        let shortcut = numeric_shortcut(&text);
        let tones = ToneSignals::detect(&text);
        Self {
            text,
            shortcut,
            tones,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// What a rule needs to see in the input to fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Menu number `1`..`5`
    Shortcut(u8),
    /// A tone signal together with a topic keyword
    ToneTopic { tone: Tone, keywords: KeywordSet },
    /// Any keyword of the set
    Topic(KeywordSet),
    /// Any interrogative marker
    Question(KeywordSet),
    /// Always matches
    Default,
}

impl Trigger {
    pub fn kind(&self) -> RuleKind {
        match self {
            Trigger::Shortcut(_) => RuleKind::NumericShortcut,
            Trigger::ToneTopic { .. } => RuleKind::ToneCompound,
            Trigger::Topic(_) => RuleKind::Topic,
            Trigger::Question(_) => RuleKind::Question,
            Trigger::Default => RuleKind::Default,
        }
    }

    /// Returns what matched (the evidence), or `None` when the trigger does not fire.
    pub fn evaluate(&self, input: &NormalizedInput) -> Option<String> {
        match self {
            Trigger::Shortcut(n) => (input.shortcut == Some(*n)).then(|| n.to_string()),
            Trigger::ToneTopic { tone, keywords } => {
                if !input.tones.has(*tone) {
                    return None;
                }
                keywords
                    .first_match(&input.text)
                    .map(|k| format!("{}+{}", tone, k))
            }
            Trigger::Topic(keywords) | Trigger::Question(keywords) => {
                keywords.first_match(&input.text).map(str::to_string)
            }
            Trigger::Default => Some(String::new()),
        }
    }
}

/// Display text of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseText {
    Fixed(&'static str),
    /// Uniform pick from a pool
    OneOf(&'static [&'static str]),
    /// `{pick}` in the template replaced by a uniform pick from `fill`
    Template {
        template: &'static str,
        fill: &'static [&'static str],
    },
}

impl ResponseText {
    pub fn render(&self, rng: &mut dyn RandomSource) -> String {
        match self {
            ResponseText::Fixed(s) => s.to_string(),
            ResponseText::OneOf(pool) => pick(pool, rng).to_string(),
            ResponseText::Template { template, fill } => template.replace("{pick}", pick(fill, rng)),
        }
    }

    /// Every text this rule can produce.
    pub fn variants(&self) -> Vec<String> {
        match self {
            ResponseText::Fixed(s) => vec![s.to_string()],
            ResponseText::OneOf(pool) => pool.iter().map(|s| s.to_string()).collect(),
            ResponseText::Template { template, fill } => {
                fill.iter().map(|f| template.replace("{pick}", f)).collect()
            }
        }
    }
}

fn pick(pool: &'static [&'static str], rng: &mut dyn RandomSource) -> &'static str {
    match pool.len() {
        0 => "",
        len => pool[rng.pick(len).min(len - 1)],
    }
}

/// One entry of the classification table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherRule {
    pub topic: Topic,
    pub trigger: Trigger,
    pub text: ResponseText,
    pub effect: Option<ScheduledEffect>,
    pub quick_replies: &'static [&'static str],
}

impl MatcherRule {
    fn new(topic: Topic, trigger: Trigger, text: ResponseText) -> Self {
        Self {
            topic,
            trigger,
            text,
            effect: None,
            quick_replies: &[],
        }
    }

    pub fn shortcut(n: u8, topic: Topic, text: &'static str) -> Self {
        Self::new(topic, Trigger::Shortcut(n), ResponseText::Fixed(text))
    }

    pub fn tone(tone: Tone, keywords: KeywordSet, topic: Topic, text: ResponseText) -> Self {
        Self::new(topic, Trigger::ToneTopic { tone, keywords }, text)
    }

    pub fn topic(topic: Topic, keywords: KeywordSet, text: ResponseText) -> Self {
        Self::new(topic, Trigger::Topic(keywords), text)
    }

    pub fn question(markers: KeywordSet, pool: &'static [&'static str]) -> Self {
        Self::new(Topic::Question, Trigger::Question(markers), ResponseText::OneOf(pool))
    }

    pub fn fallback(pool: &'static [&'static str]) -> Self {
        Self::new(Topic::Help, Trigger::Default, ResponseText::OneOf(pool))
    }

    pub fn with_effect(mut self, effect: ScheduledEffect) -> Self {
        self.effect = Some(effect);
        self
    }

    pub fn with_quick_replies(mut self, replies: &'static [&'static str]) -> Self {
        self.quick_replies = replies;
        self
    }

    pub fn kind(&self) -> RuleKind {
        self.trigger.kind()
    }
}

/// The production table, in priority order.
pub fn default_rules(links: &SiteLinks) -> Vec<MatcherRule> {
    use ResponseText::{Fixed, OneOf, Template};
    let pricing = || ScheduledEffect::navigate(links.pricing_path.clone());
    let booking = || ScheduledEffect::navigate(links.booking_path.clone());
    let contact = ScheduledEffect::open_contact_form;
    let scroll = |section_id: &str| ScheduledEffect::scroll_to(section_id);

    vec![
        // 1. numeric shortcuts
        MatcherRule::shortcut(1, Topic::Pricing, text::SHORTCUT_PRICING).with_effect(pricing()),
        MatcherRule::shortcut(2, Topic::Demo, text::SHORTCUT_DEMO).with_effect(booking()),
        MatcherRule::shortcut(3, Topic::Contact, text::SHORTCUT_CONTACT).with_effect(contact()),
        MatcherRule::shortcut(4, Topic::Portfolio, text::SHORTCUT_PORTFOLIO)
            .with_effect(scroll(PORTFOLIO_SECTION)),
        MatcherRule::shortcut(5, Topic::TechStack, text::SHORTCUT_TECH_STACK)
            .with_effect(scroll(TECH_STACK_SECTION)),
        // 2. tone-qualified compounds; coarse before casual before hyped
        MatcherRule::tone(Tone::Coarse, PRICE_WORDS, Topic::Pricing, Fixed(text::COARSE_PRICING))
            .with_effect(pricing())
            .with_quick_replies(AFTER_PRICING),
        MatcherRule::tone(Tone::Coarse, FRUSTRATION_WORDS, Topic::Contact, Fixed(text::COARSE_FRUSTRATION))
            .with_effect(contact()),
        MatcherRule::tone(Tone::Casual, PRICE_WORDS, Topic::Pricing, Fixed(text::CASUAL_PRICING))
            .with_effect(pricing())
            .with_quick_replies(AFTER_PRICING),
        MatcherRule::tone(Tone::Casual, CASUAL_GREETING_WORDS, Topic::Greeting, OneOf(text::CASUAL_GREETING))
            .with_quick_replies(AFTER_HELP),
        MatcherRule::tone(Tone::Casual, SPEED_WORDS, Topic::Timeline, Fixed(text::CASUAL_TIMELINE)),
        MatcherRule::tone(Tone::Hyped, DEMO_WORDS, Topic::Demo, Fixed(text::HYPED_DEMO)).with_effect(booking()),
        MatcherRule::tone(Tone::Hyped, START_WORDS, Topic::Start, Fixed(text::HYPED_START)).with_effect(contact()),
        // 3. generic topics
        MatcherRule::topic(Topic::Pricing, PRICING, Fixed(text::PRICING))
            .with_effect(pricing())
            .with_quick_replies(AFTER_PRICING),
        MatcherRule::topic(Topic::Demo, DEMO, Fixed(text::DEMO))
            .with_effect(booking())
            .with_quick_replies(AFTER_DEMO),
        MatcherRule::topic(Topic::Contact, CONTACT, Fixed(text::CONTACT)).with_effect(contact()),
        MatcherRule::topic(Topic::Portfolio, PORTFOLIO, Fixed(text::PORTFOLIO))
            .with_effect(scroll(PORTFOLIO_SECTION))
            .with_quick_replies(AFTER_WORK),
        MatcherRule::topic(Topic::TechStack, TECH_STACK, Fixed(text::TECH_STACK))
            .with_effect(scroll(TECH_STACK_SECTION)),
        MatcherRule::topic(Topic::Services, SERVICES, Fixed(text::SERVICES))
            .with_effect(scroll(SERVICES_SECTION))
            .with_quick_replies(AFTER_WORK),
        MatcherRule::topic(Topic::Timeline, TIMELINE, Fixed(text::TIMELINE)),
        MatcherRule::topic(Topic::Process, PROCESS, Fixed(text::PROCESS)).with_effect(scroll(PROCESS_SECTION)),
        MatcherRule::topic(Topic::Team, TEAM, Fixed(text::TEAM)).with_effect(scroll(TEAM_SECTION)),
        MatcherRule::topic(
            Topic::Greeting,
            GREETING,
            Template {
                template: text::GREETING_TEMPLATE,
                fill: text::GREETING_OPENERS,
            },
        )
        .with_quick_replies(AFTER_HELP),
        MatcherRule::topic(Topic::Thanks, THANKS, OneOf(text::THANKS)),
        MatcherRule::topic(Topic::Why, WHY, Fixed(text::WHY)),
        MatcherRule::topic(Topic::When, WHEN, Fixed(text::WHEN)),
        MatcherRule::topic(Topic::Where, WHERE, Fixed(text::WHERE)),
        MatcherRule::topic(Topic::Payment, PAYMENT, Fixed(text::PAYMENT)),
        MatcherRule::topic(Topic::Guarantee, GUARANTEE, Fixed(text::GUARANTEE)),
        MatcherRule::topic(Topic::Experience, EXPERIENCE, Fixed(text::EXPERIENCE))
            .with_quick_replies(AFTER_WORK),
        MatcherRule::topic(Topic::Start, START, Fixed(text::START)).with_effect(booking()),
        MatcherRule::topic(Topic::Urgent, URGENT, Fixed(text::URGENT)).with_effect(contact()),
        MatcherRule::topic(Topic::Comparison, COMPARISON, Fixed(text::COMPARISON)),
        // 4. question fallback
        MatcherRule::question(QUESTION_MARKERS, text::QUESTION_POOL).with_quick_replies(AFTER_HELP),
        // 5. default fallback
        MatcherRule::fallback(text::DEFAULT_POOL).with_quick_replies(AFTER_HELP),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::random::FixedRandom;

    #[test]
    fn test_table_tiers_are_in_priority_order() {
        let rules = default_rules(&SiteLinks::default());
        let kinds: Vec<RuleKind> = rules.iter().map(MatcherRule::kind).collect();
        let mut sorted = kinds.clone();
        sorted.sort();
        assert_eq!(kinds, sorted, "tiers must never interleave");
        assert_eq!(kinds.last(), Some(&RuleKind::Default));
    }

    #[test]
    fn test_every_shortcut_has_an_effect() {
        let rules = default_rules(&SiteLinks::default());
        let shortcuts: Vec<&MatcherRule> = rules
            .iter()
            .filter(|r| r.kind() == RuleKind::NumericShortcut)
            .collect();
        assert_eq!(shortcuts.len(), 5);
        assert!(shortcuts.iter().all(|r| r.effect.is_some()));
    }

    #[test]
    fn test_tone_trigger_needs_both_tone_and_topic() {
        let trigger = Trigger::ToneTopic {
            tone: Tone::Casual,
            keywords: PRICE_WORDS,
        };
        assert_eq!(
            trigger.evaluate(&NormalizedInput::new("bro this seems expensive")),
            Some("casual+expensive".to_string())
        );
        assert_eq!(trigger.evaluate(&NormalizedInput::new("this seems expensive")), None);
        assert_eq!(trigger.evaluate(&NormalizedInput::new("bro what's up")), None);
    }

    #[test]
    fn test_template_fills_pick_slot() {
        let text = ResponseText::Template {
            template: "{pick} there",
            fill: &["Hi", "Hello"],
        };
        assert_eq!(text.render(&mut FixedRandom(1)), "Hello there");
        assert_eq!(text.variants(), vec!["Hi there", "Hello there"]);
    }

    #[test]
    fn test_default_pool_has_four_variants() {
        let rules = default_rules(&SiteLinks::default());
        let fallback = rules.last().unwrap();
        assert_eq!(fallback.text.variants().len(), 4);
    }

    #[test]
    fn test_links_flow_into_navigation_effects() {
        let links = SiteLinks {
            pricing_path: "/p".to_string(),
            booking_path: "/b".to_string(),
        };
        let rules = default_rules(&links);
        assert_eq!(rules[0].effect, Some(ScheduledEffect::navigate("/p")));
        assert_eq!(rules[1].effect, Some(ScheduledEffect::navigate("/b")));
    }
}
